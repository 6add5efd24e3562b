use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CustomerSelector;
use crate::store::AddressStore;
use tracing::debug;

use super::helpers::resolve_customer;

/// Deletes every address of the customer, one at a time.
///
/// A failed delete is reported as a warning and the loop moves on; deletes
/// that already went through stay applied.
pub fn run<S: AddressStore>(store: &mut S, selector: &CustomerSelector) -> Result<CmdResult> {
    let customer = resolve_customer(store, selector)?;
    let addresses = store.list_addresses_for_customer(customer.id)?;

    let mut result = CmdResult::default();
    if addresses.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No addresses found for customer ID {}.",
            customer.id
        )));
        return Ok(result.with_customer(customer));
    }

    let mut removed = Vec::with_capacity(addresses.len());
    for address in addresses {
        match store.delete_address(&address) {
            Ok(()) => removed.push(address),
            Err(e) => {
                let id = address.id.map(|id| id.to_string()).unwrap_or_default();
                debug!(address_id = %id, error = %e, "address delete failed");
                result.add_message(CmdMessage::warning(format!(
                    "Could not delete address ID {}: {}",
                    id, e
                )));
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Successfully removed {} address(es) for customer ID {}.",
        removed.len(),
        customer.id
    )));
    Ok(result
        .with_customer(customer)
        .with_affected_addresses(removed))
}
