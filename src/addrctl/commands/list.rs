use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CustomerSelector;
use crate::store::AddressStore;

use super::helpers::resolve_customer;

pub fn run<S: AddressStore>(store: &S, selector: &CustomerSelector) -> Result<CmdResult> {
    let customer = resolve_customer(store, selector)?;
    let addresses = store.list_addresses_for_customer(customer.id)?;

    let mut result = CmdResult::default();
    if addresses.is_empty() {
        result.add_message(CmdMessage::info("No addresses found for this customer."));
    }

    Ok(result
        .with_customer(customer)
        .with_listed_addresses(addresses))
}
