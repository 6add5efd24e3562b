use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrError, Result};
use crate::model::{Address, CustomerSelector, RegionInput};
use crate::store::AddressStore;
use tracing::debug;

use super::helpers::resolve_customer;
use super::region::resolve_region;

/// Field values for a new address. Nothing here is validated by the command;
/// the store decides what it accepts.
#[derive(Debug, Clone, Default)]
pub struct AddressInput {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub street: Vec<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub region: Option<String>,
    pub country_id: Option<String>,
    pub telephone: Option<String>,
    pub company: Option<String>,
    pub default_billing: bool,
    pub default_shipping: bool,
}

pub fn run<S: AddressStore>(
    store: &mut S,
    selector: &CustomerSelector,
    input: AddressInput,
) -> Result<CmdResult> {
    let customer = resolve_customer(store, selector)?;

    let mut address = Address {
        firstname: input.firstname,
        lastname: input.lastname,
        street: input.street,
        city: input.city,
        postcode: input.postcode,
        country_id: input.country_id,
        telephone: input.telephone,
        company: input.company,
        is_default_billing: input.default_billing,
        is_default_shipping: input.default_shipping,
        ..Address::new(customer.id)
    };

    if let Some(region) = input.region.as_deref().and_then(RegionInput::parse) {
        match resolve_region(store, address.country_id.as_deref(), &region)? {
            Some(region_id) => address.region_id = Some(region_id),
            None => debug!(?region, "region not found, leaving it unset"),
        }
    }

    let saved = store
        .create_address(address)
        .map_err(|e| AddrError::SaveAddress(e.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully added address (ID: {}) to customer {} ({}).",
        saved.id.unwrap_or_default(),
        customer.email,
        customer.id
    )));
    Ok(result
        .with_customer(customer)
        .with_affected_addresses(vec![saved]))
}
