use crate::error::Result;
use crate::model::{Customer, CustomerSelector};
use crate::store::AddressStore;
use tracing::debug;

/// Resolves the customer a command operates on.
pub fn resolve_customer<S: AddressStore>(store: &S, selector: &CustomerSelector) -> Result<Customer> {
    debug!(%selector, "resolving customer");
    match selector {
        CustomerSelector::Id(id) => store.find_customer_by_id(*id),
        CustomerSelector::Email(email) => store.find_customer_by_email(email),
    }
}
