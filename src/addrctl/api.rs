//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every address operation, whichever UI is driving it.
//!
//! It normalizes raw inputs (the id/email pair becomes a [`CustomerSelector`])
//! and dispatches to `commands/*.rs`. It does no printing and holds no business
//! logic of its own.
//!
//! `AddressApi<S: AddressStore>` is generic over the backing store:
//! - Production: `AddressApi<FileStore>`
//! - Testing: `AddressApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{AddressId, CustomerId, CustomerSelector};
use crate::store::AddressStore;

/// The main API facade for address operations.
pub struct AddressApi<S: AddressStore> {
    store: S,
}

impl<S: AddressStore> AddressApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_address(
        &mut self,
        customer_id: Option<CustomerId>,
        customer_email: Option<String>,
        input: AddressInput,
    ) -> Result<CmdResult> {
        let selector = CustomerSelector::from_options(customer_id, customer_email)?;
        commands::add::run(&mut self.store, &selector, input)
    }

    pub fn list_addresses(
        &self,
        customer_id: Option<CustomerId>,
        customer_email: Option<String>,
    ) -> Result<CmdResult> {
        let selector = CustomerSelector::from_options(customer_id, customer_email)?;
        commands::list::run(&self.store, &selector)
    }

    pub fn remove_address(&mut self, address_id: AddressId) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, address_id)
    }

    pub fn remove_all_addresses(
        &mut self,
        customer_id: Option<CustomerId>,
        customer_email: Option<String>,
    ) -> Result<CmdResult> {
        let selector = CustomerSelector::from_options(customer_id, customer_email)?;
        commands::remove_all::run(&mut self.store, &selector)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{AddressInput, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddrError;
    use crate::model::{Address, Customer, RegionId};
    use crate::store::memory::fixtures::StoreFixture;
    use std::cell::Cell;

    /// Counts every store call; used to prove selector checks happen first.
    #[derive(Default)]
    struct CountingStore {
        calls: Cell<usize>,
    }

    impl CountingStore {
        fn hit<T>(&self) -> Result<T> {
            self.calls.set(self.calls.get() + 1);
            Err(AddrError::Store("unexpected call".into()))
        }
    }

    impl AddressStore for CountingStore {
        fn find_customer_by_id(&self, _: CustomerId) -> Result<Customer> {
            self.hit()
        }
        fn find_customer_by_email(&self, _: &str) -> Result<Customer> {
            self.hit()
        }
        fn find_region(&self, _: &str, _: &str) -> Result<Option<RegionId>> {
            self.hit()
        }
        fn create_address(&mut self, _: Address) -> Result<Address> {
            self.hit()
        }
        fn list_addresses_for_customer(&self, _: CustomerId) -> Result<Vec<Address>> {
            self.hit()
        }
        fn delete_address_by_id(&mut self, _: AddressId) -> Result<()> {
            self.hit()
        }
        fn delete_address(&mut self, _: &Address) -> Result<()> {
            self.hit()
        }
    }

    #[test]
    fn missing_selector_makes_no_store_calls() {
        let mut api = AddressApi::new(CountingStore::default());

        let add = api.add_address(None, None, AddressInput::default());
        let list = api.list_addresses(Some(0), Some(String::new()));
        let remove_all = api.remove_all_addresses(None, None);

        for outcome in [add.err(), list.err(), remove_all.err()] {
            assert!(matches!(outcome, Some(AddrError::InvalidInput(_))));
        }
        assert_eq!(api.store().calls.get(), 0);
    }

    #[test]
    fn both_selectors_are_rejected() {
        let api = AddressApi::new(CountingStore::default());
        let err = api
            .list_addresses(Some(1), Some("a@example.com".into()))
            .unwrap_err();
        assert!(matches!(err, AddrError::InvalidInput(_)));
        assert_eq!(api.store().calls.get(), 0);
    }

    #[test]
    fn dispatches_to_commands() {
        let store = StoreFixture::new()
            .with_customer(1, "a@example.com")
            .with_addresses(1, 2)
            .build();
        let mut api = AddressApi::new(store);

        let listed = api.list_addresses(Some(1), None).unwrap();
        assert_eq!(listed.listed_addresses.len(), 2);

        api.remove_address(1).unwrap();
        let cleared = api
            .remove_all_addresses(None, Some("a@example.com".into()))
            .unwrap();
        assert_eq!(cleared.affected_addresses.len(), 1);
        assert!(api.store().data().addresses.is_empty());
    }
}
