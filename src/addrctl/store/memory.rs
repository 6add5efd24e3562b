use super::{AddressStore, StoreData};
use crate::error::{AddrError, Result};
use crate::model::{Address, AddressId, Customer, CustomerId, CustomerSelector, RegionId};
use std::collections::HashSet;
use tracing::debug;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    data: StoreData,
    failing_deletes: HashSet<AddressId>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    /// Makes every delete of `id` fail with a store error.
    pub fn fail_delete_of(&mut self, id: AddressId) {
        self.failing_deletes.insert(id);
    }

    fn remove(&mut self, id: AddressId) -> Result<()> {
        if self.failing_deletes.contains(&id) {
            return Err(AddrError::Store(format!(
                "The address with ID {} could not be deleted",
                id
            )));
        }
        self.data.remove_address(id)?;
        debug!(address_id = id, "address removed from memory store");
        Ok(())
    }
}

impl AddressStore for InMemoryStore {
    fn find_customer_by_id(&self, id: CustomerId) -> Result<Customer> {
        self.data
            .customer_by_id(id)
            .cloned()
            .ok_or(AddrError::CustomerNotFound(CustomerSelector::Id(id)))
    }

    fn find_customer_by_email(&self, email: &str) -> Result<Customer> {
        self.data
            .customer_by_email(email)
            .cloned()
            .ok_or_else(|| AddrError::CustomerNotFound(CustomerSelector::Email(email.to_string())))
    }

    fn find_region(&self, country_id: &str, name: &str) -> Result<Option<RegionId>> {
        Ok(self.data.region(country_id, name).map(|r| r.id))
    }

    fn create_address(&mut self, address: Address) -> Result<Address> {
        self.data.insert_address(address)
    }

    fn list_addresses_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Address>> {
        Ok(self.data.addresses_for(customer_id))
    }

    fn delete_address_by_id(&mut self, id: AddressId) -> Result<()> {
        self.remove(id)
    }

    fn delete_address(&mut self, address: &Address) -> Result<()> {
        let id = address
            .id
            .ok_or_else(|| AddrError::Store("Cannot delete an unsaved address".to_string()))?;
        self.remove(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Region;

    /// An address carrying every field the store requires.
    pub fn complete_address(customer_id: CustomerId) -> Address {
        Address {
            firstname: Some("Jane".to_string()),
            lastname: Some("Doe".to_string()),
            street: vec!["1 Main St".to_string()],
            city: Some("Austin".to_string()),
            postcode: Some("73301".to_string()),
            country_id: Some("US".to_string()),
            telephone: Some("555-0100".to_string()),
            ..Address::new(customer_id)
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_customer(mut self, id: CustomerId, email: &str) -> Self {
            self.store.data.customers.push(Customer::new(id, email));
            self
        }

        pub fn with_region(mut self, id: RegionId, country_id: &str, name: &str) -> Self {
            self.store
                .data
                .regions
                .push(Region::new(id, country_id, name));
            self
        }

        pub fn with_addresses(mut self, customer_id: CustomerId, count: usize) -> Self {
            for i in 0..count {
                let mut address = complete_address(customer_id);
                address.street = vec![format!("{} Main St", i + 1)];
                self.store.data.insert_address(address).unwrap();
            }
            self
        }

        pub fn with_failing_delete(mut self, id: AddressId) -> Self {
            self.store.fail_delete_of(id);
            self
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn delete_by_id_reports_missing_address() {
        let mut store = StoreFixture::new().with_customer(1, "a@example.com").build();
        let err = store.delete_address_by_id(4).unwrap_err();
        assert!(matches!(err, AddrError::AddressNotFound(4)));
    }

    #[test]
    fn injected_failure_keeps_the_address() {
        let mut store = StoreFixture::new()
            .with_customer(1, "a@example.com")
            .with_addresses(1, 1)
            .with_failing_delete(1)
            .build();

        assert!(store.delete_address_by_id(1).is_err());
        assert_eq!(store.list_addresses_for_customer(1).unwrap().len(), 1);
    }

    #[test]
    fn lists_only_the_customers_addresses() {
        let store = StoreFixture::new()
            .with_customer(1, "a@example.com")
            .with_customer(2, "b@example.com")
            .with_addresses(1, 2)
            .with_addresses(2, 1)
            .build();

        let listed = store.list_addresses_for_customer(1).unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|a| a.customer_id == 1));
        assert!(store.list_addresses_for_customer(11).unwrap().is_empty());
    }
}
