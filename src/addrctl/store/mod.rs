//! # Storage Layer
//!
//! Customers, addresses and regions are owned by a backing store. The
//! [`AddressStore`] trait is the whole contract the commands rely on, so the
//! tool can be pointed at any datastore exposing equivalent operations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store backed by a single JSON document
//! - [`memory::InMemoryStore`]: In-memory store for testing
//!
//! Both keep their records in a [`StoreData`] document, which also carries the
//! rules the store enforces on writes (owning customer must exist, required
//! fields, id assignment, default flag hand-over).
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "customers": [{ "id": 1, "email": "jane@example.com" }],
//!   "regions": [{ "id": 57, "country_id": "US", "name": "Texas" }],
//!   "addresses": [{ "id": 1, "customer_id": 1, ... }],
//!   "next_address_id": 2
//! }
//! ```

use crate::error::{AddrError, Result};
use crate::model::{Address, AddressId, Customer, CustomerId, Region, RegionId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Abstract interface to the backing store.
pub trait AddressStore {
    fn find_customer_by_id(&self, id: CustomerId) -> Result<Customer>;

    /// Email lookup is case-insensitive.
    fn find_customer_by_email(&self, email: &str) -> Result<Customer>;

    /// Exact match on both country and region name.
    fn find_region(&self, country_id: &str, name: &str) -> Result<Option<RegionId>>;

    /// Persist a new address, returning it with its assigned id.
    fn create_address(&mut self, address: Address) -> Result<Address>;

    /// Addresses owned by the customer, in store order.
    fn list_addresses_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Address>>;

    fn delete_address_by_id(&mut self, id: AddressId) -> Result<()>;

    fn delete_address(&mut self, address: &Address) -> Result<()>;
}

/// The persisted document shared by every store implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default = "first_address_id")]
    pub next_address_id: AddressId,
}

fn first_address_id() -> AddressId {
    1
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            customers: Vec::new(),
            regions: Vec::new(),
            addresses: Vec::new(),
            next_address_id: first_address_id(),
        }
    }
}

impl StoreData {
    pub fn customer_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customer_by_email(&self, email: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
    }

    pub fn region(&self, country_id: &str, name: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|r| r.country_id == country_id && r.name == name)
    }

    pub fn addresses_for(&self, customer_id: CustomerId) -> Vec<Address> {
        let mut found: Vec<Address> = self
            .addresses
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        found
    }

    /// Applies the write rules and inserts the address.
    pub fn insert_address(&mut self, mut address: Address) -> Result<Address> {
        if self.customer_by_id(address.customer_id).is_none() {
            return Err(AddrError::Store(format!(
                "No such entity with customerId = {}",
                address.customer_id
            )));
        }
        validate_required(&address)?;

        if let Some(region_id) = address.region_id {
            if let Some(region) = self.regions.iter().find(|r| r.id == region_id) {
                address.region = Some(region.name.clone());
            }
        }

        // A customer has at most one default billing and one default shipping address.
        for other in self
            .addresses
            .iter_mut()
            .filter(|a| a.customer_id == address.customer_id)
        {
            if address.is_default_billing {
                other.is_default_billing = false;
            }
            if address.is_default_shipping {
                other.is_default_shipping = false;
            }
        }

        // The counter may be missing or stale in a hand-edited document.
        let highest = self.addresses.iter().filter_map(|a| a.id).max().unwrap_or(0);
        let id = self.next_address_id.max(highest + 1);
        self.next_address_id = id + 1;
        address.id = Some(id);
        address.created_at = Some(Utc::now());
        self.addresses.push(address.clone());
        Ok(address)
    }

    pub fn remove_address(&mut self, id: AddressId) -> Result<Address> {
        let pos = self
            .addresses
            .iter()
            .position(|a| a.id == Some(id))
            .ok_or(AddrError::AddressNotFound(id))?;
        Ok(self.addresses.remove(pos))
    }
}

fn validate_required(address: &Address) -> Result<()> {
    let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());

    let missing = if !present(&address.firstname) {
        Some("firstname")
    } else if !present(&address.lastname) {
        Some("lastname")
    } else if !address.street.iter().any(|line| !line.trim().is_empty()) {
        Some("street")
    } else if !present(&address.city) {
        Some("city")
    } else if !present(&address.country_id) {
        Some("countryId")
    } else if !present(&address.telephone) {
        Some("telephone")
    } else {
        None
    };

    match missing {
        Some(field) => Err(AddrError::Store(format!(
            "\"{}\" is required. Enter and try again.",
            field
        ))),
        None => Ok(()),
    }
}
