use super::{AddressStore, StoreData};
use crate::error::{AddrError, Result};
use crate::model::{Address, AddressId, Customer, CustomerId, CustomerSelector, RegionId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store backed by a single JSON document on disk.
///
/// The document is read once by [`FileStore::open`]; every write rewrites it.
pub struct FileStore {
    path: PathBuf,
    data: StoreData,
}

impl FileStore {
    /// Opens the store at `path`, creating an empty document if none exists yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                ensure_dir(parent)?;
            }
            let store = Self {
                path,
                data: StoreData::default(),
            };
            store.save()?;
            debug!(path = %store.path.display(), "initialized empty store");
            return Ok(store);
        }

        let content = fs::read_to_string(&path)?;
        let data: StoreData = serde_json::from_str(&content)?;
        debug!(
            path = %path.display(),
            customers = data.customers.len(),
            addresses = data.addresses.len(),
            "loaded store"
        );
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

impl AddressStore for FileStore {
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
        let saved = self.data.insert_address(address)?;
        self.save()?;
        debug!(address_id = ?saved.id, customer_id = saved.customer_id, "address created");
        Ok(saved)
    }

    fn list_addresses_for_customer(&self, customer_id: CustomerId) -> Result<Vec<Address>> {
        Ok(self.data.addresses_for(customer_id))
    }

    fn delete_address_by_id(&mut self, id: AddressId) -> Result<()> {
        self.data.remove_address(id)?;
        self.save()?;
        debug!(address_id = id, "address deleted");
        Ok(())
    }

    fn delete_address(&mut self, address: &Address) -> Result<()> {
        let id = address
            .id
            .ok_or_else(|| AddrError::Store("Cannot delete an unsaved address".to_string()))?;
        self.delete_address_by_id(id)
    }
}
