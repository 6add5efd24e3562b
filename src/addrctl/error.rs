use crate::model::{AddressId, CustomerSelector};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Unable to load customer with {0}")]
    CustomerNotFound(CustomerSelector),

    #[error("Address with ID {0} does not exist.")]
    AddressNotFound(AddressId),

    #[error("Error saving address: {0}")]
    SaveAddress(String),

    #[error("An error occurred: {0}")]
    RemoveAddress(String),

    #[error("{0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AddrError {
    pub fn missing_selector() -> Self {
        Self::InvalidInput("Please supply either customer ID or email".to_string())
    }

    pub fn ambiguous_selector() -> Self {
        Self::InvalidInput("Please supply either customer ID or email, not both".to_string())
    }

    /// Customer and address lookups that came back empty.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::CustomerNotFound(_) | Self::AddressNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, AddrError>;
