use crate::error::{AddrError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type CustomerId = u64;
pub type AddressId = u64;
pub type RegionId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            firstname: None,
            lastname: None,
        }
    }
}

/// Reference data used to translate a region name into an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub country_id: String,
    pub name: String,
}

impl Region {
    pub fn new(id: RegionId, country_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            country_id: country_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Assigned by the store on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub street: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<RegionId>,
    // Free-text display name; filled from reference data when region_id resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub is_default_billing: bool,
    #[serde(default)]
    pub is_default_shipping: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Address {
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            ..Self::default()
        }
    }

    pub fn street_line(&self) -> String {
        self.street.join(", ")
    }
}

/// Identifies the customer a command operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerSelector {
    Id(CustomerId),
    Email(String),
}

impl CustomerSelector {
    /// Builds a selector from the two optional command inputs.
    ///
    /// A zero id and a blank email count as absent. Exactly one must remain.
    pub fn from_options(id: Option<CustomerId>, email: Option<String>) -> Result<Self> {
        let id = id.filter(|id| *id > 0);
        let email = email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());

        match (id, email) {
            (Some(id), None) => Ok(Self::Id(id)),
            (None, Some(email)) => Ok(Self::Email(email)),
            (None, None) => Err(AddrError::missing_selector()),
            (Some(_), Some(_)) => Err(AddrError::ambiguous_selector()),
        }
    }
}

impl fmt::Display for CustomerSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "ID {}", id),
            Self::Email(email) => write!(f, "email {}", email),
        }
    }
}

/// The user-supplied region value of a new address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionInput {
    Id(RegionId),
    Name(String),
}

impl RegionInput {
    /// Digits-only input is taken verbatim as a region id; anything else is a name.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = trimmed.parse::<RegionId>() {
                return Some(Self::Id(id));
            }
        }
        Some(Self::Name(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_prefers_the_only_present_value() {
        assert_eq!(
            CustomerSelector::from_options(Some(7), None).unwrap(),
            CustomerSelector::Id(7)
        );
        assert_eq!(
            CustomerSelector::from_options(None, Some(" jane@example.com ".into())).unwrap(),
            CustomerSelector::Email("jane@example.com".into())
        );
    }

    #[test]
    fn selector_treats_zero_and_blank_as_absent() {
        let err = CustomerSelector::from_options(Some(0), Some("  ".into())).unwrap_err();
        assert!(matches!(err, AddrError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Please supply either customer ID or email");
    }

    #[test]
    fn selector_rejects_both() {
        let err = CustomerSelector::from_options(Some(1), Some("a@b.c".into())).unwrap_err();
        assert!(err.to_string().ends_with("not both"));
    }

    #[test]
    fn region_input_numeric_and_named() {
        assert_eq!(RegionInput::parse("12"), Some(RegionInput::Id(12)));
        assert_eq!(RegionInput::parse(" 043 "), Some(RegionInput::Id(43)));
        assert_eq!(
            RegionInput::parse("Texas"),
            Some(RegionInput::Name("Texas".into()))
        );
        assert_eq!(
            RegionInput::parse("12.5"),
            Some(RegionInput::Name("12.5".into()))
        );
        assert_eq!(RegionInput::parse(""), None);
    }

    #[test]
    fn street_lines_join_in_order() {
        let mut address = Address::new(1);
        address.street = vec!["Main St 1".into(), "Apt 4".into()];
        assert_eq!(address.street_line(), "Main St 1, Apt 4");
    }
}
