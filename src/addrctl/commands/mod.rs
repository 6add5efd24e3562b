use crate::model::{Address, Customer};

pub mod add;
pub mod helpers;
pub mod list;
pub mod region;
pub mod remove;
pub mod remove_all;

pub use add::AddressInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub customer: Option<Customer>,
    pub affected_addresses: Vec<Address>,
    pub listed_addresses: Vec<Address>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_affected_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.affected_addresses = addresses;
        self
    }

    pub fn with_listed_addresses(mut self, addresses: Vec<Address>) -> Self {
        self.listed_addresses = addresses;
        self
    }
}
