use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrError, Result};
use crate::model::AddressId;
use crate::store::AddressStore;

pub fn run<S: AddressStore>(store: &mut S, address_id: AddressId) -> Result<CmdResult> {
    store.delete_address_by_id(address_id).map_err(|e| match e {
        not_found @ AddrError::AddressNotFound(_) => not_found,
        other => AddrError::RemoveAddress(other.to_string()),
    })?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Address with ID {} has been removed.",
        address_id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_existing_address() {
        let mut store = StoreFixture::new()
            .with_customer(1, "a@example.com")
            .with_addresses(1, 2)
            .build();

        let result = run(&mut store, 2).unwrap();
        assert_eq!(result.messages[0].content, "Address with ID 2 has been removed.");

        let remaining = store.list_addresses_for_customer(1).unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|a| a.id != Some(2)));
    }

    #[test]
    fn missing_address_does_not_exist() {
        let mut store = StoreFixture::new().build();
        let err = run(&mut store, 12).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Address with ID 12 does not exist.");
    }

    #[test]
    fn other_failures_are_wrapped() {
        let mut store = StoreFixture::new()
            .with_customer(1, "a@example.com")
            .with_addresses(1, 1)
            .with_failing_delete(1)
            .build();

        let err = run(&mut store, 1).unwrap_err();
        assert!(matches!(err, AddrError::RemoveAddress(_)));
        assert_eq!(
            err.to_string(),
            "An error occurred: The address with ID 1 could not be deleted"
        );
    }
}
