//! ERC725Y Data Keys.
//!
//! Helpers deriving the `bytes32` keys passed to `getData` / `setData` following the LSP2 key
//! layouts, plus a few well-known keys.

use alloy_primitives::{b256, fixed_bytes, keccak256, Address, FixedBytes, B256};

/// `keccak256("LSP3Profile")`.
pub const LSP3_PROFILE: B256 =
    b256!("5ef83ad9559033e6e941db7d7c495acdce616347d28e90c7ce47cbfcfcad3bc5");

/// `SupportedStandards:LSP3UniversalProfile`.
pub const SUPPORTED_STANDARDS_LSP3: B256 =
    b256!("eafec4d89fa9619884b60000abe425d64acd861a49b8ddf5c0b6962110481f38");

/// The key the ERC725Account constructor sets to [`ERC725_ACCOUNT_STANDARD`], in the legacy
/// `SupportedStandards` layout of [`legacy_supported_standards_key`].
pub const SUPPORTED_STANDARDS_ERC725_ACCOUNT: B256 =
    b256!("eafec4d89fa9619884b6b89135626455000000000000000000000000afdeb5d6");

/// `bytes4(keccak256("ERC725Account"))`, the value stored under
/// [`SUPPORTED_STANDARDS_ERC725_ACCOUNT`].
pub const ERC725_ACCOUNT_STANDARD: FixedBytes<4> = fixed_bytes!("afdeb5d6");

/// `keccak256("LSP1UniversalReceiverDelegate")`.
pub const LSP1_UNIVERSAL_RECEIVER_DELEGATE: B256 =
    b256!("0cfc51aec37c55a4d0b1a65c6255c4bf2fbdf6277f3cc0730c45b828b6db8b47");

/// A key stored as a single value: `keccak256(name)`.
#[must_use]
pub fn singleton_key(name: &str) -> B256 {
    keccak256(name)
}

/// A mapping key: `bytes10(keccak256(first)) ++ bytes2(0) ++ bytes20(keccak256(second))`.
#[must_use]
pub fn mapping_key(first: &str, second: &str) -> B256 {
    let second = keccak256(second);
    mapping_key_raw(first, &second[..20])
}

/// A mapping key over an address: `bytes10(keccak256(first)) ++ bytes2(0) ++ address`.
#[must_use]
pub fn mapping_key_with_address(first: &str, address: Address) -> B256 {
    mapping_key_raw(first, address.as_slice())
}

fn mapping_key_raw(first: &str, tail: &[u8]) -> B256 {
    let mut key = B256::ZERO;
    key[..10].copy_from_slice(&keccak256(first)[..10]);
    key[12..].copy_from_slice(tail);
    key
}

/// A `SupportedStandards` key as written by ERC725Account:
/// `bytes16(keccak256("SupportedStandards")) ++ bytes12(0) ++ bytes4(keccak256(standard))`.
///
/// Later LSP2 revisions use [`mapping_key`] for the same purpose, so the two layouts differ.
#[must_use]
pub fn legacy_supported_standards_key(standard: &str) -> B256 {
    let mut key = B256::ZERO;
    key[..16].copy_from_slice(&keccak256("SupportedStandards")[..16]);
    key[28..].copy_from_slice(&keccak256(standard)[..4]);
    key
}

/// The key holding the length of an array: `keccak256("Name[]")`.
///
/// `name` may be passed with or without the trailing `[]`.
#[must_use]
pub fn array_length_key(name: &str) -> B256 {
    keccak256(array_name(name).as_bytes())
}

/// The key of one array element: `bytes16(keccak256("Name[]")) ++ bytes16(index)`.
#[must_use]
pub fn array_index_key(name: &str, index: u128) -> B256 {
    let mut key = B256::ZERO;
    key[..16].copy_from_slice(&array_length_key(name)[..16]);
    key[16..].copy_from_slice(&index.to_be_bytes());
    key
}

fn array_name(name: &str) -> String {
    if name.ends_with("[]") {
        name.to_string()
    } else {
        format!("{name}[]")
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256};

    use super::*;

    #[test]
    fn test_singleton_keys() {
        assert_eq!(singleton_key("LSP3Profile"), LSP3_PROFILE);
        assert_eq!(singleton_key("LSP1UniversalReceiverDelegate"), LSP1_UNIVERSAL_RECEIVER_DELEGATE);
    }

    #[test]
    fn test_mapping_key() {
        assert_eq!(
            mapping_key("SupportedStandards", "LSP3UniversalProfile"),
            SUPPORTED_STANDARDS_LSP3
        );
    }

    #[test]
    fn test_account_supported_standards_key() {
        assert_eq!(legacy_supported_standards_key("ERC725Account"), SUPPORTED_STANDARDS_ERC725_ACCOUNT);
        assert_eq!(&keccak256("ERC725Account")[..4], ERC725_ACCOUNT_STANDARD.as_slice());
        assert_ne!(
            mapping_key("SupportedStandards", "ERC725Account"),
            SUPPORTED_STANDARDS_ERC725_ACCOUNT
        );

        // The account constructor writes this key and value.
        let bytecode = &crate::sol::ERC725Account::BYTECODE;
        assert!(bytecode.windows(32).any(|w| w == SUPPORTED_STANDARDS_ERC725_ACCOUNT.as_slice()));
        assert!(bytecode.windows(4).any(|w| w == ERC725_ACCOUNT_STANDARD.as_slice()));
    }

    #[test]
    fn test_mapping_key_with_address() {
        let asset = address!("cafecafecafecafecafecafecafecafecafecafe");
        let key = mapping_key_with_address("LSP5ReceivedAssetsMap", asset);
        assert_eq!(&key[..12], hex::decode("812c4334633eb816c80d0000").unwrap().as_slice());
        assert_eq!(&key[12..], asset.as_slice());
    }

    #[test]
    fn test_array_keys() {
        let length = b256!("6460ee3c0aac563ccbf76d6e1d07bada78e3a9514e6382b736ed3f478ab7b90b");
        assert_eq!(array_length_key("LSP5ReceivedAssets[]"), length);
        assert_eq!(array_length_key("LSP5ReceivedAssets"), length);

        let element = array_index_key("LSP5ReceivedAssets", 3);
        assert_eq!(&element[..16], &length[..16]);
        assert_eq!(element[31], 3);
        assert!(element[16..31].iter().all(|b| *b == 0));
    }
}
