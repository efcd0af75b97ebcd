//! Constants.
//!
//! ERC165 interface ids, ERC1271 return values and the LSP1 type ids understood by the contracts.

use alloy_primitives::{b256, fixed_bytes, FixedBytes, B256};

/// ERC165 interface id of `supportsInterface(bytes4)`.
pub const INTERFACE_ID_ERC165: FixedBytes<4> = fixed_bytes!("01ffc9a7");

/// ERC165 interface id of ERC725X, the `execute(uint256,address,uint256,bytes)` selector.
pub const INTERFACE_ID_ERC725X: FixedBytes<4> = fixed_bytes!("44c028fe");

/// ERC165 interface id of ERC725Y, `getData(bytes32) ^ setData(bytes32,bytes)`.
pub const INTERFACE_ID_ERC725Y: FixedBytes<4> = fixed_bytes!("2bd57b73");

/// ERC165 interface id of ERC1271, the `isValidSignature(bytes32,bytes)` selector.
pub const INTERFACE_ID_ERC1271: FixedBytes<4> = fixed_bytes!("1626ba7e");

/// ERC165 interface id of LSP1, the `universalReceiver(bytes32,bytes)` selector.
pub const INTERFACE_ID_LSP1: FixedBytes<4> = fixed_bytes!("6bb56a14");

/// Returned by `isValidSignature` when the signature belongs to the owner.
pub const ERC1271_MAGIC_VALUE: FixedBytes<4> = fixed_bytes!("1626ba7e");

/// Returned by `isValidSignature` when the signature does not belong to the owner.
pub const ERC1271_FAIL_VALUE: FixedBytes<4> = fixed_bytes!("ffffffff");

/// `keccak256("ERC777TokensRecipient")`.
pub const TYPE_ID_ERC777_TOKENS_RECIPIENT: B256 =
    b256!("b281fc8c12954d22544db45de3159a39272895b169a852b314f9cc762e44c53b");

/// `keccak256("ERC777TokensSender")`.
pub const TYPE_ID_ERC777_TOKENS_SENDER: B256 =
    b256!("29ddb589b1fb5fc7cf394961c1adf5f8c6454761adf795e67fe149f658abe895");

/// The type ids BasicUniversalReceiver accepts. Any other type id reverts.
pub const BASIC_RECEIVER_TYPE_IDS: [B256; 2] =
    [TYPE_ID_ERC777_TOKENS_RECIPIENT, TYPE_ID_ERC777_TOKENS_SENDER];

/// The interfaces an ERC725 deployment reports through ERC165.
pub const ERC725_INTERFACES: [FixedBytes<4>; 3] =
    [INTERFACE_ID_ERC165, INTERFACE_ID_ERC725X, INTERFACE_ID_ERC725Y];

/// The interfaces an ERC725Account deployment reports through ERC165.
pub const ERC725_ACCOUNT_INTERFACES: [FixedBytes<4>; 4] =
    [INTERFACE_ID_ERC165, INTERFACE_ID_ERC725X, INTERFACE_ID_ERC725Y, INTERFACE_ID_ERC1271];

/// Whether BasicUniversalReceiver accepts a notification with this type id.
#[must_use]
pub fn is_accepted_type_id(type_id: B256) -> bool {
    BASIC_RECEIVER_TYPE_IDS.contains(&type_id)
}
