//! Errors.
//!
//! This module contains error types that can be emitted by the crate.

use alloy::{contract::Error as AlloyContractError, transports::TransportError};
use alloy_primitives::{B256, U256};
use thiserror::Error;

/// An error returned by the contract clients.
///
/// Errors raised by `alloy` are propagated unchanged inside the transparent variants.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A call or transaction failed while being built, sent or decoded.
    #[error(transparent)]
    Contract(#[from] AlloyContractError),

    /// The RPC transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A log or return value did not match the expected ABI.
    #[error(transparent)]
    Decode(#[from] alloy_sol_types::Error),

    /// A transaction was mined but reverted.
    #[error("Transaction {tx_hash} reverted")]
    Reverted {
        /// The hash of the reverted transaction.
        tx_hash: B256,
    },

    /// No receipt showed up for a sent transaction.
    #[error("No receipt for transaction {tx_hash} after {attempts} attempts")]
    ReceiptTimeout {
        /// The hash of the sent transaction.
        tx_hash: B256,
        /// How many times the receipt was requested.
        attempts: u32,
    },

    /// A deployment receipt did not carry the created contract address.
    #[error("Deployment {tx_hash} did not create a contract")]
    MissingContractAddress {
        /// The hash of the deployment transaction.
        tx_hash: B256,
    },

    /// The value does not name an ERC725X operation.
    #[error("Invalid operation type: {value}")]
    InvalidOperation {
        /// The rejected value.
        value: String,
    },

    /// The operation exists in ERC725X but this contract version rejects it.
    #[error("Operation {operation} is not supported by this contract")]
    UnsupportedOperation {
        /// The numeric operation code.
        operation: U256,
    },

    /// A CREATE2 payload must end with a 32 byte salt.
    #[error("CREATE2 payload of {len} bytes is too short to carry a salt")]
    Create2PayloadTooShort {
        /// The payload length.
        len: usize,
    },

    /// BasicUniversalReceiver reverts for any other type id.
    #[error("Universal receiver does not accept type id {type_id}")]
    UnsupportedTypeId {
        /// The rejected type id.
        type_id: B256,
    },

    /// The signature is malformed and `isValidSignature` would revert.
    #[error(transparent)]
    Signature(#[from] SignatureError),
}

impl ContractError {
    /// Unwraps the RPC transport error behind a failed call or request, if that is the cause.
    ///
    /// Callers deciding whether to retry can inspect the JSON-RPC error kind directly.
    pub fn into_transport_error(self) -> Result<TransportError, Self> {
        match self {
            Self::Transport(e) | Self::Contract(AlloyContractError::TransportError(e)) => Ok(e),
            other => Err(other),
        }
    }
}

/// A signature rejected by the ECDSA checks the account performs before recovery.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SignatureError {
    #[error("ECDSA: invalid signature length: {len}")]
    InvalidLength { len: usize },

    #[error("ECDSA: invalid signature 's' value")]
    InvalidS,

    #[error("ECDSA: invalid signature 'v' value: {v}")]
    InvalidV { v: u8 },

    #[error("ECDSA: invalid signature: {error}")]
    Recovery { error: String },
}
