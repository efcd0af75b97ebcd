//! ERC725X Operations.
//!
//! The operation codes understood by `execute` and the helpers for building CREATE2 payloads.

use std::{fmt, str::FromStr};

use alloy_primitives::{keccak256, Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// The `_operation` argument of `execute`.
///
/// Every supported operation emits `Executed` before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Call `_to` with `_value` and `_data`.
    Call = 0,
    /// Delegate call into `_to`. Rejected by this contract version ("Wrong operation type").
    DelegateCall = 1,
    /// Deploy `_data[..len - 32]` with the salt `_data[len - 32..]`. Also emits `ContractCreated`.
    Create2 = 2,
    /// Deploy `_data` as init code. Also emits `ContractCreated`.
    Create = 3,
}

impl Operation {
    /// All operation codes, in numeric order.
    pub const ALL: [Self; 4] = [Self::Call, Self::DelegateCall, Self::Create2, Self::Create];

    /// Returns the numeric code passed to the contract.
    #[must_use]
    pub fn code(self) -> U256 {
        U256::from(self as u8)
    }

    /// Whether the deployed contract executes this operation rather than reverting.
    #[must_use]
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::DelegateCall)
    }

    /// Whether this operation deploys a contract.
    #[must_use]
    pub fn is_deployment(self) -> bool {
        matches!(self, Self::Create | Self::Create2)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Call => "CALL",
            Self::DelegateCall => "DELEGATECALL",
            Self::Create2 => "CREATE2",
            Self::Create => "CREATE",
        };
        f.write_str(name)
    }
}

impl From<Operation> for U256 {
    fn from(operation: Operation) -> Self {
        operation.code()
    }
}

impl TryFrom<U256> for Operation {
    type Error = ContractError;

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.code() == value)
            .ok_or_else(|| ContractError::InvalidOperation { value: value.to_string() })
    }
}

impl FromStr for Operation {
    type Err = ContractError;

    /// Parses either the operation name (case insensitive) or its numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CALL" => Ok(Self::Call),
            "DELEGATECALL" => Ok(Self::DelegateCall),
            "CREATE2" => Ok(Self::Create2),
            "CREATE" => Ok(Self::Create),
            _ => {
                let value = U256::from_str(s)
                    .map_err(|_| ContractError::InvalidOperation { value: s.to_string() })?;
                Self::try_from(value)
            }
        }
    }
}

/// Builds the `_data` argument for a CREATE2 `execute`: the init code followed by the salt.
#[must_use]
pub fn create2_payload(init_code: &[u8], salt: B256) -> Bytes {
    let mut data = Vec::with_capacity(init_code.len() + 32);
    data.extend_from_slice(init_code);
    data.extend_from_slice(salt.as_slice());
    data.into()
}

/// Splits a CREATE2 `_data` argument back into init code and salt.
pub fn split_create2_payload(data: &[u8]) -> Result<(&[u8], B256), ContractError> {
    if data.len() < 32 {
        return Err(ContractError::Create2PayloadTooShort { len: data.len() });
    }
    let (init_code, salt) = data.split_at(data.len() - 32);
    Ok((init_code, B256::from_slice(salt)))
}

/// Predicts the address of a contract deployed by `deployer` through CREATE2.
#[must_use]
pub fn predict_create2_address(deployer: Address, salt: B256, init_code: &[u8]) -> Address {
    deployer.create2(salt, keccak256(init_code))
}

/// Predicts the address of a contract deployed by `deployer` through CREATE at `nonce`.
#[must_use]
pub fn predict_create_address(deployer: Address, nonce: u64) -> Address {
    deployer.create(nonce)
}
