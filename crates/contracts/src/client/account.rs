use std::ops::Deref;

use alloy::{
    network::TransactionBuilder,
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use alloy_primitives::{Address, Bytes, FixedBytes, B256, U256};
use tracing::debug;

use super::{send_request, Erc725Client};
use crate::{
    errors::ContractError,
    events::{self, DecodedEvent},
    signing,
    sol::{ValueReceived, ERC725Account},
};

/// A client for an ERC725Account deployment.
///
/// Dereferences to [`Erc725Client`] for the functions shared with ERC725.
#[derive(Clone)]
pub struct Erc725AccountClient<P> {
    erc725: Erc725Client<P>,
    account: ERC725Account::ERC725AccountInstance<P>,
}

impl<P: Provider + Clone> Erc725AccountClient<P> {
    /// Binds to an existing deployment.
    pub fn load(address: Address, provider: P) -> Self {
        Self {
            erc725: Erc725Client::load(address, provider.clone()),
            account: ERC725Account::new(address, provider),
        }
    }

    /// Deploys a new account owned by `owner`.
    pub async fn deploy(provider: P, owner: Address) -> Result<Self, ContractError> {
        let erc725 =
            Erc725Client::deploy_with_init_code(provider.clone(), &ERC725Account::BYTECODE, owner)
                .await?;
        Ok(Self::load(erc725.address(), provider))
    }

    /// The underlying generated contract instance.
    pub fn account(&self) -> &ERC725Account::ERC725AccountInstance<P> {
        &self.account
    }

    /// The ERC1271 result for `signature` over `hash`.
    ///
    /// Returns [`crate::constants::ERC1271_MAGIC_VALUE`] when the owner signed `hash` and
    /// [`crate::constants::ERC1271_FAIL_VALUE`] otherwise. Malformed signatures make the call
    /// revert.
    pub async fn is_valid_signature(
        &self,
        hash: B256,
        signature: Bytes,
    ) -> Result<FixedBytes<4>, ContractError> {
        debug!(address = %self.address(), %hash, "isValidSignature");
        Ok(self.account.isValidSignature(hash, signature).call().await?)
    }

    /// Whether `isValidSignature` returns the magic value.
    pub async fn check_signature(&self, hash: B256, signature: Bytes) -> Result<bool, ContractError> {
        let value = self.is_valid_signature(hash, signature).await?;
        Ok(signing::is_magic_value(value))
    }

    /// Sends `value` wei to the account, which emits `ValueReceived`.
    pub async fn send_value(&self, value: U256) -> Result<TransactionReceipt, ContractError> {
        let tx = TransactionRequest::default().with_to(self.address()).with_value(value);
        send_request(self.provider(), tx, "sendValue").await
    }

    /// The `ValueReceived` events this account emitted in a transaction.
    pub fn value_received_events(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<DecodedEvent<ValueReceived>>, ContractError> {
        events::decode_receipt_from(receipt, self.address())
    }
}

impl<P> Deref for Erc725AccountClient<P> {
    type Target = Erc725Client<P>;

    fn deref(&self) -> &Self::Target {
        &self.erc725
    }
}
