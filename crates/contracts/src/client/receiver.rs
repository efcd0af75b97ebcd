use alloy::{providers::Provider, rpc::types::TransactionReceipt};
use alloy_primitives::{Address, Bytes, B256};
use alloy_sol_types::SolEvent;
use tracing::debug;

use super::{deploy_code, send_call};
use crate::{
    constants,
    errors::ContractError,
    events::{self, DecodedEvent, EventStream},
    sol::{BasicUniversalReceiver, UniversalReceiver},
};

/// A client for a BasicUniversalReceiver deployment.
///
/// The receiver only accepts the ERC777 tokens recipient and sender type ids. Other type ids are
/// rejected locally with [`ContractError::UnsupportedTypeId`] instead of sending a transaction
/// that would revert.
#[derive(Clone)]
pub struct UniversalReceiverClient<P> {
    contract: BasicUniversalReceiver::BasicUniversalReceiverInstance<P>,
}

impl<P: Provider> UniversalReceiverClient<P> {
    /// Binds to an existing deployment.
    pub fn load(address: Address, provider: P) -> Self {
        Self { contract: BasicUniversalReceiver::new(address, provider) }
    }

    /// Deploys a new receiver. The contract has no constructor arguments.
    pub async fn deploy(provider: P) -> Result<Self, ContractError> {
        let address = deploy_code(&provider, BasicUniversalReceiver::BYTECODE.clone()).await?;
        Ok(Self::load(address, provider))
    }

    /// The address of the receiver.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// The provider used for calls and transactions.
    pub fn provider(&self) -> &P {
        self.contract.provider()
    }

    /// Notifies the receiver and waits for the receipt.
    pub async fn universal_receiver(
        &self,
        type_id: B256,
        data: Bytes,
    ) -> Result<TransactionReceipt, ContractError> {
        ensure_accepted(type_id)?;
        send_call(self.contract.universalReceiver(type_id, data), "universalReceiver").await
    }

    /// Runs `universalReceiver` through `eth_call` and returns its result without sending anything.
    pub async fn simulate_universal_receiver(
        &self,
        type_id: B256,
        data: Bytes,
    ) -> Result<B256, ContractError> {
        ensure_accepted(type_id)?;
        debug!(address = %self.address(), %type_id, "universalReceiver (call)");
        Ok(self.contract.universalReceiver(type_id, data).call().await?)
    }

    /// The `UniversalReceiver` events this receiver emitted in a transaction.
    pub fn universal_receiver_events(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<DecodedEvent<UniversalReceiver>>, ContractError> {
        events::decode_receipt_from(receipt, self.address())
    }

    /// Every `E` this receiver emitted between `from_block` and `to_block` (or the latest block).
    pub async fn logs<E: SolEvent>(
        &self,
        from_block: u64,
        to_block: Option<u64>,
    ) -> Result<Vec<DecodedEvent<E>>, ContractError> {
        events::query(self.provider(), self.address(), from_block, to_block).await
    }

    /// Streams every new `E` this receiver emits.
    pub async fn watch<E: SolEvent + Send + 'static>(
        &self,
        from_block: u64,
    ) -> Result<EventStream<E>, ContractError> {
        events::watch(self.provider(), self.address(), from_block).await
    }
}

fn ensure_accepted(type_id: B256) -> Result<(), ContractError> {
    if constants::is_accepted_type_id(type_id) {
        Ok(())
    } else {
        Err(ContractError::UnsupportedTypeId { type_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{TYPE_ID_ERC777_TOKENS_RECIPIENT, TYPE_ID_ERC777_TOKENS_SENDER};

    #[test]
    fn test_ensure_accepted() {
        assert!(ensure_accepted(TYPE_ID_ERC777_TOKENS_RECIPIENT).is_ok());
        assert!(ensure_accepted(TYPE_ID_ERC777_TOKENS_SENDER).is_ok());
        assert!(matches!(
            ensure_accepted(B256::ZERO),
            Err(ContractError::UnsupportedTypeId { type_id }) if type_id == B256::ZERO
        ));
    }
}
