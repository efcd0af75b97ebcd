use alloy::{providers::Provider, rpc::types::TransactionReceipt};
use alloy_primitives::{Address, Bytes, FixedBytes, B256, U256};
use alloy_sol_types::{SolEvent, SolValue};
use tracing::{debug, warn};

use super::{deploy_code, send_call};
use crate::{
    errors::ContractError,
    events::{self, DecodedEvent, EventStream},
    operation::{self, Operation},
    sol::{ContractCreated, DataChanged, Executed, OwnershipTransferred, ERC725},
};

/// A client for an ERC725 deployment.
///
/// ERC725Account exposes the same functions, so this client also works against accounts.
#[derive(Clone)]
pub struct Erc725Client<P> {
    contract: ERC725::ERC725Instance<P>,
}

impl<P: Provider> Erc725Client<P> {
    /// Binds to an existing deployment.
    pub fn load(address: Address, provider: P) -> Self {
        Self { contract: ERC725::new(address, provider) }
    }

    /// Deploys ERC725 from caller provided creation code, appending the encoded `_newOwner`.
    ///
    /// The creation code of ERC725 is not shipped with this crate.
    pub async fn deploy_with_init_code(
        provider: P,
        creation_code: &[u8],
        owner: Address,
    ) -> Result<Self, ContractError> {
        let address = deploy_code(&provider, constructor_init_code(creation_code, owner)).await?;
        Ok(Self::load(address, provider))
    }

    /// The address of the contract.
    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// The provider used for calls and transactions.
    pub fn provider(&self) -> &P {
        self.contract.provider()
    }

    /// The underlying generated contract instance.
    pub fn instance(&self) -> &ERC725::ERC725Instance<P> {
        &self.contract
    }

    /// Returns the value stored under `key`. Unset keys return empty bytes.
    pub async fn get_data(&self, key: B256) -> Result<Bytes, ContractError> {
        debug!(address = %self.address(), %key, "getData");
        Ok(self.contract.getData(key).call().await?)
    }

    /// Returns the values stored under each key, in order.
    pub async fn get_data_many(&self, keys: &[B256]) -> Result<Vec<Bytes>, ContractError> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push(self.get_data(*key).await?);
        }
        Ok(values)
    }

    /// Returns the current owner. The zero address means ownership was renounced.
    pub async fn owner(&self) -> Result<Address, ContractError> {
        debug!(address = %self.address(), "owner");
        Ok(self.contract.owner().call().await?)
    }

    /// Whether the contract reports `interface_id` through ERC165.
    pub async fn supports_interface(&self, interface_id: FixedBytes<4>) -> Result<bool, ContractError> {
        debug!(address = %self.address(), %interface_id, "supportsInterface");
        Ok(self.contract.supportsInterface(interface_id).call().await?)
    }

    /// Stores `value` under `key`. Only the owner may call this.
    pub async fn set_data(&self, key: B256, value: Bytes) -> Result<TransactionReceipt, ContractError> {
        send_call(self.contract.setData(key, value), "setData").await
    }

    /// Executes `operation` on behalf of the contract. Only the owner may call this.
    ///
    /// DELEGATECALL is rejected before anything is sent since the contract reverts on it.
    pub async fn execute(
        &self,
        operation: Operation,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> Result<TransactionReceipt, ContractError> {
        if !operation.is_supported() {
            return Err(ContractError::UnsupportedOperation { operation: operation.code() });
        }
        send_call(self.contract.execute(operation.code(), to, value, data), "execute").await
    }

    /// Deploys `init_code` through CREATE2 and returns the address of the new contract.
    pub async fn create2(
        &self,
        init_code: &[u8],
        salt: B256,
        value: U256,
    ) -> Result<(TransactionReceipt, Address), ContractError> {
        let expected = operation::predict_create2_address(self.address(), salt, init_code);
        let payload = operation::create2_payload(init_code, salt);
        let receipt = self.execute(Operation::Create2, Address::ZERO, value, payload).await?;
        let created = self.created_address(&receipt)?;
        if created != expected {
            warn!(%created, %expected, "CREATE2 address differs from the predicted one");
        }
        Ok((receipt, created))
    }

    /// Deploys `init_code` through CREATE and returns the address of the new contract.
    pub async fn create(
        &self,
        init_code: Bytes,
        value: U256,
    ) -> Result<(TransactionReceipt, Address), ContractError> {
        let receipt = self.execute(Operation::Create, Address::ZERO, value, init_code).await?;
        let created = self.created_address(&receipt)?;
        Ok((receipt, created))
    }

    /// Transfers ownership to `new_owner`. Only the owner may call this.
    pub async fn transfer_ownership(
        &self,
        new_owner: Address,
    ) -> Result<TransactionReceipt, ContractError> {
        send_call(self.contract.transferOwnership(new_owner), "transferOwnership").await
    }

    /// Leaves the contract without an owner. Only the owner may call this.
    pub async fn renounce_ownership(&self) -> Result<TransactionReceipt, ContractError> {
        send_call(self.contract.renounceOwnership(), "renounceOwnership").await
    }

    /// The `ContractCreated` events this contract emitted in a transaction.
    pub fn contract_created_events(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<DecodedEvent<ContractCreated>>, ContractError> {
        events::decode_receipt_from(receipt, self.address())
    }

    /// The `DataChanged` events this contract emitted in a transaction.
    pub fn data_changed_events(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<DecodedEvent<DataChanged>>, ContractError> {
        events::decode_receipt_from(receipt, self.address())
    }

    /// The `Executed` events this contract emitted in a transaction.
    pub fn executed_events(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<DecodedEvent<Executed>>, ContractError> {
        events::decode_receipt_from(receipt, self.address())
    }

    /// The `OwnershipTransferred` events this contract emitted in a transaction.
    pub fn ownership_transferred_events(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<DecodedEvent<OwnershipTransferred>>, ContractError> {
        events::decode_receipt_from(receipt, self.address())
    }

    /// Every `E` this contract emitted between `from_block` and `to_block` (or the latest block).
    pub async fn logs<E: SolEvent>(
        &self,
        from_block: u64,
        to_block: Option<u64>,
    ) -> Result<Vec<DecodedEvent<E>>, ContractError> {
        events::query(self.provider(), self.address(), from_block, to_block).await
    }

    /// Streams every new `E` this contract emits.
    pub async fn watch<E: SolEvent + Send + 'static>(
        &self,
        from_block: u64,
    ) -> Result<EventStream<E>, ContractError> {
        events::watch(self.provider(), self.address(), from_block).await
    }

    fn created_address(&self, receipt: &TransactionReceipt) -> Result<Address, ContractError> {
        self.contract_created_events(receipt)?
            .first()
            .map(|created| created.event.contractAddress)
            .ok_or(ContractError::MissingContractAddress { tx_hash: receipt.transaction_hash })
    }
}

/// Appends the ABI encoded `_newOwner` constructor argument to the creation code.
pub(crate) fn constructor_init_code(creation_code: &[u8], owner: Address) -> Bytes {
    let mut init_code = creation_code.to_vec();
    init_code.extend_from_slice(&owner.abi_encode());
    init_code.into()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn test_constructor_init_code_appends_owner_word() {
        let owner = address!("5555555555555555555555555555555555555555");
        let init_code = constructor_init_code(&[0x60, 0x80], owner);
        assert_eq!(init_code.len(), 2 + 32);
        assert_eq!(&init_code[..2], &[0x60, 0x80]);
        assert!(init_code[2..14].iter().all(|b| *b == 0));
        assert_eq!(&init_code[14..], owner.as_slice());
    }
}
