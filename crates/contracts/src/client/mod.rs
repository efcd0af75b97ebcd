//! Clients.
//!
//! Typed wrappers binding a contract ABI to an address and a provider. View functions return the
//! decoded value, state changing functions wait for the receipt and fail if the transaction
//! reverted.

mod account;
mod erc725;
mod receiver;

pub use account::Erc725AccountClient;
pub use erc725::Erc725Client;
pub use receiver::UniversalReceiverClient;

use std::time::Duration;

use alloy::{
    contract::{CallBuilder, CallDecoder},
    network::{ReceiptResponse, TransactionBuilder},
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use alloy_primitives::{Address, Bytes, B256};
use tracing::{debug, info, warn};

use crate::errors::ContractError;

/// How many times a receipt is requested before giving up on a sent transaction.
const RECEIPT_POLL_ATTEMPTS: u32 = 40;

/// Sends a contract call as a transaction and waits for a successful receipt.
pub(crate) async fn send_call<P, D>(
    call: CallBuilder<P, D>,
    method: &'static str,
) -> Result<TransactionReceipt, ContractError>
where
    P: Provider,
    D: CallDecoder,
{
    let pending = call.send().await?;
    confirm(pending.provider(), *pending.tx_hash(), method).await
}

/// Sends a raw transaction request and waits for a successful receipt.
pub(crate) async fn send_request<P: Provider>(
    provider: &P,
    tx: TransactionRequest,
    method: &'static str,
) -> Result<TransactionReceipt, ContractError> {
    let pending = provider.send_transaction(tx).await?;
    confirm(provider, *pending.tx_hash(), method).await
}

/// Deploys `init_code` (creation code followed by the encoded constructor arguments).
pub(crate) async fn deploy_code<P: Provider>(
    provider: &P,
    init_code: Bytes,
) -> Result<Address, ContractError> {
    let tx = TransactionRequest::default().with_deploy_code(init_code);
    let receipt = send_request(provider, tx, "deploy").await?;
    let address = receipt
        .contract_address
        .ok_or(ContractError::MissingContractAddress { tx_hash: receipt.transaction_hash })?;
    info!(%address, tx_hash = %receipt.transaction_hash, "deployed contract");
    Ok(address)
}

/// Waits for the receipt of `tx_hash` and fails if the transaction reverted.
async fn confirm<P: Provider>(
    provider: &P,
    tx_hash: B256,
    method: &'static str,
) -> Result<TransactionReceipt, ContractError> {
    debug!(method, %tx_hash, "sent transaction");

    let receipt = wait_for_receipt(provider, tx_hash, provider.client().poll_interval()).await?;
    if !receipt.status() {
        warn!(method, %tx_hash, "transaction reverted");
        return Err(ContractError::Reverted { tx_hash });
    }

    info!(
        method,
        %tx_hash,
        block = ?receipt.block_number,
        gas_used = receipt.gas_used,
        "transaction confirmed"
    );
    Ok(receipt)
}

/// Polls `eth_getTransactionReceipt` until the transaction is mined.
async fn wait_for_receipt<P: Provider>(
    provider: &P,
    tx_hash: B256,
    poll_interval: Duration,
) -> Result<TransactionReceipt, ContractError> {
    for attempt in 1..=RECEIPT_POLL_ATTEMPTS {
        if let Some(receipt) = provider.get_transaction_receipt(tx_hash).await? {
            return Ok(receipt);
        }
        debug!(%tx_hash, attempt, "receipt not available yet");
        if attempt < RECEIPT_POLL_ATTEMPTS {
            tokio::time::sleep(poll_interval).await;
        }
    }
    Err(ContractError::ReceiptTimeout { tx_hash, attempts: RECEIPT_POLL_ATTEMPTS })
}
