use alloy::providers::{DynProvider, Provider};
use alloy_primitives::{Address, Bytes, U256};
use anyhow::{bail, Result};
use tracing::debug;

use crate::RetryableRpc;

/// Fetches the native balance of an address.
pub async fn fetch_balance(provider: &DynProvider, address: Address) -> Result<U256> {
    let balance = provider
        .with_retry(|| async { Ok(provider.get_balance(address).await?) }, "get balance")
        .await?;
    debug!("fetched balance for {} with response: {}", address, balance);
    Ok(balance)
}

/// Fetches the latest block number.
pub async fn fetch_block_number(provider: &DynProvider) -> Result<u64> {
    provider.with_retry(|| async { Ok(provider.get_block_number().await?) }, "get block number").await
}

/// Fetches the runtime code deployed at an address.
pub async fn fetch_code(provider: &DynProvider, address: Address) -> Result<Bytes> {
    provider.with_retry(|| async { Ok(provider.get_code_at(address).await?) }, "get code").await
}

/// Fails unless a contract is deployed at `address`.
pub async fn ensure_contract(provider: &DynProvider, address: Address) -> Result<()> {
    if fetch_code(provider, address).await?.is_empty() {
        bail!("no contract deployed at {address}");
    }
    Ok(())
}
