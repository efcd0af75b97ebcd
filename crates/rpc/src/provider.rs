use std::time::Duration;

use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::client::RpcClient,
    signers::local::PrivateKeySigner,
};
use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

/// Default interval at which pending transactions and log filters are polled.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(4);

/// Parses an HTTP(S) RPC endpoint.
pub fn parse_rpc_url(rpc_url: &str) -> Result<Url> {
    let url = Url::parse(rpc_url).with_context(|| format!("invalid rpc url: {rpc_url}"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => anyhow::bail!("unsupported rpc url scheme '{scheme}', expected http or https"),
    }
}

/// Configure an HTTP client polling at `poll_interval`.
fn http_client(url: Url, poll_interval: Duration) -> RpcClient {
    debug!(%url, ?poll_interval, "connecting to rpc");
    RpcClient::new_http(url).with_poll_interval(poll_interval)
}

/// Connects a read only provider. Transactions sent through it must be signed by the node.
#[must_use]
pub fn connect(url: Url, poll_interval: Duration) -> DynProvider {
    ProviderBuilder::new().connect_client(http_client(url, poll_interval)).erased()
}

/// Connects a provider that fills and signs transactions with `signer`.
#[must_use]
pub fn connect_with_signer(
    url: Url,
    signer: PrivateKeySigner,
    poll_interval: Duration,
) -> DynProvider {
    ProviderBuilder::new().wallet(signer).connect_client(http_client(url, poll_interval)).erased()
}
