use std::time::Duration;

use alloy::{
    providers::DynProvider,
    transports::{RpcError, TransportError},
};
use anyhow::Result;
use async_trait::async_trait;
use backoff::{future::retry, Error as BackoffError, ExponentialBackoff};
use tracing::{error, warn};

/// Default timeout for retry operations.
pub const DEFAULT_RETRY_TIMEOUT: Duration = Duration::from_secs(120);

/// JSON-RPC error codes nodes and gateways use for rate limiting.
const RATE_LIMIT_CODES: &[i64] = &[429, -32005, -32016];

/// Trait for implementing retryable RPC operations.
#[async_trait]
pub trait RetryableRpc {
    /// Execute an operation with retries using default timeout.
    async fn with_retry<'a, T, F, Fut>(&'a self, operation: F, operation_name: &str) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: std::future::Future<Output = Result<T>> + Send,
        T: Send;

    /// Execute an operation with retries using custom timeout.
    async fn with_retry_timeout<'a, T, F, Fut>(
        &'a self,
        operation: F,
        timeout: Duration,
        operation_name: &str,
    ) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: std::future::Future<Output = Result<T>> + Send,
        T: Send;
}

/// Whether an error is worth retrying.
///
/// Transport failures and rate limiting are transient. Reverts, decoding failures and every other
/// error response from the node are permanent.
pub fn is_transient(e: &anyhow::Error) -> bool {
    if let Some(rpc) = e.chain().find_map(|cause| cause.downcast_ref::<TransportError>()) {
        return match rpc {
            RpcError::Transport(_) | RpcError::NullResp => true,
            RpcError::ErrorResp(payload) => RATE_LIMIT_CODES.contains(&payload.code),
            _ => false,
        };
    }

    let error_msg = e.to_string().to_lowercase();
    error_msg.contains("error sending request")
        || error_msg.contains("connection refused")
        || error_msg.contains("connection reset")
        || error_msg.contains("broken pipe")
        || error_msg.contains("dns error")
        || error_msg.contains("tls handshake")
        || error_msg.contains("timed out")
        || error_msg.contains("timeout")
        || error_msg.contains("too many requests")
        || error_msg.contains("rate limit")
}

/// Execute an async operation with exponential backoff retries.
pub async fn retry_operation<T, F, Fut>(
    operation: F,
    timeout: Option<Duration>,
    operation_name: &str,
) -> Result<T>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: std::future::Future<Output = Result<T>> + Send,
{
    let backoff = ExponentialBackoff {
        initial_interval: Duration::from_millis(500),
        max_interval: Duration::from_secs(30),
        max_elapsed_time: timeout,
        ..Default::default()
    };

    retry(backoff, || async {
        match operation().await {
            Ok(result) => Ok(result),
            Err(e) if is_transient(&e) => {
                warn!("Transient error when {}: {}, retrying...", operation_name, e);
                Err(BackoffError::transient(e))
            }
            Err(e) => {
                error!("Permanent error when {}: {}", operation_name, e);
                Err(BackoffError::permanent(e))
            }
        }
    })
    .await
}

#[async_trait]
impl RetryableRpc for DynProvider {
    async fn with_retry<'a, T, F, Fut>(&'a self, operation: F, operation_name: &str) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: std::future::Future<Output = Result<T>> + Send,
        T: Send,
    {
        self.with_retry_timeout(operation, DEFAULT_RETRY_TIMEOUT, operation_name).await
    }

    async fn with_retry_timeout<'a, T, F, Fut>(
        &'a self,
        operation: F,
        timeout: Duration,
        operation_name: &str,
    ) -> Result<T>
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: std::future::Future<Output = Result<T>> + Send,
        T: Send,
    {
        retry_operation(operation, Some(timeout), operation_name).await
    }
}
