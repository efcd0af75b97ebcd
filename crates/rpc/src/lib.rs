//! RPC.
//!
//! Connecting to an Ethereum JSON-RPC endpoint and retrying reads that fail for transient reasons.

mod fetch;
mod provider;
mod retry;

pub use fetch::*;
pub use provider::*;
pub use retry::*;
