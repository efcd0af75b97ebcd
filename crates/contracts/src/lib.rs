//! LUKSO ERC725 Contract Bindings.
//!
//! Typed clients for three contracts: ERC725 (a key/value store with a generic executor, guarded
//! by a single owner), ERC725Account (ERC725 with ERC1271 signature validation that accepts plain
//! value transfers) and BasicUniversalReceiver (a minimal LSP1 callback contract).
//!
//! ABI encoding, signing, nonce management and log filtering are delegated to `alloy`; this crate
//! only maps the contract ABIs onto typed calls, receipts and event streams.

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::too_many_arguments)]
#![warn(missing_docs)]

pub mod client;
pub mod constants;
pub mod errors;
pub mod events;
pub mod keys;
pub mod operation;
pub mod signing;
pub mod sol;

pub use client::{Erc725AccountClient, Erc725Client, UniversalReceiverClient};
pub use errors::ContractError;
pub use events::{DecodedEvent, EventStream, LspEvent};
pub use operation::Operation;
