//! Events.
//!
//! Decoding of contract events from receipts, block range queries and polled log streams.

use std::fmt;

use alloy::{
    eips::BlockNumberOrTag,
    providers::Provider,
    rpc::types::{Filter, Log, TransactionReceipt},
};
use alloy_primitives::Address;
use alloy_sol_types::SolEvent;
use futures::{stream::BoxStream, StreamExt};
use tracing::debug;

use crate::{
    errors::ContractError,
    sol::{
        ContractCreated, DataChanged, Executed, OwnershipTransferred, UniversalReceiver,
        ValueReceived,
    },
};

/// A stream of decoded events, produced by polling the node for new logs.
pub type EventStream<E> = BoxStream<'static, Result<DecodedEvent<E>, ContractError>>;

/// A decoded event together with the log it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedEvent<E> {
    /// The decoded event.
    pub event: E,
    /// The raw log, carrying the block, transaction and log index.
    pub log: Log,
}

impl<E: SolEvent> DecodedEvent<E> {
    /// Decodes a log that is known to carry `E`.
    pub fn decode(log: Log) -> Result<Self, ContractError> {
        let event = E::decode_log_data(&log.inner.data)?;
        Ok(Self { event, log })
    }
}

/// Whether the first topic of `log` is the signature hash of `E`.
#[must_use]
pub fn matches<E: SolEvent>(log: &Log) -> bool {
    log.inner.data.topics().first() == Some(&E::SIGNATURE_HASH)
}

/// Decodes every log carrying `E`, skipping unrelated logs.
pub fn decode_logs<E: SolEvent>(logs: &[Log]) -> Result<Vec<DecodedEvent<E>>, ContractError> {
    logs.iter().filter(|log| matches::<E>(log)).cloned().map(DecodedEvent::decode).collect()
}

/// Decodes every `E` emitted in a transaction.
pub fn decode_receipt<E: SolEvent>(
    receipt: &TransactionReceipt,
) -> Result<Vec<DecodedEvent<E>>, ContractError> {
    decode_logs(receipt.inner.logs())
}

/// Decodes every `E` emitted in a transaction by the contract at `address`.
pub fn decode_receipt_from<E: SolEvent>(
    receipt: &TransactionReceipt,
    address: Address,
) -> Result<Vec<DecodedEvent<E>>, ContractError> {
    let logs: Vec<Log> =
        receipt.inner.logs().iter().filter(|log| log.inner.address == address).cloned().collect();
    decode_logs(&logs)
}

/// Builds the filter selecting `E` emitted by `address` from `from_block` on.
///
/// A missing `to_block` selects up to the latest block.
#[must_use]
pub fn event_filter<E: SolEvent>(address: Address, from_block: u64, to_block: Option<u64>) -> Filter {
    let to_block = to_block.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
    Filter::new()
        .address(address)
        .event_signature(E::SIGNATURE_HASH)
        .from_block(from_block)
        .to_block(to_block)
}

/// Fetches every `E` emitted by `address` in the block range.
pub async fn query<P: Provider, E: SolEvent>(
    provider: &P,
    address: Address,
    from_block: u64,
    to_block: Option<u64>,
) -> Result<Vec<DecodedEvent<E>>, ContractError> {
    let filter = event_filter::<E>(address, from_block, to_block);
    let logs = provider.get_logs(&filter).await?;
    debug!(event = E::SIGNATURE, %address, count = logs.len(), "fetched logs");
    decode_logs(&logs)
}

/// Streams every `E` emitted by `address` from `from_block` on.
///
/// Logs already mined in `[from_block, head]` are fetched first, then the stream polls a log
/// filter at the provider's poll interval and never ends on its own.
pub async fn watch<P: Provider, E: SolEvent + Send + 'static>(
    provider: &P,
    address: Address,
    from_block: u64,
) -> Result<EventStream<E>, ContractError> {
    let filter = event_filter::<E>(address, from_block, None);
    let logs = backfilled_logs(provider, filter, from_block).await?;
    debug!(event = E::SIGNATURE, %address, from_block, "watching logs");
    Ok(logs.map(DecodedEvent::<E>::decode).boxed())
}

/// Installs `filter` on the node, then prepends the logs mined before it was installed.
///
/// Node filters only report logs of blocks mined after their creation. Polled logs at or below
/// the backfilled head are dropped so a block mined in between is not reported twice.
async fn backfilled_logs<P: Provider>(
    provider: &P,
    filter: Filter,
    from_block: u64,
) -> Result<BoxStream<'static, Log>, ContractError> {
    let poller = provider.watch_logs(&filter).await?;
    let head = provider.get_block_number().await?;
    let history = if from_block <= head {
        provider.get_logs(&filter.to_block(head)).await?
    } else {
        Vec::new()
    };
    debug!(from_block, head, backfilled = history.len(), "backfilled logs");

    let live = poller
        .into_stream()
        .flat_map(futures::stream::iter)
        .filter(move |log| futures::future::ready(log.block_number.map_or(true, |n| n > head)));
    Ok(futures::stream::iter(history).chain(live).boxed())
}

/// Builds the filter selecting every log emitted by `address` in the block range.
#[must_use]
pub fn address_filter(address: Address, from_block: u64, to_block: Option<u64>) -> Filter {
    let to_block = to_block.map_or(BlockNumberOrTag::Latest, BlockNumberOrTag::Number);
    Filter::new().address(address).from_block(from_block).to_block(to_block)
}

/// Fetches every event of the three contracts emitted by `address` in the block range.
pub async fn query_all<P: Provider>(
    provider: &P,
    address: Address,
    from_block: u64,
    to_block: Option<u64>,
) -> Result<Vec<DecodedEvent<LspEvent>>, ContractError> {
    let logs = provider.get_logs(&address_filter(address, from_block, to_block)).await?;
    debug!(%address, count = logs.len(), "fetched logs");
    let mut events = Vec::new();
    for log in logs {
        if let Some(event) = LspEvent::decode(&log)? {
            events.push(DecodedEvent { event, log });
        }
    }
    Ok(events)
}

/// Streams every event of the three contracts emitted by `address` from `from_block` on.
///
/// Logs already mined are fetched first, as in [`watch`]. Logs that are not one of ours are
/// skipped.
pub async fn watch_all<P: Provider>(
    provider: &P,
    address: Address,
    from_block: u64,
) -> Result<EventStream<LspEvent>, ContractError> {
    let filter = address_filter(address, from_block, None);
    let logs = backfilled_logs(provider, filter, from_block).await?;
    debug!(%address, from_block, "watching logs");

    let stream = logs
        .filter_map(|log| async move {
            match LspEvent::decode(&log) {
                Ok(Some(event)) => Some(Ok(DecodedEvent { event, log })),
                Ok(None) => None,
                Err(e) => Some(Err(e)),
            }
        })
        .boxed();
    Ok(stream)
}

/// Any event emitted by the three contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum LspEvent {
    ContractCreated(ContractCreated),
    DataChanged(DataChanged),
    Executed(Executed),
    OwnershipTransferred(OwnershipTransferred),
    ValueReceived(ValueReceived),
    UniversalReceiver(UniversalReceiver),
}

impl LspEvent {
    /// Decodes a log into the matching event, or `None` if the log is not one of ours.
    pub fn decode(log: &Log) -> Result<Option<Self>, ContractError> {
        let data = &log.inner.data;
        let Some(topic0) = data.topics().first() else {
            return Ok(None);
        };
        let topic0 = *topic0;
        let event = if topic0 == ContractCreated::SIGNATURE_HASH {
            Self::ContractCreated(ContractCreated::decode_log_data(data)?)
        } else if topic0 == DataChanged::SIGNATURE_HASH {
            Self::DataChanged(DataChanged::decode_log_data(data)?)
        } else if topic0 == Executed::SIGNATURE_HASH {
            Self::Executed(Executed::decode_log_data(data)?)
        } else if topic0 == OwnershipTransferred::SIGNATURE_HASH {
            Self::OwnershipTransferred(OwnershipTransferred::decode_log_data(data)?)
        } else if topic0 == ValueReceived::SIGNATURE_HASH {
            Self::ValueReceived(ValueReceived::decode_log_data(data)?)
        } else if topic0 == UniversalReceiver::SIGNATURE_HASH {
            Self::UniversalReceiver(UniversalReceiver::decode_log_data(data)?)
        } else {
            return Ok(None);
        };
        Ok(Some(event))
    }

    /// Decodes every one of our events in the logs, skipping the others.
    pub fn decode_all(logs: &[Log]) -> Result<Vec<Self>, ContractError> {
        let mut events = Vec::new();
        for log in logs {
            if let Some(event) = Self::decode(log)? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// The Solidity name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::ContractCreated(_) => "ContractCreated",
            Self::DataChanged(_) => "DataChanged",
            Self::Executed(_) => "Executed",
            Self::OwnershipTransferred(_) => "OwnershipTransferred",
            Self::ValueReceived(_) => "ValueReceived",
            Self::UniversalReceiver(_) => "UniversalReceiver",
        }
    }
}

impl fmt::Display for LspEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ContractCreated(e) => write!(f, "ContractCreated({})", e.contractAddress),
            Self::DataChanged(e) => write!(f, "DataChanged({}, {})", e.key, e.value),
            Self::Executed(e) => {
                write!(f, "Executed({}, {}, {}, {})", e._operation, e._to, e._value, e._data)
            }
            Self::OwnershipTransferred(e) => {
                write!(f, "OwnershipTransferred({} -> {})", e.previousOwner, e.newOwner)
            }
            Self::ValueReceived(e) => write!(f, "ValueReceived({}, {})", e.sender, e.value),
            Self::UniversalReceiver(e) => write!(
                f,
                "UniversalReceiver({}, {}, {}, {})",
                e.from, e.typeId, e.returnedValue, e.receivedData
            ),
        }
    }
}
