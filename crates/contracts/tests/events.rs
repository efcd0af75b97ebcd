mod common;

use std::time::Duration;

use alloy::{rpc::types::Log, transports::mock::Asserter};
use alloy_primitives::{address, bytes, Address, U256, U64};
use alloy_sol_types::SolEvent;
use futures::StreamExt;
use lsp_contracts::{
    constants::TYPE_ID_ERC777_TOKENS_RECIPIENT,
    events, keys,
    sol::{DataChanged, Executed, OwnershipTransferred, UniversalReceiver},
    Erc725Client, LspEvent, UniversalReceiverClient,
};

use crate::common::*;

#[tokio::test]
async fn test_data_changed_logs() {
    let asserter = Asserter::new();
    let changed = DataChanged { key: keys::LSP3_PROFILE, value: bytes!("0a0b") };
    asserter.push_success(&vec![rpc_log(CONTRACT, changed.encode_log_data(), 12)]);

    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));
    let logs = client.logs::<DataChanged>(10, Some(20)).await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].event, changed);
    assert_eq!(logs[0].log.block_number, Some(12));
    assert_eq!(logs[0].log.inner.address, CONTRACT);
}

#[tokio::test]
async fn test_logs_are_empty_without_matches() {
    let asserter = Asserter::new();
    asserter.push_success(&Vec::<alloy::rpc::types::Log>::new());

    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));
    assert!(client.logs::<OwnershipTransferred>(0, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_universal_receiver_logs() {
    let asserter = Asserter::new();
    let notified = UniversalReceiver {
        from: address!("00000000000000000000000000000000000000bb"),
        typeId: TYPE_ID_ERC777_TOKENS_RECIPIENT,
        returnedValue: TYPE_ID_ERC777_TOKENS_RECIPIENT,
        receivedData: bytes!("1234"),
    };
    asserter.push_success(&vec![
        rpc_log(CONTRACT, notified.encode_log_data(), 3),
        rpc_log(CONTRACT, notified.encode_log_data(), 4),
    ]);

    let client = UniversalReceiverClient::load(CONTRACT, mocked_provider(&asserter));
    let logs = client.logs::<UniversalReceiver>(0, None).await.unwrap();

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].event.returnedValue, logs[0].event.typeId);
    assert_eq!(logs[1].log.block_number, Some(4));
}

#[test]
fn test_lsp_event_from_mixed_logs() {
    let executed = Executed {
        _operation: U256::ZERO,
        _to: address!("00000000000000000000000000000000000000cc"),
        _value: U256::from(5),
        _data: bytes!(""),
    };
    let renounced = OwnershipTransferred {
        previousOwner: address!("00000000000000000000000000000000000000dd"),
        newOwner: Address::ZERO,
    };
    let logs = vec![
        rpc_log(CONTRACT, executed.encode_log_data(), 1),
        rpc_log(CONTRACT, renounced.encode_log_data(), 1),
    ];

    let events = LspEvent::decode_all(&logs).unwrap();
    assert_eq!(
        events,
        vec![LspEvent::Executed(executed), LspEvent::OwnershipTransferred(renounced)]
    );
    assert_eq!(events[1].name(), "OwnershipTransferred");
}

#[tokio::test]
async fn test_query_all_skips_foreign_logs() {
    let asserter = Asserter::new();
    let changed = DataChanged { key: keys::LSP3_PROFILE, value: bytes!("01") };
    let foreign = alloy_primitives::LogData::new_unchecked(
        vec![alloy_primitives::keccak256("Transfer(address,address,uint256)")],
        bytes!(""),
    );
    asserter.push_success(&vec![
        rpc_log(CONTRACT, foreign, 7),
        rpc_log(CONTRACT, changed.encode_log_data(), 8),
    ]);

    let provider = mocked_provider(&asserter);
    let events = events::query_all(&provider, CONTRACT, 0, None).await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, LspEvent::DataChanged(changed));
    assert_eq!(events[0].log.block_number, Some(8));
}

/// Queues the responses for installing a log filter when the chain head is at block 16.
fn push_watch(asserter: &Asserter, history: Vec<Log>, polled: Vec<Log>) {
    // eth_newFilter, eth_blockNumber, eth_getLogs, then eth_getFilterChanges.
    asserter.push_success(&U256::from(1));
    asserter.push_success(&U64::from(16));
    asserter.push_success(&history);
    asserter.push_success(&polled);
}

#[tokio::test]
async fn test_watch_replays_mined_logs_first() {
    let asserter = Asserter::new();
    let changed = |value: u8| DataChanged { key: keys::LSP3_PROFILE, value: vec![value].into() };
    push_watch(
        &asserter,
        vec![
            rpc_log(CONTRACT, changed(1).encode_log_data(), 10),
            rpc_log(CONTRACT, changed(2).encode_log_data(), 16),
        ],
        vec![
            // Mined at the backfilled head, already reported.
            rpc_log(CONTRACT, changed(2).encode_log_data(), 16),
            rpc_log(CONTRACT, changed(3).encode_log_data(), 17),
        ],
    );

    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));
    let stream = client.watch::<DataChanged>(10).await.unwrap();
    let events = tokio::time::timeout(Duration::from_secs(30), stream.take(3).collect::<Vec<_>>())
        .await
        .unwrap();

    let values: Vec<_> = events.into_iter().map(|e| e.unwrap().event.value).collect();
    assert_eq!(values, vec![bytes!("01"), bytes!("02"), bytes!("03")]);
}

#[tokio::test]
async fn test_watch_all_from_future_block_skips_history() {
    let asserter = Asserter::new();
    let executed = Executed {
        _operation: U256::ZERO,
        _to: address!("00000000000000000000000000000000000000cc"),
        _value: U256::from(5),
        _data: bytes!(""),
    };
    // The head (16) is below the first block, so no eth_getLogs is sent.
    asserter.push_success(&U256::from(1));
    asserter.push_success(&U64::from(16));
    asserter.push_success(&vec![rpc_log(CONTRACT, executed.encode_log_data(), 20)]);

    let provider = mocked_provider(&asserter);
    let stream = events::watch_all(&provider, CONTRACT, 20).await.unwrap();
    let events = tokio::time::timeout(Duration::from_secs(30), stream.take(1).collect::<Vec<_>>())
        .await
        .unwrap();

    let event = events.into_iter().next().unwrap().unwrap();
    assert_eq!(event.event, LspEvent::Executed(executed));
    assert_eq!(event.log.block_number, Some(20));
}
