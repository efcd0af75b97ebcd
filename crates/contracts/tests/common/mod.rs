#![allow(dead_code)]

use alloy::{
    providers::{Provider, ProviderBuilder},
    rpc::types::Log,
    signers::local::PrivateKeySigner,
    transports::mock::Asserter,
};
use alloy_primitives::{address, keccak256, Address, Bloom, LogData, B256};
use serde_json::json;

/// The address every test client is bound to.
pub const CONTRACT: Address = address!("c0ffee254729296a45a3885639ac7e10f9d54979");

/// Creates a signer from a string key.
///
/// The key is hashed using keccak256 to generate the private key.
#[must_use]
pub fn signer(key: &str) -> PrivateKeySigner {
    PrivateKeySigner::from_bytes(&keccak256(key)).unwrap()
}

/// A provider answering requests from `asserter` in the order the responses were pushed.
pub fn mocked_provider(asserter: &Asserter) -> impl Provider + Clone {
    ProviderBuilder::new().disable_recommended_fillers().connect_mocked_client(asserter.clone())
}

/// An RPC log emitted by `address` in block `block_number`.
#[must_use]
pub fn rpc_log(address: Address, data: LogData, block_number: u64) -> Log {
    Log {
        inner: alloy_primitives::Log { address, data },
        block_number: Some(block_number),
        log_index: Some(0),
        ..Default::default()
    }
}

/// A mined transaction receipt as returned by `eth_getTransactionReceipt`.
#[must_use]
pub fn receipt_json(
    tx_hash: B256,
    success: bool,
    contract_address: Option<Address>,
    logs: Vec<Log>,
) -> serde_json::Value {
    json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0x5208",
        "logs": logs,
        "logsBloom": Bloom::ZERO,
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0xbb),
        "blockNumber": "0x10",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "from": address!("00000000000000000000000000000000000000aa"),
        "to": if contract_address.is_some() { None } else { Some(CONTRACT) },
        "contractAddress": contract_address,
    })
}

/// Queues the responses for one transaction: its hash, then its receipt.
pub fn push_transaction(asserter: &Asserter, receipt: &serde_json::Value) {
    asserter.push_success(&receipt["transactionHash"]);
    asserter.push_success(receipt);
}
