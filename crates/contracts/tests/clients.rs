mod common;

use alloy::{signers::SignerSync, transports::mock::Asserter};
use alloy_primitives::{address, bytes, keccak256, Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use lsp_contracts::{
    constants::{
        ERC1271_FAIL_VALUE, ERC1271_MAGIC_VALUE, INTERFACE_ID_ERC1271, INTERFACE_ID_ERC725Y,
        TYPE_ID_ERC777_TOKENS_SENDER,
    },
    keys,
    signing,
    sol::ERC725,
    ContractError, Erc725AccountClient, Erc725Client, Operation, UniversalReceiverClient,
};

use crate::common::*;

#[tokio::test]
async fn test_owner() {
    let asserter = Asserter::new();
    let owner = address!("00000000000000000000000000000000000000aa");
    asserter.push_success(&Bytes::from(owner.abi_encode()));

    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));
    assert_eq!(client.owner().await.unwrap(), owner);
}

#[tokio::test]
async fn test_get_data() {
    let asserter = Asserter::new();
    let value = bytes!("697066733a2f2f516d");
    asserter.push_success(&Bytes::from((value.clone(),).abi_encode_params()));
    asserter.push_success(&Bytes::from((Bytes::new(),).abi_encode_params()));

    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));
    assert_eq!(client.get_data(keys::LSP3_PROFILE).await.unwrap(), value);

    // Unset keys read as empty bytes.
    let unset = keys::singleton_key("Unset");
    assert!(client.get_data(unset).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_data_propagates_rpc_errors() {
    let asserter = Asserter::new();
    asserter.push_failure_msg("execution reverted");

    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));
    let err = client.get_data(keys::LSP3_PROFILE).await.unwrap_err();
    assert!(matches!(err, ContractError::Contract(_)));
}

#[tokio::test]
async fn test_supports_interface() {
    let asserter = Asserter::new();
    asserter.push_success(&Bytes::from(true.abi_encode()));
    asserter.push_success(&Bytes::from(false.abi_encode()));

    let client = Erc725AccountClient::load(CONTRACT, mocked_provider(&asserter));
    assert!(client.supports_interface(INTERFACE_ID_ERC1271).await.unwrap());
    assert!(!client.supports_interface(INTERFACE_ID_ERC725Y).await.unwrap());
}

#[tokio::test]
async fn test_is_valid_signature() {
    let asserter = Asserter::new();
    asserter.push_success(&Bytes::from(ERC1271_MAGIC_VALUE.abi_encode()));
    asserter.push_success(&Bytes::from(ERC1271_FAIL_VALUE.abi_encode()));

    let owner = signer("owner");
    let hash = keccak256("message");
    let signature = Bytes::from(owner.sign_hash_sync(&hash).unwrap().as_bytes());

    let client = Erc725AccountClient::load(CONTRACT, mocked_provider(&asserter));
    assert_eq!(
        client.is_valid_signature(hash, signature.clone()).await.unwrap(),
        ERC1271_MAGIC_VALUE
    );
    assert!(!client.check_signature(hash, signature.clone()).await.unwrap());

    // The offline check agrees with what the owner's account returns.
    assert_eq!(
        signing::verify_owner_signature(owner.address(), hash, &signature).unwrap(),
        ERC1271_MAGIC_VALUE
    );
}

#[tokio::test]
async fn test_delegate_call_is_rejected_before_sending() {
    // Nothing is pushed, so any request would fail the test with a transport error.
    let asserter = Asserter::new();
    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));

    let err = client
        .execute(Operation::DelegateCall, Address::ZERO, U256::ZERO, Bytes::new())
        .await
        .unwrap_err();
    assert!(matches!(err, ContractError::UnsupportedOperation { operation } if operation == U256::from(1)));
}

#[tokio::test]
async fn test_unknown_type_id_is_rejected_before_sending() {
    let asserter = Asserter::new();
    let client = UniversalReceiverClient::load(CONTRACT, mocked_provider(&asserter));

    let type_id = keccak256("LSP7Tokens");
    let err = client.simulate_universal_receiver(type_id, Bytes::new()).await.unwrap_err();
    assert!(matches!(err, ContractError::UnsupportedTypeId { .. }));
}

#[tokio::test]
async fn test_simulate_universal_receiver_returns_type_id() {
    let asserter = Asserter::new();
    asserter.push_success(&Bytes::from(TYPE_ID_ERC777_TOKENS_SENDER.abi_encode()));

    let client = UniversalReceiverClient::load(CONTRACT, mocked_provider(&asserter));
    let returned = client
        .simulate_universal_receiver(TYPE_ID_ERC777_TOKENS_SENDER, bytes!("cafe"))
        .await
        .unwrap();
    assert_eq!(returned, TYPE_ID_ERC777_TOKENS_SENDER);
}

#[test]
fn test_set_data_calldata() {
    let asserter = Asserter::new();
    let client = Erc725Client::load(CONTRACT, mocked_provider(&asserter));

    let call = client.instance().setData(keys::LSP3_PROFILE, bytes!("0102"));
    let decoded = ERC725::setDataCall::abi_decode(call.calldata()).unwrap();
    assert_eq!(decoded._key, keys::LSP3_PROFILE);
    assert_eq!(decoded._value, bytes!("0102"));
}
