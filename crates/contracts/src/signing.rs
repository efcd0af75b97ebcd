//! Signing.
//!
//! Offline counterparts of ERC725Account's `isValidSignature` for accounts owned by an EOA.

use alloy_primitives::{eip191_hash_message, uint, Address, FixedBytes, Signature, B256, U256};

use crate::{
    constants::{ERC1271_FAIL_VALUE, ERC1271_MAGIC_VALUE},
    errors::SignatureError,
};

/// Half of the secp256k1 curve order. Signatures with a larger `s` are malleable and rejected.
pub const SECP256K1N_HALF: U256 =
    uint!(0x7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0_U256);

/// Parses a 65 byte `r ++ s ++ v` signature, applying the same checks as the account.
///
/// The account reverts on any of these errors instead of returning the fail value.
pub fn parse_signature(signature: &[u8]) -> Result<Signature, SignatureError> {
    if signature.len() != 65 {
        return Err(SignatureError::InvalidLength { len: signature.len() });
    }
    if U256::from_be_slice(&signature[32..64]) > SECP256K1N_HALF {
        return Err(SignatureError::InvalidS);
    }
    let v = signature[64];
    if v != 27 && v != 28 {
        return Err(SignatureError::InvalidV { v });
    }
    Signature::from_raw(signature).map_err(|e| SignatureError::Recovery { error: e.to_string() })
}

/// Recovers the signer of a raw 32 byte hash. No message prefix is applied.
pub fn recover_signer(hash: B256, signature: &[u8]) -> Result<Address, SignatureError> {
    let signature = parse_signature(signature)?;
    signature
        .recover_address_from_prehash(&hash)
        .map_err(|e| SignatureError::Recovery { error: e.to_string() })
}

/// Computes what `isValidSignature(hash, signature)` returns for an account owned by `owner`.
pub fn verify_owner_signature(
    owner: Address,
    hash: B256,
    signature: &[u8],
) -> Result<FixedBytes<4>, SignatureError> {
    let signer = recover_signer(hash, signature)?;
    Ok(if signer == owner { ERC1271_MAGIC_VALUE } else { ERC1271_FAIL_VALUE })
}

/// Whether an `isValidSignature` return value is the ERC1271 magic value.
#[must_use]
pub fn is_magic_value(value: FixedBytes<4>) -> bool {
    value == ERC1271_MAGIC_VALUE
}

/// The EIP-191 `personal_sign` hash of a message, the usual input of `isValidSignature`.
#[must_use]
pub fn eth_message_hash(message: &[u8]) -> B256 {
    eip191_hash_message(message)
}

#[cfg(test)]
mod tests {
    use alloy::signers::{local::PrivateKeySigner, SignerSync};
    use alloy_primitives::keccak256;

    use super::*;

    fn signer(key: &str) -> PrivateKeySigner {
        PrivateKeySigner::from_bytes(&keccak256(key)).unwrap()
    }

    #[test]
    fn test_owner_signature_is_magic_value() {
        let owner = signer("owner");
        let hash = eth_message_hash(b"hello universal profile");
        let signature = owner.sign_hash_sync(&hash).unwrap();

        let result = verify_owner_signature(owner.address(), hash, &signature.as_bytes()).unwrap();
        assert_eq!(result, ERC1271_MAGIC_VALUE);
        assert!(is_magic_value(result));
    }

    #[test]
    fn test_other_signer_is_fail_value() {
        let owner = signer("owner");
        let stranger = signer("stranger");
        let hash = keccak256("payload");
        let signature = stranger.sign_hash_sync(&hash).unwrap();

        let result = verify_owner_signature(owner.address(), hash, &signature.as_bytes()).unwrap();
        assert_eq!(result, ERC1271_FAIL_VALUE);
        assert!(!is_magic_value(result));
    }

    #[test]
    fn test_recover_signer_uses_raw_hash() {
        let owner = signer("owner");
        let hash = keccak256("raw");
        let signature = owner.sign_hash_sync(&hash).unwrap();
        assert_eq!(recover_signer(hash, &signature.as_bytes()).unwrap(), owner.address());

        // The same signature over the prefixed hash recovers someone else.
        let prefixed = eth_message_hash(hash.as_slice());
        assert_ne!(recover_signer(prefixed, &signature.as_bytes()).unwrap(), owner.address());
    }

    #[test]
    fn test_malformed_signatures_are_rejected() {
        let owner = signer("owner");
        let hash = keccak256("malformed");
        let signature = owner.sign_hash_sync(&hash).unwrap().as_bytes();

        assert_eq!(
            parse_signature(&signature[..64]).unwrap_err(),
            SignatureError::InvalidLength { len: 64 }
        );

        let mut high_s = signature;
        high_s[32..64].copy_from_slice(&[0xff; 32]);
        assert_eq!(parse_signature(&high_s).unwrap_err(), SignatureError::InvalidS);

        let mut bad_v = signature;
        bad_v[64] = 1;
        assert_eq!(parse_signature(&bad_v).unwrap_err(), SignatureError::InvalidV { v: 1 });
    }
}
