//! Fixed test vectors for account identifiers.

use lumen_test::{
    prelude::*,
    vectors::{ACCOUNT_ID_VECTORS, ZERO_ACCOUNT_ADDRESS, ZERO_SEED},
};

use crate::{
    account::{AccountId, PublicKeyType, ED25519_PUBLIC_KEY_LEN},
    error::AddressError,
    serialization::{SerializationError, XdrDeserializeInto, XdrSerialize},
};

#[test]
fn account_id_vectors_display_and_parse() -> Result<()> {
    lumen_test::init();

    for (payload_hex, address) in ACCOUNT_ID_VECTORS {
        let payload = hex::decode(payload_hex)?;

        let account = AccountId::try_from_payload(PublicKeyType::Ed25519, &payload)?;
        assert_eq!(account.key_type(), PublicKeyType::Ed25519);
        assert_eq!(&account.key_bytes()[..], &payload[..]);

        assert_eq!(&account.address(), address);
        assert_eq!(&format!("{account}"), address);

        let parsed: AccountId = address.parse()?;
        assert_eq!(parsed, account);
    }

    Ok(())
}

#[test]
fn payload_length_is_checked() {
    lumen_test::init();

    for len in [0, 1, ED25519_PUBLIC_KEY_LEN - 1, ED25519_PUBLIC_KEY_LEN + 1, 64] {
        let payload = vec![0; len];

        assert_eq!(
            AccountId::try_from_payload(PublicKeyType::Ed25519, &payload),
            Err(AddressError::InvalidPayloadLength {
                expected: ED25519_PUBLIC_KEY_LEN,
                actual: len,
            })
        );
    }
}

#[test]
fn seed_is_not_an_account_address() {
    lumen_test::init();

    let result = ZERO_SEED.parse::<AccountId>();

    assert!(
        matches!(result, Err(AddressError::UnexpectedVersionByte { .. })),
        "unexpected result: {result:?}"
    );
}

#[test]
fn debug() {
    lumen_test::init();

    let account = AccountId::from_ed25519_bytes([0xab; 32]);

    assert_eq!(
        format!("{account:?}"),
        format!("Ed25519PublicKey(\"{}\")", "ab".repeat(32))
    );
}

#[test]
fn xdr_layout() -> Result<()> {
    lumen_test::init();

    let account = AccountId::from([7; 32]);
    let bytes = account.xdr_serialize_to_vec()?;

    assert_eq!(bytes.len(), 4 + ED25519_PUBLIC_KEY_LEN);
    assert_eq!(bytes[..4], [0, 0, 0, 0]);
    assert_eq!(bytes[4..], [7; 32]);

    let parsed: AccountId = bytes.as_slice().xdr_deserialize_into()?;
    assert_eq!(parsed, account);

    Ok(())
}

#[test]
fn xdr_rejects_unknown_key_type() {
    lumen_test::init();

    let mut bytes = vec![0, 0, 0, 1];
    bytes.extend_from_slice(&[0; 32]);

    let result = bytes.as_slice().xdr_deserialize_into::<AccountId>();
    assert!(
        matches!(result, Err(SerializationError::Parse(_))),
        "unexpected result: {result:?}"
    );
}

#[test]
fn xdr_rejects_truncated_key() {
    lumen_test::init();

    let bytes = [0u8; 4 + ED25519_PUBLIC_KEY_LEN - 1];

    let result = bytes.as_slice().xdr_deserialize_into::<AccountId>();
    assert!(
        matches!(result, Err(SerializationError::Io(_))),
        "unexpected result: {result:?}"
    );
}

#[test]
fn serde_uses_address_string() -> Result<()> {
    lumen_test::init();

    let account = AccountId::from([0; 32]);

    let json = serde_json::to_string(&account)?;
    assert_eq!(json, format!("\"{ZERO_ACCOUNT_ADDRESS}\""));

    let parsed: AccountId = serde_json::from_str(&json)?;
    assert_eq!(parsed, account);

    assert!(serde_json::from_str::<AccountId>("\"GAAAA\"").is_err());

    Ok(())
}
