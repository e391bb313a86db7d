//! Randomised property tests for account identifiers.

use proptest::prelude::*;

use crate::{
    account::{AccountId, PublicKeyType},
    serialization::{XdrDeserializeInto, XdrSerialize},
};

proptest! {
    /// Make sure every payload survives the trip to an address and back.
    #[test]
    fn address_round_trip(payload in any::<[u8; 32]>()) {
        lumen_test::init();

        let account = AccountId::try_from_payload(PublicKeyType::Ed25519, &payload)
            .expect("32 byte payloads are valid");

        let parsed = AccountId::from_address(&account.address());
        prop_assert_eq!(parsed, Ok(account));
    }

    /// Make sure every account survives XDR serialization.
    #[test]
    fn xdr_round_trip(account in any::<AccountId>()) {
        lumen_test::init();

        let bytes = account.xdr_serialize_to_vec().expect("account should serialize");
        let parsed: AccountId = bytes.as_slice().xdr_deserialize_into().expect("account should deserialize");

        prop_assert_eq![account, parsed];
    }
}
