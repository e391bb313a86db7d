//! Randomised property tests for the placeholder source account.

use proptest::prelude::*;

use crate::{
    account::AccountId,
    sentinel::SentinelSourceAccount,
    transaction::{Transaction, TransactionBuilder, TransactionMutator},
    Config,
};

proptest! {
    /// Make sure any sentinel has an address, which parses back to its bytes.
    #[test]
    fn address_round_trip(sentinel in any::<SentinelSourceAccount>()) {
        lumen_test::init();

        let address = sentinel.must_address();
        prop_assert_eq!(sentinel.address(), Ok(address.clone()));

        let account = AccountId::from_address(&address).expect("sentinel address parses");
        prop_assert_eq!(account.key_bytes(), sentinel.as_bytes());
        prop_assert_eq!(Ok(account), sentinel.account_id());
    }

    /// Make sure the mutation replaces the source account, and nothing else.
    #[test]
    fn mutation_only_replaces_source_account(
        sentinel in any::<SentinelSourceAccount>(),
        tx in any::<Transaction>(),
    ) {
        lumen_test::init();

        let mut builder = TransactionBuilder::new(&Config::default());
        builder.tx = tx.clone();

        sentinel.mutate_transaction(&mut builder).expect("sentinels always mutate");

        let mut expected = tx;
        expected.source_account = AccountId::from_ed25519_bytes(*sentinel.as_bytes());
        prop_assert_eq!(builder.tx, expected);
    }

    /// Make sure the last of two mutations decides the source account.
    #[test]
    fn last_write_wins(
        first in any::<SentinelSourceAccount>(),
        second in any::<SentinelSourceAccount>(),
    ) {
        lumen_test::init();

        let mut builder = TransactionBuilder::new(&Config::default());
        builder.mutate(&[&first, &second]).expect("sentinels always mutate");

        prop_assert_eq!(builder.tx.source_account, second.account_id().expect("valid length"));
    }
}
