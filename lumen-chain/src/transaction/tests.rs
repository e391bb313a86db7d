use lumen_test::{prelude::*, vectors::ZERO_ACCOUNT_ADDRESS};

use super::*;

#[test]
fn new_transaction_is_empty() {
    lumen_test::init();

    let account = AccountId::from_ed25519_bytes([3; 32]);
    let tx = Transaction::new(account, 100);

    assert_eq!(tx.source_account, account);
    assert_eq!(tx.fee, 100);
    assert_eq!(tx.seq_num, 0);
    assert_eq!(tx.memo, Memo::None);
    assert!(tx.operations.is_empty());
}

#[test]
fn json_shows_addresses() -> Result<()> {
    lumen_test::init();

    let mut tx = Transaction::new(AccountId::from_ed25519_bytes([0; 32]), 100);
    tx.memo = Memo::Text("sep7".to_string());

    let json = serde_json::to_value(&tx)?;
    assert_eq!(json["source_account"], ZERO_ACCOUNT_ADDRESS);
    assert_eq!(json["memo"]["Text"], "sep7");

    let parsed: Transaction = serde_json::from_value(json)?;
    assert_eq!(parsed, tx);

    Ok(())
}
