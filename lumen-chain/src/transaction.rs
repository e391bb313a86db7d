//! Transactions and the mutators that build them.
//!
//! Only the fields that mutators need are modelled here. Operations are kept
//! as opaque encoded bodies, and signatures are added by a separate signer.

use serde::{Deserialize, Serialize};

use crate::account::AccountId;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

mod builder;

#[cfg(test)]
mod tests;

pub use builder::{TransactionBuilder, TransactionMutator};

/// An unsigned transaction under construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Transaction {
    /// The account that pays the fee and consumes the sequence number.
    pub source_account: AccountId,

    /// The total fee, in stroops.
    pub fee: u32,

    /// The sequence number of the source account that this transaction consumes.
    pub seq_num: i64,

    /// An optional memo for the recipient.
    pub memo: Memo,

    /// The operations, in execution order.
    pub operations: Vec<Operation>,
}

impl Transaction {
    /// Returns an empty transaction with the given source account and fee.
    pub fn new(source_account: AccountId, fee: u32) -> Self {
        Self {
            source_account,
            fee,
            seq_num: 0,
            memo: Memo::None,
            operations: Vec::new(),
        }
    }
}

/// A transaction memo.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Memo {
    /// No memo.
    #[default]
    None,

    /// A text memo of at most 28 bytes.
    Text(String),

    /// A 64-bit identifier.
    Id(u64),

    /// A hash of some off-ledger content.
    Hash([u8; 32]),

    /// A hash of the transaction being refunded.
    Return([u8; 32]),
}

/// A transaction operation.
///
/// The body is the operation's encoded XDR, which this crate does not interpret.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct Operation {
    /// Overrides the transaction source account for this operation.
    pub source_account: Option<AccountId>,

    /// The encoded operation body.
    pub body: Vec<u8>,
}
