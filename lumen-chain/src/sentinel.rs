//! Placeholder source accounts.
//!
//! Some workflows build a transaction before the account that will sign it is
//! known: a wallet request is prepared by one party, then completed by a
//! separate signer, which replaces the source account with its own. The
//! transaction still needs a syntactically valid source account in the
//! meantime, so [`SentinelSourceAccount`] supplies one, without checking that
//! its bytes are a real public key.

use std::fmt;

use crate::{
    account::{AccountId, PublicKeyType, ED25519_PUBLIC_KEY_LEN},
    error::AddressError,
    transaction::{TransactionBuilder, TransactionMutator},
    BoxError,
};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;

#[cfg(test)]
mod tests;

/// A source account that is not necessarily valid, but can still be placed in
/// a transaction.
///
/// The bytes are private, so a sentinel can only be created by
/// [`SentinelSourceAccount::blank`] or from exactly 32 bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub struct SentinelSourceAccount {
    sentinel: [u8; ED25519_PUBLIC_KEY_LEN],
}

impl SentinelSourceAccount {
    /// Returns the blank sentinel: 32 zero bytes.
    pub fn blank() -> Self {
        Self {
            sentinel: [0; ED25519_PUBLIC_KEY_LEN],
        }
    }

    /// Returns a sentinel holding `bytes`.
    ///
    /// The bytes are not checked, they do not need to be a valid Ed25519 key.
    pub fn from_bytes(bytes: [u8; ED25519_PUBLIC_KEY_LEN]) -> Self {
        Self { sentinel: bytes }
    }

    /// Returns the sentinel's raw bytes.
    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_LEN] {
        &self.sentinel
    }

    /// Returns the sentinel as an Ed25519 account id.
    pub fn account_id(&self) -> Result<AccountId, AddressError> {
        AccountId::try_from_payload(PublicKeyType::Ed25519, &self.sentinel)
    }

    /// Returns the StrKey address of the sentinel.
    pub fn address(&self) -> Result<String, AddressError> {
        Ok(self.account_id()?.address())
    }

    /// Returns the StrKey address of the sentinel.
    ///
    /// Use this method where the sentinel is known to encode, such as the
    /// [`blank`](Self::blank) sentinel. Use [`address`](Self::address)
    /// everywhere else.
    ///
    /// # Panics
    ///
    /// If the address can not be encoded.
    pub fn must_address(&self) -> String {
        match self.address() {
            Ok(address) => address,
            Err(error) => {
                tracing::error!(?error, sentinel = ?self, "sentinel source account has no address");
                panic!("sentinel source account must have an address: {error}");
            }
        }
    }
}

impl fmt::Debug for SentinelSourceAccount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("SentinelSourceAccount")
            .field(&hex::encode(self.sentinel))
            .finish()
    }
}

impl From<[u8; ED25519_PUBLIC_KEY_LEN]> for SentinelSourceAccount {
    fn from(bytes: [u8; ED25519_PUBLIC_KEY_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for SentinelSourceAccount {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let sentinel = <[u8; ED25519_PUBLIC_KEY_LEN]>::try_from(bytes).map_err(|_| {
            AddressError::InvalidPayloadLength {
                expected: ED25519_PUBLIC_KEY_LEN,
                actual: bytes.len(),
            }
        })?;

        Ok(Self { sentinel })
    }
}

impl TransactionMutator for SentinelSourceAccount {
    /// Replaces the transaction's source account with this sentinel, without
    /// checking that the sentinel is a valid key.
    ///
    /// No other transaction fields are changed.
    fn mutate_transaction(&self, builder: &mut TransactionBuilder) -> Result<(), BoxError> {
        let source_account = self.account_id()?;

        tracing::debug!(
            previous = %builder.tx.source_account,
            %source_account,
            "replacing source account with sentinel"
        );
        builder.tx.source_account = source_account;

        Ok(())
    }
}
