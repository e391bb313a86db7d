//! Account identifiers.
//!
//! An account is identified by a public key. The wire format is a tagged
//! union, so that other key types can be added later, but the ledger only
//! defines Ed25519 account keys.

use std::{fmt, io};

use byteorder::{BigEndian, WriteBytesExt};

use crate::{
    error::AddressError,
    serialization::{ReadXdrExt, SerializationError, XdrDeserialize, XdrSerialize},
    strkey::{self, VersionByte},
};

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;


/// The length of an Ed25519 public key, in bytes.
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

/// The type tag of an account's public key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum PublicKeyType {
    /// `PUBLIC_KEY_TYPE_ED25519`
    Ed25519,
}

impl PublicKeyType {
    /// Returns the XDR discriminant for this key type.
    pub const fn discriminant(self) -> i32 {
        match self {
            PublicKeyType::Ed25519 => 0,
        }
    }

    /// Returns the key type for an XDR discriminant, if it is known.
    pub const fn from_discriminant(discriminant: i32) -> Option<Self> {
        match discriminant {
            0 => Some(PublicKeyType::Ed25519),
            _ => None,
        }
    }

    /// Returns the StrKey version byte used for account addresses of this key type.
    pub const fn address_version(self) -> VersionByte {
        match self {
            PublicKeyType::Ed25519 => VersionByte::AccountId,
        }
    }

    /// Returns the length of public keys of this type.
    pub const fn key_len(self) -> usize {
        match self {
            PublicKeyType::Ed25519 => ED25519_PUBLIC_KEY_LEN,
        }
    }
}

/// An account identifier: a public key tagged with its key type.
///
/// The key bytes are not checked: an `AccountId` can hold bytes that are not
/// a valid curve point. Those accounts can never sign, but they can still be
/// encoded, displayed, and placed in a transaction.
///
/// `AccountId`s serialize to Serde formats as their StrKey address.
#[derive(
    Copy, Clone, Eq, PartialEq, Hash, serde_with::SerializeDisplay, serde_with::DeserializeFromStr,
)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum AccountId {
    /// An Ed25519 public key.
    Ed25519PublicKey([u8; ED25519_PUBLIC_KEY_LEN]),
}

impl AccountId {
    /// Creates an Ed25519 account id from raw key bytes.
    pub fn from_ed25519_bytes(key: [u8; ED25519_PUBLIC_KEY_LEN]) -> Self {
        AccountId::Ed25519PublicKey(key)
    }

    /// Tags `payload` as a public key of type `key_type`.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::InvalidPayloadLength`] if `payload` is not
    /// exactly the key length of `key_type`.
    pub fn try_from_payload(key_type: PublicKeyType, payload: &[u8]) -> Result<Self, AddressError> {
        match key_type {
            PublicKeyType::Ed25519 => {
                let key = <[u8; ED25519_PUBLIC_KEY_LEN]>::try_from(payload).map_err(|_| {
                    AddressError::InvalidPayloadLength {
                        expected: key_type.key_len(),
                        actual: payload.len(),
                    }
                })?;

                Ok(AccountId::Ed25519PublicKey(key))
            }
        }
    }

    /// Parses a StrKey account address.
    ///
    /// Only Ed25519 account addresses (`G...`) are accepted.
    pub fn from_address(address: &str) -> Result<Self, AddressError> {
        strkey::decode(VersionByte::AccountId, address).map(AccountId::Ed25519PublicKey)
    }

    /// Returns the StrKey address for this account.
    pub fn address(&self) -> String {
        strkey::encode(self.key_type().address_version(), self.key_bytes())
    }

    /// Returns the type of this account's public key.
    pub fn key_type(&self) -> PublicKeyType {
        match self {
            AccountId::Ed25519PublicKey(_) => PublicKeyType::Ed25519,
        }
    }

    /// Returns the raw public key bytes.
    pub fn key_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_LEN] {
        match self {
            AccountId::Ed25519PublicKey(key) => key,
        }
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountId::Ed25519PublicKey(key) => f
                .debug_tuple("Ed25519PublicKey")
                .field(&hex::encode(key))
                .finish(),
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.address())
    }
}

impl std::str::FromStr for AccountId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountId::from_address(s)
    }
}

impl From<[u8; ED25519_PUBLIC_KEY_LEN]> for AccountId {
    fn from(key: [u8; ED25519_PUBLIC_KEY_LEN]) -> Self {
        AccountId::from_ed25519_bytes(key)
    }
}

impl XdrSerialize for AccountId {
    fn xdr_serialize<W: io::Write>(&self, mut writer: W) -> Result<(), io::Error> {
        writer.write_i32::<BigEndian>(self.key_type().discriminant())?;
        writer.write_all(self.key_bytes())?;

        Ok(())
    }
}

impl XdrDeserialize for AccountId {
    fn xdr_deserialize<R: io::Read>(mut reader: R) -> Result<Self, SerializationError> {
        let discriminant = reader.read_discriminant()?;

        match PublicKeyType::from_discriminant(discriminant) {
            Some(PublicKeyType::Ed25519) => {
                Ok(AccountId::Ed25519PublicKey(reader.read_32_bytes()?))
            }
            None => Err(SerializationError::Parse("unknown public key type")),
        }
    }
}
