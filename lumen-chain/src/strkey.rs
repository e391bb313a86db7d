//! StrKey text encoding for keys and account identifiers.
//!
//! A StrKey is the base32 encoding of a version byte, a 32 byte payload, and
//! a 2 byte checksum:
//!
//! ```text
//! base32( version_byte || payload || crc16_xmodem(version_byte || payload).to_le_bytes() )
//! ```
//!
//! The base32 alphabet is the upper case RFC 4648 alphabet, without padding.
//! A 35 byte body always encodes to exactly 56 characters, and the version
//! byte fixes the first character (`G` for account ids, `S` for seeds).

use crc::{Crc, CRC_16_XMODEM};
use data_encoding::BASE32_NOPAD;

use crate::error::AddressError;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;


/// The CRC-16/XMODEM algorithm: polynomial `0x1021`, zero initial value,
/// no reflection and no final XOR.
const CRC16_XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// The length of every StrKey payload in this crate.
pub const PAYLOAD_LEN: usize = 32;

/// The length of the checksum trailer.
pub const CHECKSUM_LEN: usize = 2;

/// The length of a decoded StrKey: version byte, payload and checksum.
pub const DECODED_LEN: usize = 1 + PAYLOAD_LEN + CHECKSUM_LEN;

/// The length of an encoded StrKey, in base32 characters.
pub const ENCODED_LEN: usize = 56;

/// The kind of key encoded in a StrKey.
///
/// The version byte is the kind's 5-bit base32 value shifted left by 3, so
/// that it becomes the first character of the encoding.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum VersionByte {
    /// An Ed25519 public key used as an account id (`G...`).
    AccountId,

    /// An Ed25519 secret seed (`S...`).
    Seed,

    /// A pre-authorized transaction hash signer (`T...`).
    PreAuthTx,

    /// A SHA-256 hash signer (`X...`).
    Sha256Hash,
}

impl VersionByte {
    /// Returns the raw version byte.
    pub const fn as_u8(self) -> u8 {
        match self {
            VersionByte::AccountId => 6 << 3,
            VersionByte::Seed => 18 << 3,
            VersionByte::PreAuthTx => 19 << 3,
            VersionByte::Sha256Hash => 23 << 3,
        }
    }
}

impl From<VersionByte> for u8 {
    fn from(version: VersionByte) -> u8 {
        version.as_u8()
    }
}

/// Returns the CRC-16/XMODEM checksum of `bytes`.
///
/// StrKeys store this checksum little-endian.
pub fn checksum(bytes: &[u8]) -> u16 {
    CRC16_XMODEM.checksum(bytes)
}

/// Encodes `payload` as a StrKey of the given `version`.
///
/// Encoding is total: any 32 byte payload can be encoded, whether or not it
/// is a valid key.
pub fn encode(version: VersionByte, payload: &[u8; PAYLOAD_LEN]) -> String {
    let mut raw = Vec::with_capacity(DECODED_LEN);
    raw.push(version.as_u8());
    raw.extend_from_slice(payload);

    let crc = checksum(&raw);
    raw.extend_from_slice(&crc.to_le_bytes());

    BASE32_NOPAD.encode(&raw)
}

/// Decodes a StrKey of the `expected` version, and returns its payload.
///
/// The checksum is verified before the version byte, so any corruption of the
/// checksummed bytes is reported as [`AddressError::ChecksumMismatch`], even
/// if it also changed the version byte.
///
/// # Errors
///
/// - [`AddressError::MalformedAddress`] if `text` is not canonical upper case
///   base32, or does not decode to [`DECODED_LEN`] bytes.
/// - [`AddressError::ChecksumMismatch`] if the trailing checksum is wrong.
/// - [`AddressError::UnexpectedVersionByte`] if the key is of another kind.
pub fn decode(expected: VersionByte, text: &str) -> Result<[u8; PAYLOAD_LEN], AddressError> {
    let raw = BASE32_NOPAD
        .decode(text.as_bytes())
        .map_err(|_| AddressError::MalformedAddress("invalid base32 encoding"))?;

    if raw.len() != DECODED_LEN {
        return Err(AddressError::MalformedAddress("unexpected decoded length"));
    }

    let (body, trailer) = raw.split_at(DECODED_LEN - CHECKSUM_LEN);

    let actual_crc = u16::from_le_bytes([trailer[0], trailer[1]]);
    let expected_crc = checksum(body);
    if actual_crc != expected_crc {
        return Err(AddressError::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    let (&version, payload) = body
        .split_first()
        .ok_or(AddressError::MalformedAddress("missing version byte"))?;

    if version != expected.as_u8() {
        return Err(AddressError::UnexpectedVersionByte {
            expected: expected.as_u8(),
            actual: version,
        });
    }

    let mut bytes = [0; PAYLOAD_LEN];
    bytes.copy_from_slice(payload);

    Ok(bytes)
}
