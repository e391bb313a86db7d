//! Errors that can occur inside any `lumen-chain` submodule.

use thiserror::Error;

/// An error type pertaining to account identifier construction, and address
/// encoding and parsing.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// The payload could not be used as a public key, because it has the wrong length.
    #[error("invalid account payload length: expected {expected} bytes, got {actual}")]
    InvalidPayloadLength {
        /// The only valid payload length.
        expected: usize,
        /// The length of the supplied payload.
        actual: usize,
    },

    /// The address text is not valid base32, or decodes to the wrong number of bytes.
    #[error("malformed address: {0}")]
    MalformedAddress(&'static str),

    /// The checksum in the address does not match the checksum of its contents.
    ///
    /// The address was corrupted in transit, or forged.
    #[error("address checksum mismatch: computed {expected:#06x}, found {actual:#06x}")]
    ChecksumMismatch {
        /// The checksum computed over the decoded version byte and payload.
        expected: u16,
        /// The checksum carried by the address.
        actual: u16,
    },

    /// The address is well-formed, but encodes a different kind of key.
    ///
    /// For example, a secret seed was supplied where an account address was expected.
    #[error("unexpected address version byte: expected {expected:#04x}, found {actual:#04x}")]
    UnexpectedVersionByte {
        /// The version byte of the requested key kind.
        expected: u8,
        /// The version byte found in the address.
        actual: u8,
    },
}
