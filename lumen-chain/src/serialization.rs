//! Consensus-critical binary serialization.
//!
//! This module contains three traits: `XdrSerialize` and `XdrDeserialize`,
//! analogs of the Serde `Serialize` and `Deserialize` traits but intended for
//! the ledger's canonical XDR wire format, and `ReadXdrExt`, an extension trait
//! for `io::Read` with utility functions for reading fixed-size XDR items.
//!
//! XDR integers are big-endian, and every item is padded to a multiple of four
//! bytes. All the items in this crate are already four-byte aligned.

mod error;
mod read_xdr;
mod xdr_deserialize;
mod xdr_serialize;


pub use error::SerializationError;
pub use read_xdr::ReadXdrExt;
pub use xdr_deserialize::{XdrDeserialize, XdrDeserializeInto};
pub use xdr_serialize::XdrSerialize;
