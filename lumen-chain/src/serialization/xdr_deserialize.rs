use std::io;

use super::SerializationError;

/// Canonical XDR deserialization.
///
/// This trait provides a generic deserialization for wire formats, such as
/// account identifiers and transactions. It is intended for use only where the
/// exact bytes matter; in other contexts, such as configs or RPC payloads, it
/// would be preferable to use Serde.
pub trait XdrDeserialize: Sized {
    /// Try to read `self` from the given `reader`.
    ///
    /// This function has an `xdr_` prefix to alert the reader that the
    /// serialization in use is the canonical wire serialization, rather than
    /// some other kind of serialization.
    fn xdr_deserialize<R: io::Read>(reader: R) -> Result<Self, SerializationError>;
}

/// Helper for deserializing more succinctly via type inference
pub trait XdrDeserializeInto {
    /// Deserialize based on type inference
    fn xdr_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: XdrDeserialize;
}

impl<R: io::Read> XdrDeserializeInto for R {
    fn xdr_deserialize_into<T>(self) -> Result<T, SerializationError>
    where
        T: XdrDeserialize,
    {
        T::xdr_deserialize(self)
    }
}
