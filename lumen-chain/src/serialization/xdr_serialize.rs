use std::io;

/// Canonical XDR serialization.
///
/// This trait provides a generic serialization for wire formats, such as
/// account identifiers and transactions. It is intended for use only where the
/// exact bytes matter; in other contexts, such as configs or RPC payloads, it
/// would be preferable to use Serde.
pub trait XdrSerialize: Sized {
    /// Write `self` to the given `writer` using the canonical format.
    ///
    /// This function has an `xdr_` prefix to alert the reader that the
    /// serialization in use is the canonical wire serialization, rather than
    /// some other kind of serialization.
    ///
    /// Notice that the error type is [`std::io::Error`]; this indicates that
    /// serialization MUST be infallible up to errors in the underlying writer.
    /// In other words, any type implementing `XdrSerialize` must make illegal
    /// states unrepresentable.
    fn xdr_serialize<W: io::Write>(&self, writer: W) -> Result<(), io::Error>;

    /// Helper function to construct a vec to serialize the current struct into
    fn xdr_serialize_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut data = Vec::new();
        self.xdr_serialize(&mut data)?;
        Ok(data)
    }
}
