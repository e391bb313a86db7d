use std::io;

use byteorder::{BigEndian, ReadBytesExt};

/// Extends [`Read`] with methods for reading XDR types.
///
/// [`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
pub trait ReadXdrExt: io::Read {
    /// Convenience method to read a `[u8; 32]`.
    #[inline]
    fn read_32_bytes(&mut self) -> io::Result<[u8; 32]> {
        let mut bytes = [0; 32];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    /// Reads an XDR union or enum discriminant, which is a signed 32-bit
    /// big-endian integer.
    #[inline]
    fn read_discriminant(&mut self) -> io::Result<i32> {
        self.read_i32::<BigEndian>()
    }
}

/// Mark all types implementing `Read` as implementing the extension.
impl<R: io::Read + ?Sized> ReadXdrExt for R {}
