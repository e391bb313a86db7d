//! Property-based tests for basic serialization primitives.

use std::io::Cursor;

use byteorder::{BigEndian, WriteBytesExt};
use proptest::prelude::*;

use crate::serialization::ReadXdrExt;

proptest! {
    #[test]
    fn discriminant_write_then_read_round_trip(d in any::<i32>()) {
        lumen_test::init();

        let mut buf = Vec::new();
        buf.write_i32::<BigEndian>(d).unwrap();
        prop_assert_eq!(buf.len(), 4);

        let expect_d = Cursor::new(&buf[..]).read_discriminant().unwrap();
        prop_assert_eq!(d, expect_d);
    }

    #[test]
    fn read_32_bytes_rejects_short_input(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        lumen_test::init();

        prop_assert!(Cursor::new(&bytes[..]).read_32_bytes().is_err());
    }
}
