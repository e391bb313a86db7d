//! Hard-coded StrKey and network test vectors.
//!
//! Payloads are hex-encoded, so tests can decode them with the `hex` crate.

/// The all-zero Ed25519 account address.
///
/// This is the address of the blank placeholder source account.
pub const ZERO_ACCOUNT_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// Ed25519 account payloads and their addresses.
pub const ACCOUNT_ID_VECTORS: &[(&str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        ZERO_ACCOUNT_ADDRESS,
    ),
    (
        "363eaa3867841fbad0f4ed88c779e4fe66e56a2470dc98c0ec9c073d05c7b103",
        "GA3D5KRYM6CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHES5",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "GAAACAQDAQCQMBYIBEFAWDANBYHRAEISCMKBKFQXDAMRUGY4DUPB7JZX",
    ),
    (
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        "GD7777777777777777777777777777777777777777777777777773DB",
    ),
];

/// The all-zero payload encoded as a secret seed.
pub const ZERO_SEED: &str = "SAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSU2";

/// The all-zero payload encoded as a pre-authorized transaction hash.
pub const ZERO_PRE_AUTH_TX: &str = "TAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABLVU";

/// The all-zero payload encoded as a SHA-256 hash signer.
pub const ZERO_SHA256_HASH: &str = "XAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAPQN";

/// [`ACCOUNT_ID_VECTORS`]`[1]` with one payload bit flipped and the checksum left as is.
pub const CORRUPT_ACCOUNT_ADDRESS: &str =
    "GA3D5KRYM2CB7OWQ6TWYRR3Z4T7GNZLKERYNZGGA5SOAOPIFY6YQHES5";

/// SHA-256 of the public network passphrase.
pub const MAINNET_NETWORK_ID: &str =
    "7ac33997544e3175d266bd022439b22cdb16508c01163f26e5cb2a3e1045a979";

/// SHA-256 of the test network passphrase.
pub const TESTNET_NETWORK_ID: &str =
    "cee0302d59844d32bdca915c8203dd44b33fbb7edc19051ea37abedf28ecd472";
