//! Account identities, StrKey addresses, and transaction mutators for Lumen.
//!
//! The main entry points are:
//! - [`account::AccountId`], an account's public key, with its binary and
//!   address encodings,
//! - [`strkey`], the checksummed base32 address format, and
//! - [`sentinel::SentinelSourceAccount`], a placeholder source account for
//!   transactions that will be completed by another signer.
// Standard lints
#![deny(missing_docs)]
#![allow(clippy::try_err)]
#![forbid(unsafe_code)]

pub mod account;
pub mod config;
pub mod error;
pub mod parameters;
pub mod sentinel;
pub mod serialization;
pub mod strkey;
pub mod transaction;

pub use config::Config;

/// A boxed [`std::error::Error`], returned by pluggable components.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
