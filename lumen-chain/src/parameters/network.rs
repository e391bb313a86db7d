//! Network passphrases and identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[cfg(any(test, feature = "proptest-impl"))]
use proptest_derive::Arbitrary;


/// The passphrase of the public network.
const MAINNET_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// The passphrase of the public test network.
const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// An enum describing the possible network choices.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "proptest-impl"), derive(Arbitrary))]
pub enum Network {
    /// The production network.
    Mainnet,

    /// The public test network.
    ///
    /// Transactions built with placeholder accounts are usually completed and
    /// signed elsewhere, so the safe default is the network without real funds.
    #[default]
    Testnet,
}

/// The network identifier mixed into every transaction signature payload.
///
/// It is the SHA-256 hash of the network passphrase.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct NetworkId(pub [u8; 32]);

impl fmt::Debug for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("NetworkId").field(&hex::encode(self.0)).finish()
    }
}

impl Network {
    /// Returns the passphrase for this network.
    pub fn passphrase(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_PASSPHRASE,
            Network::Testnet => TESTNET_PASSPHRASE,
        }
    }

    /// Returns the identifier for this network, used by transaction signers.
    pub fn id(&self) -> NetworkId {
        NetworkId(Sha256::digest(self.passphrase().as_bytes()).into())
    }

    /// Returns an iterator over all the networks.
    pub fn iter() -> impl Iterator<Item = Network> {
        [Network::Mainnet, Network::Testnet].into_iter()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("Mainnet"),
            Network::Testnet => f.write_str("Testnet"),
        }
    }
}

/// An error indicating that a network name could not be parsed.
#[derive(Clone, Debug, Error)]
#[error("Invalid network: {0}")]
pub struct InvalidNetworkError(String);

impl FromStr for Network {
    type Err = InvalidNetworkError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(InvalidNetworkError(string.to_owned())),
        }
    }
}
