//! The parameters of each ledger network.

mod network;

pub use network::{InvalidNetworkError, Network, NetworkId};
