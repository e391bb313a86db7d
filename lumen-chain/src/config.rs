//! Configuration for transaction building.

use serde::{Deserialize, Serialize};

use crate::parameters::Network;

/// The minimum per-operation fee accepted by the network, in stroops.
pub const MIN_BASE_FEE: u32 = 100;

/// Configuration for [`TransactionBuilder`](crate::transaction::TransactionBuilder).
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The network that built transactions will be signed for.
    ///
    /// Set to `Testnet` by default.
    pub network: Network,

    /// The initial transaction fee, in stroops.
    ///
    /// Set to [`MIN_BASE_FEE`] by default.
    pub base_fee: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::default(),
            base_fee: MIN_BASE_FEE,
        }
    }
}
