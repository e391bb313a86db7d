//! Applying mutators to a transaction.

use tracing::instrument;

use crate::{account::AccountId, config::Config, parameters::Network, BoxError};

use super::Transaction;

/// A single, well-defined change to a transaction under construction.
///
/// Mutators must only change the fields they are responsible for.
pub trait TransactionMutator {
    /// Applies this change to `builder`'s transaction.
    fn mutate_transaction(&self, builder: &mut TransactionBuilder) -> Result<(), BoxError>;
}

/// Builds a [`Transaction`] by applying [`TransactionMutator`]s in order.
#[derive(Clone, Debug)]
pub struct TransactionBuilder {
    /// The transaction being built.
    pub tx: Transaction,

    network: Network,
}

impl TransactionBuilder {
    /// Returns a builder for an empty transaction on the configured network.
    ///
    /// The source account starts as the all-zero Ed25519 key, and the fee
    /// starts at the configured base fee.
    pub fn new(config: &Config) -> Self {
        Self {
            tx: Transaction::new(AccountId::from_ed25519_bytes([0; 32]), config.base_fee),
            network: config.network,
        }
    }

    /// Returns the network this transaction is being built for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Applies `mutators` in order.
    ///
    /// Stops at the first mutator that fails, and returns its error unchanged.
    /// Mutators applied before the failure keep their changes.
    #[instrument(
        skip(self, mutators),
        fields(mutator_count = mutators.len(), network = %self.network)
    )]
    pub fn mutate(&mut self, mutators: &[&dyn TransactionMutator]) -> Result<(), BoxError> {
        for (index, mutator) in mutators.iter().enumerate() {
            if let Err(error) = mutator.mutate_transaction(self) {
                tracing::debug!(index, %error, "transaction mutator failed");
                return Err(error);
            }
        }

        tracing::trace!(tx = ?self.tx, "applied transaction mutators");

        Ok(())
    }

    /// Finishes building, and returns the transaction.
    pub fn into_transaction(self) -> Transaction {
        self.tx
    }
}
