//! Epoch processing: turn an unordered candidate set into a mutually
//! consistent accepted set and apply it to a UTXO pool
//!
//! Acceptance is a sequential fold. Each candidate is checked against the
//! pool as left by every earlier acceptance in the same call, so a second
//! claim on an already spent outpoint fails the membership check and a
//! transaction may spend outputs created earlier in the same batch, but not
//! later ones.

use crate::block::apply_transaction;
use crate::economic::{sort_by_fee_greedy, sort_by_fee_optimal};
use crate::error::Result;
use crate::transaction::check_tx;
use crate::types::*;
use crate::utxo::UtxoPool;
use tracing::debug;

/// Batch acceptance strategy
pub trait SelectionStrategy {
    /// Accept a subset of `candidates`, applying each accepted transaction to
    /// `utxo_pool`, and return the accepted set in this strategy's order.
    fn select(&self, candidates: &[Transaction], utxo_pool: &mut UtxoPool) -> Result<Vec<Transaction>>;
}

/// Accept in candidate order and report in candidate order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InOrder;

/// Accept in candidate order, report by non-decreasing fee.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyFee;

/// Fee-maximizing selection. Always fails with `NotImplemented`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalFee;

impl SelectionStrategy for InOrder {
    fn select(&self, candidates: &[Transaction], utxo_pool: &mut UtxoPool) -> Result<Vec<Transaction>> {
        Ok(apply_in_order(candidates, utxo_pool))
    }
}

impl SelectionStrategy for GreedyFee {
    fn select(&self, candidates: &[Transaction], utxo_pool: &mut UtxoPool) -> Result<Vec<Transaction>> {
        let snapshot = utxo_pool.clone();
        let accepted = apply_in_order(candidates, utxo_pool);
        Ok(sort_by_fee_greedy(accepted, &snapshot))
    }
}

impl SelectionStrategy for OptimalFee {
    fn select(&self, candidates: &[Transaction], utxo_pool: &mut UtxoPool) -> Result<Vec<Transaction>> {
        sort_by_fee_optimal(candidates, utxo_pool)
    }
}

/// HandleTxs: 𝒯𝒳* × 𝒰𝒮 → 𝒯𝒳* × 𝒰𝒮
///
/// Rejected candidates are dropped silently and leave the pool untouched.
pub fn apply_in_order(candidates: &[Transaction], utxo_pool: &mut UtxoPool) -> Vec<Transaction> {
    let mut accepted = Vec::with_capacity(candidates.len());

    for (i, tx) in candidates.iter().enumerate() {
        match check_tx(tx, utxo_pool) {
            ValidationResult::Valid => {
                apply_transaction(tx, utxo_pool);
                accepted.push(tx.clone());
            }
            ValidationResult::Invalid(reason) => {
                debug!(candidate = i, %reason, "rejected transaction");
            }
        }
    }

    accepted
}

/// Owns one branch's pool copy and processes epochs against it.
#[derive(Debug, Clone, Default)]
pub struct TxHandler {
    utxo_pool: UtxoPool,
}

impl TxHandler {
    /// Takes ownership of `utxo_pool`; pass a clone to keep the original.
    pub fn new(utxo_pool: UtxoPool) -> Self {
        Self { utxo_pool }
    }

    pub fn pool(&self) -> &UtxoPool {
        &self.utxo_pool
    }

    pub fn into_pool(self) -> UtxoPool {
        self.utxo_pool
    }

    pub fn is_valid_tx(&self, tx: &Transaction) -> bool {
        check_tx(tx, &self.utxo_pool).is_valid()
    }

    /// Accept in candidate order.
    pub fn handle_txs(&mut self, possible_txs: &[Transaction]) -> Vec<Transaction> {
        apply_in_order(possible_txs, &mut self.utxo_pool)
    }

    pub fn handle_txs_with<S: SelectionStrategy + ?Sized>(
        &mut self,
        strategy: &S,
        possible_txs: &[Transaction],
    ) -> Result<Vec<Transaction>> {
        strategy.select(possible_txs, &mut self.utxo_pool)
    }
}
