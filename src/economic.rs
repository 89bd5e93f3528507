//! Fee computation and fee ordering of accepted transactions

use crate::error::{ConsensusError, Result};
use crate::transaction::{input_sum, output_sum};
use crate::types::*;
use crate::utxo::UtxoPool;

/// CalculateFee: 𝒯𝒳 × 𝒰𝒮 → ℤ
///
/// fee = Σ claimed input values found in `utxo_pool` − Σ output values.
/// Claims absent from the pool contribute nothing, so a transaction that
/// spends an output created later in the same batch may show a negative fee
/// when priced against the pre-batch pool.
pub fn calculate_fee(tx: &Transaction, utxo_pool: &UtxoPool) -> i128 {
    input_sum(tx, utxo_pool) - output_sum(tx)
}

/// Σ fees of `txs`, each priced against `utxo_pool`.
pub fn total_fees(txs: &[Transaction], utxo_pool: &UtxoPool) -> i128 {
    txs.iter().map(|tx| calculate_fee(tx, utxo_pool)).sum()
}

/// Order `txs` by non-decreasing fee; equal fees keep their relative order.
///
/// Greedy: this only reorders an already-accepted set. It never trades a
/// low-fee transaction for conflicting higher-fee ones.
pub fn sort_by_fee_greedy(txs: Vec<Transaction>, utxo_pool: &UtxoPool) -> Vec<Transaction> {
    let mut priced: Vec<(i128, Transaction)> = txs
        .into_iter()
        .map(|tx| (calculate_fee(&tx, utxo_pool), tx))
        .collect();
    priced.sort_by_key(|(fee, _)| *fee);
    priced.into_iter().map(|(_, tx)| tx).collect()
}

/// Fee-maximizing subset selection over linked transactions.
///
/// Grouping transitively dependent transactions and picking the subset with
/// the highest total fee is not implemented; callers get an error rather than
/// the greedy answer.
pub fn sort_by_fee_optimal(_txs: &[Transaction], _utxo_pool: &UtxoPool) -> Result<Vec<Transaction>> {
    Err(ConsensusError::NotImplemented(
        "fee-optimal transaction selection".to_string(),
    ))
}
