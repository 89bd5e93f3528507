//! Block application against a branch's UTXO pool

use crate::handler::TxHandler;
use crate::transaction::all_outputs_non_negative;
use crate::types::*;
use crate::utxo::UtxoPool;

/// ConnectBlock: ℬ × 𝒰𝒮 → {valid, invalid} × 𝒰𝒮
///
/// For block b = (parent, coinbase, txs) on top of pool us:
/// 1. Coinbase outputs must be non-negative
/// 2. Process txs in order; every one of them must be accepted
/// 3. Add coinbase outputs: us' = ApplyTransactions(txs, us) ∪ coinbase outputs
/// 4. Return (valid, us')
///
/// On any failure the returned pool is `us` unchanged.
pub fn connect_block(block: &Block, utxo_set: UtxoPool) -> (ValidationResult, UtxoPool) {
    if !all_outputs_non_negative(&block.coinbase) {
        return (
            ValidationResult::Invalid("Negative coinbase output".to_string()),
            utxo_set,
        );
    }

    let mut handler = TxHandler::new(utxo_set.clone());
    let accepted = handler.handle_txs(&block.transactions);
    if accepted.len() != block.transactions.len() {
        return (
            ValidationResult::Invalid(format!(
                "Only {} of {} transactions valid",
                accepted.len(),
                block.transactions.len()
            )),
            utxo_set,
        );
    }

    let mut utxo_set = handler.into_pool();
    add_coinbase_to_pool(block, &mut utxo_set);
    (ValidationResult::Valid, utxo_set)
}

/// ApplyTransaction: 𝒯𝒳 × 𝒰𝒮 → 𝒰𝒮
///
/// us' = (us \ {i.prevout : i ∈ tx.inputs}) ∪ {(tx.id, i) ↦ tx.outputs[i]}
pub fn apply_transaction(tx: &Transaction, utxo_set: &mut UtxoPool) {
    for input in &tx.inputs {
        utxo_set.remove(&input.prevout);
    }
    utxo_set.add_outputs(tx);
}

/// Insert the block's coinbase outputs.
pub fn add_coinbase_to_pool(block: &Block, utxo_set: &mut UtxoPool) {
    utxo_set.add_outputs(&block.coinbase);
}
