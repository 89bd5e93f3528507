//! UTXO pool: the set of outputs not yet claimed by any applied transaction
//!
//! Every chain branch owns its own pool. `Clone` is a deep copy, so mutating
//! a branch's pool never reaches its parent or siblings.

use crate::types::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoPool {
    utxos: HashMap<OutPoint, UTXO>,
}

impl UtxoPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, outpoint: &OutPoint) -> bool {
        self.utxos.contains_key(outpoint)
    }

    pub fn get(&self, outpoint: &OutPoint) -> Option<&UTXO> {
        self.utxos.get(outpoint)
    }

    /// Insert or overwrite; callers guarantee outpoint uniqueness.
    pub fn insert(&mut self, outpoint: OutPoint, utxo: UTXO) {
        self.utxos.insert(outpoint, utxo);
    }

    pub fn remove(&mut self, outpoint: &OutPoint) -> Option<UTXO> {
        self.utxos.remove(outpoint)
    }

    /// All unspent outpoints, in no particular order.
    pub fn all(&self) -> Vec<OutPoint> {
        self.utxos.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    /// Sum of every unspent amount owned by `pubkey`.
    pub fn balance_of(&self, pubkey: &[u8]) -> i128 {
        self.utxos
            .values()
            .filter(|utxo| utxo.pubkey == pubkey)
            .map(|utxo| utxo.value as i128)
            .sum()
    }

    /// Insert one entry per output of `tx`, keyed by (tx id, position).
    pub fn add_outputs(&mut self, tx: &Transaction) {
        let tx_id = tx.hash();
        for (i, output) in tx.outputs.iter().enumerate() {
            self.insert(OutPoint::new(tx_id, i as Natural), UTXO::from(output));
        }
    }
}
