//! Pending transaction pool
//!
//! Holds submitted transactions that no best-chain block includes yet. Nothing
//! is validated on submission; block processing decides admissibility.

use crate::types::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TransactionPool {
    txs: HashMap<Hash, Transaction>,
    // submission order of the hashes in `txs`
    order: Vec<Hash>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the transaction was already pending.
    pub fn add_transaction(&mut self, tx: Transaction) -> bool {
        let tx_id = tx.hash();
        if self.contains(&tx_id) {
            return false;
        }
        self.txs.insert(tx_id, tx);
        self.order.push(tx_id);
        true
    }

    /// Drop every transaction in `txs` from the pool.
    pub fn remove_included(&mut self, txs: &[Transaction]) {
        for tx in txs {
            self.txs.remove(&tx.hash());
        }
        let remaining = &self.txs;
        self.order.retain(|h| remaining.contains_key(h));
    }

    pub fn contains(&self, tx_id: &Hash) -> bool {
        self.txs.contains_key(tx_id)
    }

    /// Pending transactions in first-submission order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.order
            .iter()
            .filter_map(|h| self.txs.get(h))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.txs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }
}
