//! Fork-aware block chain with bounded branch retention
//!
//! Every accepted block becomes a node holding its own copy of the UTXO pool
//! after that block. A block may extend any retained node, but only while the
//! resulting height stays above `max_height - cutoff_age`. Nodes that can no
//! longer be extended are evicted as the best height advances.

use crate::block::{add_coinbase_to_pool, connect_block};
use crate::config::ChainConfig;
use crate::constants::GENESIS_HEIGHT;
use crate::mempool::TransactionPool;
use crate::types::*;
use crate::utxo::UtxoPool;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
struct BlockNode {
    block: Block,
    height: Natural,
    utxo_pool: UtxoPool,
}

#[derive(Debug, Clone)]
pub struct BlockChain {
    nodes: HashMap<Hash, BlockNode>,
    max_height_hash: Hash,
    max_height: Natural,
    transaction_pool: TransactionPool,
    config: ChainConfig,
}

impl BlockChain {
    /// Chain rooted at `genesis_block`, which is trusted without validation.
    pub fn new(genesis_block: Block) -> Self {
        Self::with_config(genesis_block, ChainConfig::default())
    }

    pub fn with_config(genesis_block: Block, config: ChainConfig) -> Self {
        let mut utxo_pool = UtxoPool::new();
        add_coinbase_to_pool(&genesis_block, &mut utxo_pool);

        let genesis_hash = genesis_block.hash();
        let mut nodes = HashMap::new();
        nodes.insert(
            genesis_hash,
            BlockNode {
                block: genesis_block,
                height: GENESIS_HEIGHT,
                utxo_pool,
            },
        );

        Self {
            nodes,
            max_height_hash: genesis_hash,
            max_height: GENESIS_HEIGHT,
            transaction_pool: TransactionPool::new(),
            config,
        }
    }

    fn best_node(&self) -> &BlockNode {
        // the best node is never evicted
        &self.nodes[&self.max_height_hash]
    }

    /// Block at the tip of the highest branch; the first-seen wins ties.
    pub fn best_block(&self) -> &Block {
        &self.best_node().block
    }

    /// Independent copy of the UTXO pool after the best block.
    pub fn best_utxo_pool(&self) -> UtxoPool {
        self.best_node().utxo_pool.clone()
    }

    pub fn max_height(&self) -> Natural {
        self.max_height
    }

    pub fn transaction_pool(&self) -> &TransactionPool {
        &self.transaction_pool
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Number of retained nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_block(&self, hash: &Hash) -> bool {
        self.nodes.contains_key(hash)
    }

    /// Copy of the UTXO pool after a retained block.
    pub fn utxo_pool_at(&self, hash: &Hash) -> Option<UtxoPool> {
        self.nodes.get(hash).map(|node| node.utxo_pool.clone())
    }

    /// Add a transaction to the pending pool without validating it.
    pub fn submit_transaction(&mut self, tx: Transaction) {
        if !self.transaction_pool.add_transaction(tx) {
            debug!("transaction already pending");
        }
    }

    pub fn add_block(&mut self, block: Block) -> bool {
        self.process_block(block).is_valid()
    }

    /// AddBlock: ℬ → {valid, invalid}
    ///
    /// 1. The block must name a retained parent
    /// 2. height = parent.height + 1 must exceed max_height − cutoff_age
    /// 3. Every transaction must be accepted against a copy of the parent's pool
    /// 4. Register the node; move the tip only on a strict height increase
    pub fn process_block(&mut self, block: Block) -> ValidationResult {
        let result = self.try_connect(block);
        if let ValidationResult::Invalid(reason) = &result {
            warn!(%reason, "rejected block");
        }
        result
    }

    fn try_connect(&mut self, block: Block) -> ValidationResult {
        let prev_hash = match block.prev_block_hash {
            Some(hash) => hash,
            None => return ValidationResult::Invalid("Block has no parent".to_string()),
        };

        let block_hash = block.hash();
        if self.nodes.contains_key(&block_hash) {
            return ValidationResult::Invalid("Duplicate block".to_string());
        }

        let parent = match self.nodes.get(&prev_hash) {
            Some(parent) => parent,
            None => return ValidationResult::Invalid("Unknown or pruned parent".to_string()),
        };

        let height = parent.height + 1;
        if height <= self.max_height.saturating_sub(self.config.cutoff_age) {
            return ValidationResult::Invalid(format!(
                "Height {} too far below best height {}",
                height, self.max_height
            ));
        }

        let (result, utxo_pool) = connect_block(&block, parent.utxo_pool.clone());
        if !result.is_valid() {
            return result;
        }

        let new_tip = height > self.max_height;
        if new_tip {
            // side branches leave the pending pool alone
            self.transaction_pool.remove_included(&block.transactions);
        }
        self.nodes.insert(
            block_hash,
            BlockNode {
                block,
                height,
                utxo_pool,
            },
        );
        info!(height, txs = self.nodes[&block_hash].block.transactions.len(), "accepted block");

        if new_tip {
            self.max_height = height;
            self.max_height_hash = block_hash;
            info!(height, "best tip advanced");
            self.prune();
        }

        ValidationResult::Valid
    }

    /// Evict nodes no block may extend any more.
    fn prune(&mut self) {
        let floor = self.max_height.saturating_sub(self.config.cutoff_age);
        let before = self.nodes.len();
        self.nodes.retain(|_, node| node.height >= floor);

        let evicted = before - self.nodes.len();
        if evicted > 0 {
            debug!(evicted, max_height = self.max_height, "pruned block nodes");
        }
    }
}

/// `BlockChain` behind a lock: writers are serialized, readers get copies.
#[derive(Debug, Clone)]
pub struct SharedBlockChain {
    inner: Arc<RwLock<BlockChain>>,
}

impl SharedBlockChain {
    pub fn new(chain: BlockChain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    pub fn add_block(&self, block: Block) -> bool {
        self.inner.write().add_block(block)
    }

    pub fn process_block(&self, block: Block) -> ValidationResult {
        self.inner.write().process_block(block)
    }

    pub fn submit_transaction(&self, tx: Transaction) {
        self.inner.write().submit_transaction(tx)
    }

    pub fn best_block(&self) -> Block {
        self.inner.read().best_block().clone()
    }

    pub fn best_utxo_pool(&self) -> UtxoPool {
        self.inner.read().best_utxo_pool()
    }

    pub fn max_height(&self) -> Natural {
        self.inner.read().max_height()
    }

    pub fn pending_transactions(&self) -> Vec<Transaction> {
        self.inner.read().transaction_pool().transactions()
    }

    /// Run `f` against a consistent view of the chain.
    pub fn read<R>(&self, f: impl FnOnce(&BlockChain) -> R) -> R {
        f(&self.inner.read())
    }
}
