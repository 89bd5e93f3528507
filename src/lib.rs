//! # UTXO Chain
//!
//! Transaction admission and fork-aware chain extension over an unspent
//! output ledger, for a single validating node.
//!
//! ## Architecture
//!
//! Components, leaves first:
//! - [`utxo`] - the UTXO pool, copied per branch
//! - [`transaction`] - single transaction validation against a pool
//! - [`handler`] - epoch processing: sequential acceptance of a candidate batch
//! - [`economic`] - fees and fee ordering of an accepted batch
//! - [`block`] - strict, all-or-nothing block application
//! - [`chain`] - branch tracking, best tip and cutoff-age fork rule
//! - [`mining`] - assembling the next block from pending transactions
//!
//! Hashing and signatures live in [`crypto`]; validation outcomes are plain
//! values ([`ValidationResult`], `bool`), and [`ConsensusError`] is reserved
//! for configuration problems and unsupported operations.
//!
//! ## Usage
//!
//! ```rust
//! use utxo_chain::*;
//! use utxo_chain::crypto::{public_key_bytes, secret_key_from_bytes, sign_input};
//!
//! let alice = secret_key_from_bytes(&[1; 32]).unwrap();
//! let bob = secret_key_from_bytes(&[2; 32]).unwrap();
//!
//! let genesis = Block::genesis(Transaction::coinbase(50, public_key_bytes(&alice), 0));
//! let mut chain = BlockChain::new(genesis.clone());
//!
//! let mut tx = Transaction {
//!     nonce: 0,
//!     inputs: vec![TransactionInput {
//!         prevout: OutPoint::new(genesis.coinbase.hash(), 0),
//!         signature: vec![],
//!     }],
//!     outputs: vec![TransactionOutput { value: 45, pubkey: public_key_bytes(&bob) }],
//! };
//! sign_input(&alice, &mut tx, 0).unwrap();
//! chain.submit_transaction(tx);
//!
//! let block = mining::create_new_block(&chain, public_key_bytes(&alice)).unwrap();
//! assert!(chain.add_block(block));
//! assert_eq!(chain.max_height(), 2);
//! ```

pub mod types;
pub mod constants;
pub mod error;
pub mod config;
pub mod crypto;
pub mod utxo;
pub mod transaction;
pub mod handler;
pub mod economic;
pub mod block;
pub mod mempool;
pub mod mining;
pub mod chain;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{ConsensusError, Result};
pub use config::{AssemblyOrder, ChainConfig};
pub use utxo::UtxoPool;
pub use handler::{GreedyFee, InOrder, OptimalFee, SelectionStrategy, TxHandler};
pub use mempool::TransactionPool;
pub use chain::{BlockChain, SharedBlockChain};
