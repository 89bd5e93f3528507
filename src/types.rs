//! Core ledger and chain types

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit hash
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Natural number type
pub type Natural = u64;

/// Integer type
pub type Integer = i64;

/// OutPoint: producing transaction hash × output index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: Natural,
}

impl OutPoint {
    pub fn new(hash: Hash, index: Natural) -> Self {
        Self { hash, index }
    }
}

/// Transaction Input: claimed outpoint × DER signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub prevout: OutPoint,
    pub signature: ByteString,
}

/// Transaction Output: amount × owning public key (SEC1 encoded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    pub value: Integer,
    pub pubkey: ByteString,
}

/// Transaction: nonce × inputs × outputs
///
/// A transaction without inputs is a coinbase. The nonce carries no consensus
/// meaning; it only separates the identities of otherwise identical
/// transactions (block assembly stores the block height there).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub nonce: Natural,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// Build a coinbase paying `value` to `pubkey`.
    pub fn coinbase(value: Integer, pubkey: ByteString, nonce: Natural) -> Self {
        Self {
            nonce,
            inputs: Vec::new(),
            outputs: vec![TransactionOutput { value, pubkey }],
        }
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Transaction identity (double SHA-256 over the full content).
    pub fn hash(&self) -> Hash {
        crate::crypto::calculate_tx_id(self)
    }
}

/// Block: parent reference × coinbase × transactions
///
/// Only a genesis block has no parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub prev_block_hash: Option<Hash>,
    pub coinbase: Transaction,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn new(prev_block_hash: Option<Hash>, coinbase: Transaction, transactions: Vec<Transaction>) -> Self {
        Self {
            prev_block_hash,
            coinbase,
            transactions,
        }
    }

    /// Genesis block: no parent, no regular transactions.
    pub fn genesis(coinbase: Transaction) -> Self {
        Self::new(None, coinbase, Vec::new())
    }

    pub fn hash(&self) -> Hash {
        crate::crypto::calculate_block_hash(self)
    }
}

/// UTXO: amount × owning public key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UTXO {
    pub value: Integer,
    pub pubkey: ByteString,
}

impl From<&TransactionOutput> for UTXO {
    fn from(output: &TransactionOutput) -> Self {
        Self {
            value: output.value,
            pubkey: output.pubkey.clone(),
        }
    }
}

/// Validation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}
