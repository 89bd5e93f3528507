//! Shared fixtures for integration tests

#![allow(dead_code)]

use secp256k1::SecretKey;
use utxo_chain::crypto::{public_key_bytes, secret_key_from_bytes, sign_input};
use utxo_chain::*;

/// Install a test log subscriber once; honours RUST_LOG.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn key(byte: u8) -> SecretKey {
    secret_key_from_bytes(&[byte; 32]).unwrap()
}

pub fn pubkey(byte: u8) -> ByteString {
    public_key_bytes(&key(byte))
}

/// Signed transaction spending `claims` (all owned by `owner`) into `outputs`,
/// each output paid to key `payee`.
pub fn signed_tx(owner: &SecretKey, claims: &[OutPoint], outputs: &[Integer], payee: u8) -> Transaction {
    let mut tx = Transaction {
        nonce: 0,
        inputs: claims
            .iter()
            .map(|prevout| TransactionInput { prevout: *prevout, signature: vec![] })
            .collect(),
        outputs: outputs
            .iter()
            .map(|value| TransactionOutput { value: *value, pubkey: pubkey(payee) })
            .collect(),
    };
    for i in 0..tx.inputs.len() {
        sign_input(owner, &mut tx, i).unwrap();
    }
    tx
}

/// Genesis whose coinbase pays `values` to key 1.
pub fn genesis_paying(values: &[Integer]) -> Block {
    Block::genesis(Transaction {
        nonce: 0,
        inputs: vec![],
        outputs: values
            .iter()
            .map(|value| TransactionOutput { value: *value, pubkey: pubkey(1) })
            .collect(),
    })
}

/// Child of `parent` with a coinbase paying 25 to key `miner`.
pub fn child_block(parent: &Block, nonce: Natural, miner: u8, txs: Vec<Transaction>) -> Block {
    Block::new(
        Some(parent.hash()),
        Transaction::coinbase(25, pubkey(miner), nonce),
        txs,
    )
}

/// Extend `tip` with `count` empty blocks, returning the new tip.
pub fn extend(chain: &mut BlockChain, tip: &Block, count: usize, nonce_base: Natural) -> Block {
    let mut tip = tip.clone();
    for n in 0..count {
        let next = child_block(&tip, nonce_base + n as Natural, 1, vec![]);
        assert!(chain.add_block(next.clone()));
        tip = next;
    }
    tip
}
