//! Identity hashing and signature primitives
//!
//! Transactions and blocks are identified by double SHA-256 over a fixed
//! little-endian encoding of their content. Input signatures are ECDSA over
//! secp256k1, committing to the single SHA-256 of [`raw_data_to_sign`].

use crate::constants::NULL_HASH;
use crate::error::{ConsensusError, Result};
use crate::types::*;
use bitcoin_hashes::{sha256d, Hash as BitcoinHash, HashEngine};
use secp256k1::{ecdsa::Signature, Message, PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

/// Calculate transaction ID
///
/// Covers the nonce, every input (outpoint and signature) and every output.
pub fn calculate_tx_id(tx: &Transaction) -> Hash {
    let mut engine = sha256d::Hash::engine();
    engine.input(&tx.nonce.to_le_bytes());
    engine.input(&(tx.inputs.len() as u64).to_le_bytes());
    for input in &tx.inputs {
        write_outpoint(&mut engine, &input.prevout);
        write_bytes(&mut engine, &input.signature);
    }
    write_outputs(&mut engine, &tx.outputs);
    sha256d::Hash::from_engine(engine).into_inner()
}

/// Calculate block hash over the parent reference, coinbase and transaction IDs
pub fn calculate_block_hash(block: &Block) -> Hash {
    let mut engine = sha256d::Hash::engine();
    engine.input(&block.prev_block_hash.unwrap_or(NULL_HASH));
    engine.input(&calculate_tx_id(&block.coinbase));
    engine.input(&(block.transactions.len() as u64).to_le_bytes());
    for tx in &block.transactions {
        engine.input(&calculate_tx_id(tx));
    }
    sha256d::Hash::from_engine(engine).into_inner()
}

/// Signable payload for input `index`: its outpoint followed by all outputs.
///
/// Signatures never enter the payload, so signing one input does not
/// invalidate another.
pub fn raw_data_to_sign(tx: &Transaction, index: usize) -> Result<ByteString> {
    let input = tx.inputs.get(index).ok_or(ConsensusError::InputOutOfRange {
        index,
        inputs: tx.inputs.len(),
    })?;

    let mut data = Vec::with_capacity(40 + tx.outputs.len() * 45);
    data.extend_from_slice(&input.prevout.hash);
    data.extend_from_slice(&input.prevout.index.to_le_bytes());
    for output in &tx.outputs {
        data.extend_from_slice(&output.value.to_le_bytes());
        data.extend_from_slice(&(output.pubkey.len() as u64).to_le_bytes());
        data.extend_from_slice(&output.pubkey);
    }
    Ok(data)
}

/// Verify a DER signature over `message` with a SEC1 public key.
///
/// Any parse failure verifies as false.
pub fn verify_signature(pubkey_bytes: &[u8], message: &[u8], signature_bytes: &[u8]) -> bool {
    let pubkey = match PublicKey::from_slice(pubkey_bytes) {
        Ok(pk) => pk,
        Err(_) => return false,
    };

    let signature = match Signature::from_der(signature_bytes) {
        Ok(sig) => sig,
        Err(_) => return false,
    };

    let secp = Secp256k1::verification_only();
    secp.verify_ecdsa(&message_digest(message), &signature, &pubkey)
        .is_ok()
}

/// Sign `message` with `secret_key`, returning a DER signature.
pub fn sign_message(secret_key: &SecretKey, message: &[u8]) -> ByteString {
    let secp = Secp256k1::signing_only();
    secp.sign_ecdsa(&message_digest(message), secret_key)
        .serialize_der()
        .to_vec()
}

/// Sign input `index` of `tx` and store the signature in place.
pub fn sign_input(secret_key: &SecretKey, tx: &mut Transaction, index: usize) -> Result<()> {
    let payload = raw_data_to_sign(tx, index)?;
    tx.inputs[index].signature = sign_message(secret_key, &payload);
    Ok(())
}

/// Parse a 32-byte secret key.
pub fn secret_key_from_bytes(bytes: &[u8]) -> Result<SecretKey> {
    SecretKey::from_slice(bytes).map_err(|e| ConsensusError::InvalidKey(e.to_string()))
}

/// Compressed SEC1 public key for `secret_key`.
pub fn public_key_bytes(secret_key: &SecretKey) -> ByteString {
    let secp = Secp256k1::signing_only();
    PublicKey::from_secret_key(&secp, secret_key)
        .serialize()
        .to_vec()
}

fn message_digest(message: &[u8]) -> Message {
    let digest: [u8; 32] = Sha256::digest(message).into();
    Message::from_digest(digest)
}

fn write_outpoint<E: HashEngine>(engine: &mut E, outpoint: &OutPoint) {
    engine.input(&outpoint.hash);
    engine.input(&outpoint.index.to_le_bytes());
}

fn write_bytes<E: HashEngine>(engine: &mut E, bytes: &[u8]) {
    engine.input(&(bytes.len() as u64).to_le_bytes());
    engine.input(bytes);
}

fn write_outputs<E: HashEngine>(engine: &mut E, outputs: &[TransactionOutput]) {
    engine.input(&(outputs.len() as u64).to_le_bytes());
    for output in outputs {
        engine.input(&output.value.to_le_bytes());
        write_bytes(engine, &output.pubkey);
    }
}
