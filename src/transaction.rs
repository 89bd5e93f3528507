//! Transaction validation against a UTXO pool
//!
//! A transaction tx is valid against pool us if and only if:
//! 1. every claimed outpoint is in us
//! 2. every input signature verifies against the claimed output's key
//! 3. no outpoint is claimed twice by tx
//! 4. every output value is non-negative
//! 5. Σ claimed input values ≥ Σ output values

use crate::crypto::{raw_data_to_sign, verify_signature};
use crate::types::*;
use crate::utxo::UtxoPool;
use std::collections::HashSet;

/// CheckTx: 𝒯𝒳 × 𝒰𝒮 → {valid, invalid}
///
/// Reports the first failed predicate.
pub fn check_tx(tx: &Transaction, utxo_pool: &UtxoPool) -> ValidationResult {
    if !all_claimed_outputs_in_pool(tx, utxo_pool) {
        return ValidationResult::Invalid("Claimed output not in UTXO pool".to_string());
    }

    if !input_signatures_valid(tx, utxo_pool) {
        return ValidationResult::Invalid("Invalid input signature".to_string());
    }

    if !no_output_claimed_twice(tx) {
        return ValidationResult::Invalid("Output claimed multiple times".to_string());
    }

    if !all_outputs_non_negative(tx) {
        return ValidationResult::Invalid("Negative output value".to_string());
    }

    if !inputs_cover_outputs(tx, utxo_pool) {
        return ValidationResult::Invalid("Outputs exceed inputs".to_string());
    }

    ValidationResult::Valid
}

pub fn is_valid_tx(tx: &Transaction, utxo_pool: &UtxoPool) -> bool {
    check_tx(tx, utxo_pool).is_valid()
}

/// (1) All outputs claimed by tx are in the current pool
pub fn all_claimed_outputs_in_pool(tx: &Transaction, utxo_pool: &UtxoPool) -> bool {
    tx.inputs.iter().all(|input| utxo_pool.contains(&input.prevout))
}

/// (2) Every input's signature is valid for the claimed output's key
///
/// Fails closed on a dangling reference.
pub fn input_signatures_valid(tx: &Transaction, utxo_pool: &UtxoPool) -> bool {
    for (i, input) in tx.inputs.iter().enumerate() {
        let utxo = match utxo_pool.get(&input.prevout) {
            Some(utxo) => utxo,
            None => return false,
        };

        let payload = match raw_data_to_sign(tx, i) {
            Ok(payload) => payload,
            Err(_) => return false,
        };

        if !verify_signature(&utxo.pubkey, &payload, &input.signature) {
            return false;
        }
    }
    true
}

/// (3) No outpoint is claimed more than once by tx
pub fn no_output_claimed_twice(tx: &Transaction) -> bool {
    let mut seen = HashSet::with_capacity(tx.inputs.len());
    tx.inputs.iter().all(|input| seen.insert(input.prevout))
}

/// (4) All output values are non-negative
pub fn all_outputs_non_negative(tx: &Transaction) -> bool {
    tx.outputs.iter().all(|output| output.value >= 0)
}

/// (5) Σ inputs ≥ Σ outputs
pub fn inputs_cover_outputs(tx: &Transaction, utxo_pool: &UtxoPool) -> bool {
    input_sum(tx, utxo_pool) >= output_sum(tx)
}

/// Σ values of claimed outputs present in the pool; missing claims count as zero.
pub fn input_sum(tx: &Transaction, utxo_pool: &UtxoPool) -> i128 {
    tx.inputs
        .iter()
        .filter_map(|input| utxo_pool.get(&input.prevout))
        .map(|utxo| utxo.value as i128)
        .sum()
}

pub fn output_sum(tx: &Transaction) -> i128 {
    tx.outputs.iter().map(|output| output.value as i128).sum()
}
