//! Error types for ledger and chain operations
//!
//! Admissibility failures are not errors; they are reported as
//! [`ValidationResult::Invalid`](crate::types::ValidationResult) or `false`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Input index {index} out of range for transaction with {inputs} inputs")]
    InputOutOfRange { index: usize, inputs: usize },
}

pub type Result<T> = std::result::Result<T, ConsensusError>;
