//! Chain configuration

use crate::constants::{COINBASE_REWARD, CUT_OFF_AGE};
use crate::error::{ConsensusError, Result};
use crate::types::*;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order in which an assembled block lists (and therefore applies) its
/// transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyOrder {
    /// Candidate order from the pending pool; conflicts resolve first-come.
    #[default]
    Admission,
    /// Ascending fee; the batch is re-run in that order so conflicts resolve
    /// in fee order too.
    FeeAscending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub cutoff_age: Natural,
    pub coinbase_reward: Integer,
    pub assembly_order: AssemblyOrder,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            cutoff_age: CUT_OFF_AGE,
            coinbase_reward: COINBASE_REWARD,
            assembly_order: AssemblyOrder::default(),
        }
    }
}

impl ChainConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChainConfig =
            serde_json::from_str(json).map_err(|e| ConsensusError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading chain config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("parsing chain config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.coinbase_reward < 0 {
            return Err(ConsensusError::Configuration(format!(
                "coinbase_reward must be non-negative, got {}",
                self.coinbase_reward
            )));
        }
        Ok(())
    }
}
