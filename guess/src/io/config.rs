//! Game configuration loaded from an optional TOML file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::io::console::RetryPolicy;

/// Game configuration (TOML).
///
/// Only session knobs live here; the target range is fixed. Missing fields
/// default to an unseeded game with unbounded retries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the target RNG. `None` draws from OS entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Give up after this many consecutive invalid lines. `None` retries forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_invalid_inputs: Option<u32>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_invalid_inputs == Some(0) {
            return Err(anyhow!("max_invalid_inputs must be > 0"));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        match self.max_invalid_inputs {
            Some(limit) => RetryPolicy::AtMost(limit),
            None => RetryPolicy::Unbounded,
        }
    }
}

/// Load config from a TOML file named by the user.
///
/// A missing or unreadable file is an error.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GameConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
