//! Lottery configuration as exchanged with callers and read from JSON files.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidConfig {
    #[error("at least one participant must be specified")]
    NoParticipants,
}

/// A draft lottery: one chance weight per participant, in pre-lottery priority order
/// (first = worst record), and the number of draft positions decided by the lottery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryConfig {
    pub chances: Vec<f64>,
    pub num_to_pick: usize,
}
impl LotteryConfig {
    pub fn new(chances: Vec<f64>, num_to_pick: usize) -> Self {
        Self {
            chances,
            num_to_pick,
        }
    }

    /// Structural validation only; malformed numeric weights are the engine's business and
    /// are sanitised there.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.chances.is_empty() {
            return Err(InvalidConfig::NoParticipants);
        }
        Ok(())
    }

    pub fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(file)?;
        Ok(config)
    }
}
