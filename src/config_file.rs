//! Configuration file handling for saving and loading drivetrain setups.
//!
//! The [`Drivetrain`](crate::Drivetrain) itself is deliberately permissive at
//! construction time; this module is where cog lists coming from the outside
//! world (config files, CLI input) get validated before a drivetrain is built.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::drivetrain::Drivetrain;

/// Drivetrain configuration that can be saved/loaded as JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrivetrainConfig {
    /// Front cog tooth counts
    pub front_cogs: Vec<u32>,
    /// Rear cog tooth counts
    pub rear_cogs: Vec<u32>,
}

impl Default for DrivetrainConfig {
    fn default() -> Self {
        // A common 2x4 touring setup, also the demo drivetrain.
        Self {
            front_cogs: vec![38, 30],
            rear_cogs: vec![28, 23, 19, 16],
        }
    }
}

impl DrivetrainConfig {
    /// Create a new configuration with the default cog sets
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize drivetrain configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Rejects the inputs the core leaves undefined: empty cog lists, zero
    /// tooth counts (division by zero in the ratio), and duplicate tooth
    /// counts within a list (ambiguous positions for the shift planner).
    pub fn validate(&self) -> Result<()> {
        Self::validate_cogs("Front", &self.front_cogs)?;
        Self::validate_cogs("Rear", &self.rear_cogs)?;
        Ok(())
    }

    fn validate_cogs(side: &str, cogs: &[u32]) -> Result<()> {
        if cogs.is_empty() {
            anyhow::bail!("{side} cog list must not be empty");
        }
        if cogs.contains(&0) {
            anyhow::bail!("{side} cog list must not contain a zero tooth count");
        }
        let mut sorted = cogs.to_vec();
        sorted.sort_unstable();
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            anyhow::bail!("{side} cog list must not contain duplicate tooth counts");
        }
        Ok(())
    }

    /// Build a drivetrain from this configuration
    pub fn to_drivetrain(&self) -> Drivetrain {
        Drivetrain::new(self.front_cogs.clone(), self.rear_cogs.clone())
    }
}
