//! Calculator configuration
//!
//! There is no config file: callers build a `CalculatorConfig` directly, or
//! parse one from a JSON string they already hold.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// What to do when the environment selects a level the plant's factor table
/// does not define for a dimension it does define (e.g. sun = "extreme"
/// where only low/medium/high exist).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLevelPolicy {
    /// Fail with `YieldError::UnknownLevel`
    #[default]
    Reject,
    /// Treat as a 0% adjustment (modifier 1.0)
    Neutral,
    /// Poison the multiplier with NaN, so every downstream figure is NaN
    Propagate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub unknown_level: UnknownLevelPolicy,

    /// Check quantities and plant numbers are finite (and quantities >= 0)
    /// before computing
    pub validate_inputs: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            unknown_level: UnknownLevelPolicy::Reject,
            validate_inputs: true,
        }
    }
}

impl CalculatorConfig {
    /// Parse from JSON; missing keys fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse calculator config JSON")
    }

    pub fn with_unknown_level(mut self, policy: UnknownLevelPolicy) -> Self {
        self.unknown_level = policy;
        self
    }

    pub fn with_validation(mut self, validate_inputs: bool) -> Self {
        self.validate_inputs = validate_inputs;
        self
    }
}
