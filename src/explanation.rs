//! Yield explanation
//!
//! Breaks a plant's yield down into the factors that moved it, the factors
//! that did not apply, and the resulting multiplier.

use crate::config::CalculatorConfig;
use crate::data::{EnvironmentFactors, Plant};
use crate::error::Result;
use crate::utils::{collect_modifiers, combined_multiplier, AppliedModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a plant's yield was derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldBreakdown {
    pub plant: String,
    pub base_yield: f64,
    /// Factors from the environment the plant has a table for
    pub applied: AppliedModifiers,
    /// Environment dimensions the plant has no table for
    pub skipped_dimensions: Vec<String>,
    pub multiplier: f64,
    pub final_yield: f64,
}

/// Explain `plant_yield` for the same inputs
pub fn explain_plant_yield(
    plant: &Plant,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<YieldBreakdown> {
    if config.validate_inputs {
        plant.validate()?;
    }

    let (applied, skipped_dimensions) = match environment {
        Some(env) => {
            let applied = collect_modifiers(plant, env, config.unknown_level)?;
            let skipped = env
                .iter()
                .filter(|(dimension, _)| !plant.factor.contains_key(*dimension))
                .map(|(dimension, _)| dimension.to_string())
                .collect();
            (applied, skipped)
        }
        None => (AppliedModifiers::new(), Vec::new()),
    };

    let multiplier = combined_multiplier(&applied);

    Ok(YieldBreakdown {
        plant: plant.name.clone(),
        base_yield: plant.base_yield,
        applied,
        skipped_dimensions,
        multiplier,
        final_yield: plant.base_yield * multiplier,
    })
}

impl fmt::Display for YieldBreakdown {
    /// e.g. "pumpkin: 4 × 1.5625 (temperature=medium +25%, wind=low +25%) = 6.25"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} × {}", self.plant, self.base_yield, self.multiplier)?;
        if !self.applied.is_empty() {
            let parts: Vec<String> = self
                .applied
                .iter()
                .map(|m| format!("{}={} {:+}%", m.dimension, m.level, m.percentage))
                .collect();
            write!(f, " ({})", parts.join(", "))?;
        }
        write!(f, " = {}", self.final_yield)
    }
}
