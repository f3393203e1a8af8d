//! Yield metrics: plant, crop and harvest
//!
//! Plant yield is the base of every other figure. Crop yield scales it by the
//! number planted; harvest yield sums crop yields.

use crate::config::CalculatorConfig;
use crate::data::{CropEntry, EnvironmentFactors, Harvest, Plant};
use crate::error::Result;
use crate::utils::{collect_modifiers, combined_multiplier};

/// Yield of a single plant under the given environment
///
/// Dimensions the plant has no factor table for are ignored. Without an
/// environment the multiplier stays 1 and the base yield is returned as-is.
pub fn plant_yield(
    plant: &Plant,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    if config.validate_inputs {
        plant.validate()?;
    }

    let multiplier = match environment {
        Some(env) => combined_multiplier(&collect_modifiers(plant, env, config.unknown_level)?),
        None => 1.0,
    };

    Ok(plant.base_yield * multiplier)
}

/// Plant yield × number of crops planted
pub fn crop_yield(
    entry: &CropEntry,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    if config.validate_inputs {
        entry.validate_quantity()?;
    }
    Ok(plant_yield(&entry.crop, environment, config)? * entry.num_crops)
}

/// Sum of crop yields over the harvest (0 for an empty harvest)
pub fn total_yield(
    harvest: &Harvest,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    let mut total = 0.0;
    for entry in &harvest.crops {
        total += crop_yield(entry, environment, config)?;
    }

    tracing::debug!("Total yield for {} crops: {}", harvest.len(), total);
    Ok(total)
}
