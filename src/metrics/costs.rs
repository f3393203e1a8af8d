//! Cost metrics
//!
//! Cost is unit cost × number planted and never depends on the environment.

use crate::config::CalculatorConfig;
use crate::data::{CropEntry, Harvest};
use crate::error::Result;

/// Unit cost × number of crops
pub fn crop_cost(entry: &CropEntry, config: &CalculatorConfig) -> Result<f64> {
    if config.validate_inputs {
        entry.validate()?;
    }
    Ok(entry.crop.require_costs()? * entry.num_crops)
}

/// Sum of crop costs over the harvest (0 for an empty harvest)
pub fn total_cost(harvest: &Harvest, config: &CalculatorConfig) -> Result<f64> {
    let mut total = 0.0;
    for entry in &harvest.crops {
        total += crop_cost(entry, config)?;
    }
    Ok(total)
}
