//! Revenue metrics
//!
//! Revenue = sell price × crop yield, so it follows the environment through
//! the yield.

use crate::config::CalculatorConfig;
use crate::data::{CropEntry, EnvironmentFactors, Harvest};
use crate::error::Result;
use crate::metrics::yields::crop_yield;

/// Sell price × crop yield
pub fn crop_revenue(
    entry: &CropEntry,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    let sell_price = entry.crop.require_sell_price()?;
    Ok(sell_price * crop_yield(entry, environment, config)?)
}

/// Sum of crop revenues over the harvest (0 for an empty harvest)
pub fn total_revenue(
    harvest: &Harvest,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    let mut total = 0.0;
    for entry in &harvest.crops {
        total += crop_revenue(entry, environment, config)?;
    }
    Ok(total)
}
