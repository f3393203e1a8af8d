//! Profit metrics
//!
//! Crop profit = revenue − cost. Only the revenue side responds to the
//! environment.

use crate::config::CalculatorConfig;
use crate::data::{CropEntry, EnvironmentFactors, Harvest};
use crate::error::Result;
use crate::metrics::costs::crop_cost;
use crate::metrics::revenue::crop_revenue;

/// Revenue − cost for a single crop entry
pub fn crop_profit(
    entry: &CropEntry,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    Ok(crop_revenue(entry, environment, config)? - crop_cost(entry, config)?)
}

/// Sum of crop profits over the harvest (0 for an empty harvest)
pub fn total_profit(
    harvest: &Harvest,
    environment: Option<&EnvironmentFactors>,
    config: &CalculatorConfig,
) -> Result<f64> {
    let mut total = 0.0;
    for entry in &harvest.crops {
        total += crop_profit(entry, environment, config)?;
    }

    tracing::debug!("Total profit for {} crops: {}", harvest.len(), total);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Plant;
    use approx::assert_relative_eq;

    fn corn() -> Plant {
        Plant::new("corn", 3.0)
            .with_costs(2.0)
            .with_sell_price(4.0)
            .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)])
    }

    fn pumpkin() -> Plant {
        Plant::new("pumpkin", 4.0)
            .with_costs(3.0)
            .with_sell_price(5.0)
            .with_factor("wind", [("low", 25.0), ("medium", 0.0), ("high", -25.0)])
            .with_factor("temperature", [("low", 0.0), ("medium", 25.0), ("high", -25.0)])
    }

    fn strawberry() -> Plant {
        Plant::new("strawberry", 2.0)
            .with_costs(1.0)
            .with_sell_price(6.0)
            .with_factor("wind", [("low", 25.0), ("medium", 0.0), ("high", 0.0)])
            .with_factor("temperature", [("low", -30.0), ("medium", 0.0), ("high", 30.0)])
            .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)])
    }

    #[test]
    fn test_crop_profit_simple() {
        let entry = CropEntry::new(corn(), 10.0);
        // 120 - 20
        assert_relative_eq!(crop_profit(&entry, None, &CalculatorConfig::default()).unwrap(), 100.0);
    }

    #[test]
    fn test_crop_profit_with_environment() {
        let pumpkin = pumpkin().with_costs(6.0);
        let env = EnvironmentFactors::new()
            .with("sun", "high")
            .with("wind", "low")
            .with("temperature", "medium");
        let entry = CropEntry::new(pumpkin, 10.0);

        // 312.5 - 60
        let result = crop_profit(&entry, Some(&env), &CalculatorConfig::default()).unwrap();
        assert_relative_eq!(result, 252.5);
    }

    #[test]
    fn test_cost_is_environment_invariant() {
        let entry = CropEntry::new(corn(), 10.0);
        let config = CalculatorConfig::default();
        let good = EnvironmentFactors::new().with("sun", "high");
        let bad = EnvironmentFactors::new().with("sun", "low");

        let revenue_gap = crop_revenue(&entry, Some(&good), &config).unwrap()
            - crop_revenue(&entry, Some(&bad), &config).unwrap();
        let profit_gap = crop_profit(&entry, Some(&good), &config).unwrap()
            - crop_profit(&entry, Some(&bad), &config).unwrap();
        assert_relative_eq!(revenue_gap, profit_gap);
    }

    #[test]
    fn test_total_profit_empty() {
        let config = CalculatorConfig::default();
        assert_eq!(total_profit(&Harvest::default(), None, &config).unwrap(), 0.0);
        let env = EnvironmentFactors::new().with("sun", "low");
        assert_eq!(total_profit(&Harvest::default(), Some(&env), &config).unwrap(), 0.0);
    }

    #[test]
    fn test_total_profit_multiple_crops() {
        let harvest = Harvest::new(vec![
            CropEntry::new(Plant::new("corn", 3.0).with_costs(2.0).with_sell_price(4.0), 10.0),
            CropEntry::new(Plant::new("pumpkin", 4.0).with_costs(3.0).with_sell_price(5.0), 20.0),
        ]);
        // (120 - 20) + (400 - 60)
        assert_relative_eq!(total_profit(&harvest, None, &CalculatorConfig::default()).unwrap(), 440.0);
    }

    #[test]
    fn test_total_profit_with_environment() {
        let harvest = Harvest::new(vec![
            CropEntry::new(corn(), 10.0),
            CropEntry::new(pumpkin(), 20.0),
            CropEntry::new(strawberry(), 50.0),
        ]);
        let env = EnvironmentFactors::new()
            .with("sun", "low")
            .with("wind", "high")
            .with("temperature", "low");

        // corn 60 - 20, pumpkin 300 - 60, strawberry 210 - 50
        let result = total_profit(&harvest, Some(&env), &CalculatorConfig::default()).unwrap();
        assert_relative_eq!(result, 440.0, epsilon = 1e-9);
    }
}
