//! Yield Calculator - Main entry point for harvest calculations
//!
//! Wraps a `CalculatorConfig` and exposes every metric as a method, plus a
//! one-pass harvest summary. Includes both sequential and parallel (Rayon)
//! batch summaries.

use crate::config::CalculatorConfig;
use crate::data::{CropEntry, EnvironmentFactors, Harvest, Plant};
use crate::error::Result;
use crate::explanation::{explain_plant_yield, YieldBreakdown};
use crate::metrics;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Main yield calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YieldCalculator {
    config: CalculatorConfig,
}

/// Figures for one crop entry of a harvest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropFigures {
    pub name: String,
    pub num_crops: f64,
    pub yield_amount: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
}

/// Per-crop figures plus harvest totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HarvestSummary {
    pub crops: Vec<CropFigures>,
    pub total_yield: f64,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
}

impl YieldCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn plant_yield(&self, plant: &Plant, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::plant_yield(plant, environment, &self.config)
    }

    pub fn crop_yield(&self, entry: &CropEntry, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::crop_yield(entry, environment, &self.config)
    }

    pub fn total_yield(&self, harvest: &Harvest, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::total_yield(harvest, environment, &self.config)
    }

    /// Cost takes no environment
    pub fn crop_cost(&self, entry: &CropEntry) -> Result<f64> {
        metrics::crop_cost(entry, &self.config)
    }

    pub fn total_cost(&self, harvest: &Harvest) -> Result<f64> {
        metrics::total_cost(harvest, &self.config)
    }

    pub fn crop_revenue(&self, entry: &CropEntry, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::crop_revenue(entry, environment, &self.config)
    }

    pub fn total_revenue(&self, harvest: &Harvest, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::total_revenue(harvest, environment, &self.config)
    }

    pub fn crop_profit(&self, entry: &CropEntry, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::crop_profit(entry, environment, &self.config)
    }

    pub fn total_profit(&self, harvest: &Harvest, environment: Option<&EnvironmentFactors>) -> Result<f64> {
        metrics::total_profit(harvest, environment, &self.config)
    }

    pub fn explain_plant_yield(
        &self,
        plant: &Plant,
        environment: Option<&EnvironmentFactors>,
    ) -> Result<YieldBreakdown> {
        explain_plant_yield(plant, environment, &self.config)
    }

    /// Summarize a harvest in one pass
    ///
    /// Every crop needs both `costs` and `sell_price`. Totals are summed in
    /// harvest order, so they match `total_yield` / `total_profit` exactly.
    pub fn summarize(
        &self,
        harvest: &Harvest,
        environment: Option<&EnvironmentFactors>,
    ) -> Result<HarvestSummary> {
        let mut summary = HarvestSummary {
            crops: Vec::with_capacity(harvest.len()),
            ..Default::default()
        };

        for entry in &harvest.crops {
            let yield_amount = self.crop_yield(entry, environment)?;
            let cost = self.crop_cost(entry)?;
            let revenue = entry.crop.require_sell_price()? * yield_amount;
            let profit = revenue - cost;

            summary.total_yield += yield_amount;
            summary.total_cost += cost;
            summary.total_revenue += revenue;
            summary.total_profit += profit;

            summary.crops.push(CropFigures {
                name: entry.crop.name.clone(),
                num_crops: entry.num_crops,
                yield_amount,
                cost,
                revenue,
                profit,
            });
        }

        tracing::debug!(
            "Summarized {} crops: yield={} cost={} revenue={} profit={}",
            summary.crops.len(),
            summary.total_yield,
            summary.total_cost,
            summary.total_revenue,
            summary.total_profit
        );

        Ok(summary)
    }

    /// Summarize many harvests sequentially
    pub fn summarize_batch(
        &self,
        harvests: &[Harvest],
        environment: Option<&EnvironmentFactors>,
    ) -> Result<Vec<HarvestSummary>> {
        harvests
            .iter()
            .map(|harvest| self.summarize(harvest, environment))
            .collect()
    }

    /// Summarize many harvests in parallel (Rayon)
    ///
    /// Parallel across harvests only; each harvest is still summed in order,
    /// so results are identical to `summarize_batch`.
    pub fn summarize_batch_parallel(
        &self,
        harvests: &[Harvest],
        environment: Option<&EnvironmentFactors>,
    ) -> Result<Vec<HarvestSummary>> {
        tracing::debug!("Summarizing {} harvests in parallel", harvests.len());

        harvests
            .par_iter()
            .map(|harvest| self.summarize(harvest, environment))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnknownLevelPolicy;
    use crate::error::YieldError;
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

    fn harvest() -> Harvest {
        Harvest::new(vec![CropEntry::new(corn(), 10.0), CropEntry::new(pumpkin(), 20.0)])
    }

    fn env() -> EnvironmentFactors {
        EnvironmentFactors::new()
            .with("sun", "high")
            .with("wind", "low")
            .with("temperature", "medium")
    }

    #[test]
    fn test_summary_matches_standalone_totals() {
        let calc = YieldCalculator::default();
        let harvest = harvest();
        let env = env();
        let summary = calc.summarize(&harvest, Some(&env)).unwrap();

        assert_eq!(summary.total_yield, calc.total_yield(&harvest, Some(&env)).unwrap());
        assert_eq!(summary.total_cost, calc.total_cost(&harvest).unwrap());
        assert_eq!(summary.total_revenue, calc.total_revenue(&harvest, Some(&env)).unwrap());
        assert_eq!(summary.total_profit, calc.total_profit(&harvest, Some(&env)).unwrap());
    }

    #[test]
    fn test_summary_per_crop() {
        let calc = YieldCalculator::default();
        let summary = calc.summarize(&harvest(), Some(&env())).unwrap();

        assert_eq!(summary.crops.len(), 2);

        // corn: 3 × 1.5 × 10 = 45 yield, 180 revenue, 20 cost
        let corn = &summary.crops[0];
        assert_eq!(corn.name, "corn");
        assert_relative_eq!(corn.yield_amount, 45.0);
        assert_relative_eq!(corn.revenue, 180.0);
        assert_relative_eq!(corn.cost, 20.0);
        assert_relative_eq!(corn.profit, 160.0);

        // pumpkin: 4 × 1.5625 × 20 = 125 yield, 625 revenue, 60 cost
        let pumpkin = &summary.crops[1];
        assert_relative_eq!(pumpkin.yield_amount, 125.0);
        assert_relative_eq!(pumpkin.profit, 565.0);
    }

    #[test]
    fn test_summary_empty_harvest() {
        let summary = YieldCalculator::default().summarize(&Harvest::default(), None).unwrap();
        assert_eq!(summary, HarvestSummary::default());
    }

    #[test]
    fn test_summary_requires_prices() {
        let harvest = Harvest::new(vec![CropEntry::new(Plant::new("corn", 3.0).with_costs(2.0), 1.0)]);
        let err = YieldCalculator::default().summarize(&harvest, None).unwrap_err();
        assert!(matches!(err, YieldError::MissingField { field: "sell_price", .. }));
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let calc = YieldCalculator::default();
        let harvests: Vec<Harvest> = (0..16)
            .map(|i| {
                Harvest::new(vec![
                    CropEntry::new(corn(), i as f64),
                    CropEntry::new(pumpkin(), (i * 3) as f64),
                ])
            })
            .collect();

        let sequential = calc.summarize_batch(&harvests, Some(&env())).unwrap();
        let parallel = calc.summarize_batch_parallel(&harvests, Some(&env())).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.len(), 16);
    }

    #[test]
    fn test_batch_stops_on_error() {
        let calc = YieldCalculator::default();
        let bad_env = EnvironmentFactors::new().with("sun", "extreme");
        let err = calc
            .summarize_batch_parallel(&[harvest(), harvest()], Some(&bad_env))
            .unwrap_err();
        assert!(matches!(err, YieldError::UnknownLevel { .. }));
    }

    #[test]
    fn test_propagate_poisons_totals() {
        let calc = YieldCalculator::new(
            CalculatorConfig::default().with_unknown_level(UnknownLevelPolicy::Propagate),
        );
        let bad_env = EnvironmentFactors::new().with("sun", "extreme");
        assert!(calc.total_yield(&harvest(), Some(&bad_env)).unwrap().is_nan());
        assert!(calc.total_profit(&harvest(), Some(&bad_env)).unwrap().is_nan());
        // Cost has no environment input, so it stays finite
        assert_relative_eq!(calc.total_cost(&harvest()).unwrap(), 80.0);
    }
}
