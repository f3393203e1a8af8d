//! Harvest Yield Calculator
//!
//! Deterministic yield, cost, revenue and profit figures for crops, with
//! optional environmental modifiers (sun, wind, temperature, ...).
//!
//! Module structure:
//! - `data`: Plant, CropEntry, Harvest and EnvironmentFactors
//! - `config`: CalculatorConfig and the unknown-level policy
//! - `utils/`: Modifier conversion and factor-level lookup
//! - `metrics/`: Yield, cost, revenue and profit calculations
//! - `explanation`: Per-plant modifier breakdown
//! - `calculator`: YieldCalculator facade and harvest summaries
//!
//! ```
//! use harvest_yield_rust::{CropEntry, EnvironmentFactors, Plant, YieldCalculator};
//!
//! let corn = Plant::new("corn", 3.0)
//!     .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)]);
//! let entry = CropEntry::new(corn, 10.0);
//! let env = EnvironmentFactors::new().with("sun", "high");
//!
//! let calc = YieldCalculator::default();
//! assert_eq!(calc.crop_yield(&entry, Some(&env)).unwrap(), 45.0);
//! ```

pub mod calculator;
pub mod config;
pub mod data;
pub mod error;
pub mod explanation;
pub mod metrics;
pub mod utils;

// Re-export commonly used types
pub use calculator::{CropFigures, HarvestSummary, YieldCalculator};
pub use config::{CalculatorConfig, UnknownLevelPolicy};
pub use data::{CropEntry, EnvironmentFactors, FactorTable, Harvest, LevelTable, Plant};
pub use error::{Result, YieldError};
pub use explanation::{explain_plant_yield, YieldBreakdown};
pub use metrics::*;
