//! Metric modules for harvest calculations
//!
//! Yield is the base metric; cost, revenue and profit build on it.
//! Every function takes the `CalculatorConfig` that decides unknown-level
//! handling and input validation.

pub mod yields;
pub mod costs;
pub mod revenue;
pub mod profit;

// Re-export metric functions
pub use yields::{plant_yield, crop_yield, total_yield};
pub use costs::{crop_cost, total_cost};
pub use revenue::{crop_revenue, total_revenue};
pub use profit::{crop_profit, total_profit};
