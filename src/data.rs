//! Crop, harvest and environment data
//!
//! Plain caller-supplied structures. Field names on the wire follow the
//! farm data shape (`yield`, `costs`, `sell_price`, `factor`, `crop`,
//! `numCrops`, `crops`) so fixtures can be written directly as JSON.

use crate::error::{Result, YieldError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Level name → signed percentage adjustment (e.g. "low" → -50.0)
pub type LevelTable = FxHashMap<String, f64>;

/// Environmental dimension → level table (e.g. "sun" → {low, medium, high})
pub type FactorTable = FxHashMap<String, LevelTable>;

/// Static crop definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,

    /// Yield per unit under neutral conditions
    #[serde(rename = "yield")]
    pub base_yield: f64,

    /// Cost per unit planted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<f64>,

    /// Revenue per unit of yield
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,

    /// Environmental modifier table (percentages)
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub factor: FactorTable,
}

impl Plant {
    pub fn new(name: impl Into<String>, base_yield: f64) -> Self {
        Self {
            name: name.into(),
            base_yield,
            ..Default::default()
        }
    }

    pub fn with_costs(mut self, costs: f64) -> Self {
        self.costs = Some(costs);
        self
    }

    pub fn with_sell_price(mut self, sell_price: f64) -> Self {
        self.sell_price = Some(sell_price);
        self
    }

    /// Add (or replace) the level table for one environmental dimension
    ///
    /// ```
    /// use harvest_yield_rust::Plant;
    ///
    /// let corn = Plant::new("corn", 30.0)
    ///     .with_factor("sun", [("low", -50.0), ("medium", 0.0), ("high", 50.0)]);
    /// assert_eq!(corn.factor["sun"]["low"], -50.0);
    /// ```
    pub fn with_factor<I, L>(mut self, dimension: impl Into<String>, levels: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let table: LevelTable = levels
            .into_iter()
            .map(|(level, pct)| (level.into(), pct))
            .collect();
        self.factor.insert(dimension.into(), table);
        self
    }

    /// Unit cost, or `MissingField` if the plant has none
    pub fn require_costs(&self) -> Result<f64> {
        self.costs.ok_or_else(|| YieldError::MissingField {
            plant: self.name.clone(),
            field: "costs",
        })
    }

    /// Sell price, or `MissingField` if the plant has none
    pub fn require_sell_price(&self) -> Result<f64> {
        self.sell_price.ok_or_else(|| YieldError::MissingField {
            plant: self.name.clone(),
            field: "sell_price",
        })
    }

    /// Reject non-finite numbers anywhere in the definition
    pub fn validate(&self) -> Result<()> {
        self.check_finite("yield", self.base_yield)?;
        if let Some(costs) = self.costs {
            self.check_finite("costs", costs)?;
        }
        if let Some(price) = self.sell_price {
            self.check_finite("sell_price", price)?;
        }
        for (dimension, levels) in &self.factor {
            for (level, pct) in levels {
                self.check_finite(&format!("factor.{}.{}", dimension, level), *pct)?;
            }
        }
        Ok(())
    }

    fn check_finite(&self, field: &str, value: f64) -> Result<()> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(YieldError::InvalidValue {
                plant: self.name.clone(),
                field: field.to_string(),
                value,
            })
        }
    }
}

/// A plant plus the number planted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropEntry {
    pub crop: Plant,

    #[serde(rename = "numCrops")]
    pub num_crops: f64,
}

impl CropEntry {
    pub fn new(crop: Plant, num_crops: f64) -> Self {
        Self { crop, num_crops }
    }

    /// Quantity must be finite and non-negative
    pub fn validate_quantity(&self) -> Result<()> {
        if !self.num_crops.is_finite() || self.num_crops < 0.0 {
            return Err(YieldError::InvalidQuantity {
                plant: self.crop.name.clone(),
                value: self.num_crops,
            });
        }
        Ok(())
    }

    /// Quantity check plus `Plant::validate`
    pub fn validate(&self) -> Result<()> {
        self.validate_quantity()?;
        self.crop.validate()
    }
}

/// Ordered collection of crop entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    pub crops: Vec<CropEntry>,
}

impl Harvest {
    pub fn new(crops: Vec<CropEntry>) -> Self {
        Self { crops }
    }

    pub fn push(&mut self, entry: CropEntry) {
        self.crops.push(entry);
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl FromIterator<CropEntry> for Harvest {
    fn from_iter<T: IntoIterator<Item = CropEntry>>(iter: T) -> Self {
        Self {
            crops: iter.into_iter().collect(),
        }
    }
}

/// Selected level per environmental dimension, e.g. {"sun": "low"}
///
/// Ordered by dimension name so modifiers always accumulate in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentFactors(BTreeMap<String, String>);

impl EnvironmentFactors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: impl Into<String>, level: impl Into<String>) -> Self {
        self.0.insert(dimension.into(), level.into());
        self
    }

    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.0.get(dimension).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(d, l)| (d.as_str(), l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<D: Into<String>, L: Into<String>> FromIterator<(D, L)> for EnvironmentFactors {
    fn from_iter<T: IntoIterator<Item = (D, L)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(d, l)| (d.into(), l.into()))
                .collect(),
        )
    }
}
