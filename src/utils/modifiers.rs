//! Environmental modifiers
//!
//! Converts a plant's percentage adjustments into multiplicative modifiers:
//! `modifier = 1 + percentage / 100`. A -50% sun penalty halves yield, a +25%
//! wind bonus multiplies it by 1.25.

use crate::config::UnknownLevelPolicy;
use crate::data::{EnvironmentFactors, Plant};
use crate::error::{Result, YieldError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Plants rarely define more than a handful of dimensions
pub type AppliedModifiers = SmallVec<[AppliedModifier; 4]>;

/// One factor that changed a plant's yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedModifier {
    pub dimension: String,
    pub level: String,
    /// Percentage from the factor table (NaN for an unknown level under `Propagate`)
    pub percentage: f64,
    pub modifier: f64,
}

/// `1 + percentage / 100`
#[inline]
pub fn modifier_from_percentage(percentage: f64) -> f64 {
    1.0 + percentage / 100.0
}

/// Look up the percentage a plant assigns to `level` of `dimension`
///
/// Returns `Ok(None)` when the plant has no table for the dimension (the
/// dimension contributes nothing). A level missing from an existing table is
/// resolved by `policy`.
pub fn lookup_percentage(
    plant: &Plant,
    dimension: &str,
    level: &str,
    policy: UnknownLevelPolicy,
) -> Result<Option<f64>> {
    let Some(levels) = plant.factor.get(dimension) else {
        return Ok(None);
    };

    if let Some(pct) = levels.get(level) {
        return Ok(Some(*pct));
    }

    match policy {
        UnknownLevelPolicy::Reject => Err(YieldError::UnknownLevel {
            plant: plant.name.clone(),
            dimension: dimension.to_string(),
            level: level.to_string(),
        }),
        UnknownLevelPolicy::Neutral => {
            tracing::warn!(
                "Plant '{}' has no '{}' level for '{}', treating as 0%",
                plant.name, level, dimension
            );
            Ok(Some(0.0))
        }
        UnknownLevelPolicy::Propagate => {
            tracing::warn!(
                "Plant '{}' has no '{}' level for '{}', yield becomes NaN",
                plant.name, level, dimension
            );
            Ok(Some(f64::NAN))
        }
    }
}

/// Every modifier the environment applies to a plant, in dimension order
pub fn collect_modifiers(
    plant: &Plant,
    environment: &EnvironmentFactors,
    policy: UnknownLevelPolicy,
) -> Result<AppliedModifiers> {
    let mut applied = AppliedModifiers::new();

    for (dimension, level) in environment.iter() {
        if let Some(percentage) = lookup_percentage(plant, dimension, level, policy)? {
            tracing::trace!("{} {}={} -> {}%", plant.name, dimension, level, percentage);
            applied.push(AppliedModifier {
                dimension: dimension.to_string(),
                level: level.to_string(),
                percentage,
                modifier: modifier_from_percentage(percentage),
            });
        }
    }

    Ok(applied)
}

/// Product of all modifiers (1.0 when none apply)
pub fn combined_multiplier(applied: &[AppliedModifier]) -> f64 {
    applied.iter().fold(1.0, |acc, m| acc * m.modifier)
}
