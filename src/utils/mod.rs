//! Utility modules shared by the yield and economics metrics
//!
//! - Modifiers: percentage → multiplier conversion and factor-level lookup

pub mod modifiers;

// Re-export commonly used types
pub use modifiers::{
    collect_modifiers, combined_multiplier, lookup_percentage, modifier_from_percentage,
    AppliedModifier, AppliedModifiers,
};
