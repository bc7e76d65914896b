//! Skill variants: one choice of cooldown-reduction value

use crate::core::interval::round2;
use serde::{Deserialize, Serialize};

/// Cooldown after applying a percentage reduction, rounded to 2 decimals
///
/// Rounded once here so window generation never accumulates drift from
/// an unrounded period.
pub fn effective_recurrence(base_recurrence: f64, reduction_percent: f64) -> f64 {
    round2(base_recurrence * (100.0 - reduction_percent) / 100.0)
}

/// One periodic skill with a specific cooldown reduction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillVariant {
    /// Cooldown reduction in percent; the variant's identity
    pub reduction_percent: f64,
    /// Cooldown before reduction (seconds)
    pub base_recurrence: f64,
    /// Time of the first activation (seconds)
    pub activation_start: f64,
}

impl SkillVariant {
    pub fn new(reduction_percent: f64, base_recurrence: f64, activation_start: f64) -> Self {
        Self {
            reduction_percent,
            base_recurrence,
            activation_start,
        }
    }

    /// Time between consecutive activations
    pub fn recurrence_period(&self) -> f64 {
        effective_recurrence(self.base_recurrence, self.reduction_percent)
    }

    /// Variants are interchangeable when their reduction values match
    pub fn same_identity(&self, other: &SkillVariant) -> bool {
        self.reduction_percent == other.reduction_percent
    }
}
