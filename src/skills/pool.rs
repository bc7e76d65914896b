//! The pool of skill variants a loadout is drawn from

use crate::core::config::SkillConfig;
use crate::core::interval::round2;
use crate::skills::variant::SkillVariant;
use crate::skills::windows::{generate_windows, SkillWindowSet};

/// Number of values in `min, min + step, ..., <= max`
///
/// `None` for a non-finite or empty range, or one too large to index.
pub fn reduction_count(min: f64, max: f64, step: f64) -> Option<usize> {
    if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || min > max {
        return None;
    }

    let span = ((max - min) / step + 1e-9).floor();
    if !span.is_finite() || span >= usize::MAX as f64 {
        return None;
    }
    (span as usize).checked_add(1)
}

/// Inclusive reduction values `min, min + step, ..., <= max`
///
/// Values are computed from an integer index rather than by repeated
/// addition so a 0.1 step does not drift past `max`. Callers bound the
/// count with `reduction_count` first; config validation does.
pub fn reduction_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    match reduction_count(min, max, step) {
        Some(count) => (0..count).map(|i| round2(min + i as f64 * step)).collect(),
        None => Vec::new(),
    }
}

/// Window sets for every reduction value, sorted by reduction ascending
#[derive(Debug, Clone, Default)]
pub struct SkillPool {
    window_sets: Vec<SkillWindowSet>,
}

impl SkillPool {
    /// Build and cache the window set of every variant in the configured range
    pub fn build(config: &SkillConfig) -> Self {
        let values = reduction_values(
            config.min_reduction,
            config.max_reduction,
            config.reduction_step,
        );

        let mut window_sets: Vec<SkillWindowSet> = values
            .into_iter()
            .map(|value| {
                let variant =
                    SkillVariant::new(value, config.base_cooldown, config.activation_start);
                generate_windows(variant, config.activation_duration, config.horizon)
            })
            .collect();
        window_sets.sort_by(|a, b| a.reduction_percent().total_cmp(&b.reduction_percent()));

        tracing::debug!(
            "Built skill pool: {} variants, {} windows total",
            window_sets.len(),
            window_sets.iter().map(|s| s.windows.len()).sum::<usize>()
        );

        Self { window_sets }
    }

    pub fn len(&self) -> usize {
        self.window_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window_sets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SkillWindowSet> {
        self.window_sets.get(index)
    }

    pub fn window_sets(&self) -> &[SkillWindowSet] {
        &self.window_sets
    }
}
