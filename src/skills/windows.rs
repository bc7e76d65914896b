//! Active window generation for a single skill variant
//!
//! A skill fires at `activation_start`, stays up for `activation_duration`,
//! and fires again every recurrence period until the horizon.

use crate::core::interval::Interval;
use crate::skills::variant::SkillVariant;
use serde::{Deserialize, Serialize};

/// The cached activation timeline of one variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillWindowSet {
    pub variant: SkillVariant,
    /// Ordered, each clipped to the horizon
    pub windows: Vec<Interval>,
}

impl SkillWindowSet {
    pub fn reduction_percent(&self) -> f64 {
        self.variant.reduction_percent
    }

    /// Total time this variant alone is active
    pub fn active_time(&self) -> f64 {
        crate::core::interval::total_duration(&self.windows)
    }
}

/// Generate the activation windows of `variant` up to `horizon`
///
/// Returns an empty set when the recurrence period is not positive or the
/// horizon is not finite; config validation rejects both before they get here.
pub fn generate_windows(
    variant: SkillVariant,
    activation_duration: f64,
    horizon: f64,
) -> SkillWindowSet {
    let period = variant.recurrence_period();
    let mut windows = Vec::new();

    if period > 0.0 && horizon.is_finite() {
        let mut t = variant.activation_start;
        while t < horizon {
            windows.push(Interval {
                start: t,
                end: (t + activation_duration).min(horizon),
            });
            t += period;
        }
    }

    SkillWindowSet { variant, windows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_follow_period() {
        let set = generate_windows(SkillVariant::new(0.0, 30.0, 5.0), 5.0, 40.0);
        assert_eq!(
            set.windows,
            vec![Interval::new(5.0, 10.0), Interval::new(35.0, 40.0)]
        );
    }

    #[test]
    fn test_last_window_is_clipped() {
        let set = generate_windows(SkillVariant::new(10.0, 30.0, 5.0), 5.0, 34.0);
        // Second activation at 32 is cut short by the horizon
        assert_eq!(set.windows.len(), 2);
        assert_eq!(set.windows[1], Interval::new(32.0, 34.0));
    }

    #[test]
    fn test_reference_setup_window_count() {
        // 35% -> 19.5 s period from 4.8 s within 101 s: 4.8, 24.3, 43.8, 63.3, 82.8
        let set = generate_windows(SkillVariant::new(35.0, 30.0, 4.8), 5.0, 101.0);
        assert_eq!(set.windows.len(), 5);
        assert!((set.windows[4].start - 82.8).abs() < 1e-9);
    }

    #[test]
    fn test_start_past_horizon_is_empty() {
        let set = generate_windows(SkillVariant::new(0.0, 30.0, 50.0), 5.0, 40.0);
        assert!(set.windows.is_empty());
    }

    #[test]
    fn test_infinite_horizon_is_empty() {
        let set = generate_windows(SkillVariant::new(35.0, 30.0, 4.8), 5.0, f64::INFINITY);
        assert!(set.windows.is_empty());
    }

    #[test]
    fn test_non_positive_period_is_empty() {
        let set = generate_windows(SkillVariant::new(100.0, 30.0, 0.0), 5.0, 40.0);
        assert!(set.windows.is_empty());
    }
}
