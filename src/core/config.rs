//! Planner configuration
//!
//! Every knob the collaborator can edit lives here, grouped into the three
//! concerns it drives: skill window generation, the combination search, and
//! the route (stations) that interrupts uptime. Defaults reproduce the
//! reference setup: reductions 0..=35% in 5% steps on a 30 s cooldown,
//! 5 s windows starting at 4.8 s, a 101 s horizon, 5-skill loadouts and two
//! 15 s stations at 19 s and 61 s.

use crate::core::error::{Result, UptimeError};
use crate::search::combinations::combination_count;
use crate::skills::pool::{reduction_count, reduction_values};
use crate::skills::variant::effective_recurrence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Skill window generation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Spacing between consecutive reduction values (percent)
    pub reduction_step: f64,
    /// Smallest reduction value in the pool (percent, inclusive)
    pub min_reduction: f64,
    /// Largest reduction value in the pool (percent, inclusive)
    pub max_reduction: f64,
    /// Cooldown before any reduction is applied (seconds)
    pub base_cooldown: f64,
    /// How long each activation stays up (seconds)
    pub activation_duration: f64,
    /// Time of the first activation (seconds)
    pub activation_start: f64,
    /// End of the simulated timeline (seconds)
    pub horizon: f64,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            reduction_step: 5.0,
            min_reduction: 0.0,
            max_reduction: 35.0,
            base_cooldown: 30.0,
            activation_duration: 5.0,
            activation_start: 4.8,
            horizon: 101.0,
        }
    }
}

/// Combination search parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of skills in a loadout (k)
    pub combination_size: usize,
    /// Minimum combination count before scoring fans out across threads
    ///
    /// Below this, rayon's scheduling overhead outweighs the work.
    pub parallel_threshold: usize,
    /// Upper bound on C(n+k-1, k); larger searches are rejected up front
    pub max_combinations: u64,
    /// Upper bound on activations generated per variant before the horizon
    pub max_windows: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            combination_size: 5,
            parallel_threshold: 1000,
            max_combinations: 5_000_000,
            max_windows: 100_000,
        }
    }
}

/// One stop on the reference schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationStop {
    /// Nominal arrival time when travelling at base speed (seconds)
    pub arrival_time: f64,
}

/// Route parameters: where the subject stops and how fast it travels
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Reference schedule, ordered by arrival time
    pub stations: Vec<StationStop>,
    /// Time spent stationary at every station (seconds)
    pub stay_duration: f64,
    /// Simulate arrivals per combination instead of using the reference schedule
    pub dynamic_mode: bool,
    /// Speed multiplier applied while any skill window is active
    pub speed_boost_multiplier: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            stations: vec![
                StationStop { arrival_time: 19.0 },
                StationStop { arrival_time: 61.0 },
            ],
            stay_duration: 15.0,
            dynamic_mode: false,
            speed_boost_multiplier: 1.1,
        }
    }
}

/// Complete planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub skill: SkillConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub route: RouteConfig,
}

impl PlannerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text; missing sections and fields fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reduction values the skill pool will be built from
    pub fn reduction_values(&self) -> Vec<f64> {
        reduction_values(
            self.skill.min_reduction,
            self.skill.max_reduction,
            self.skill.reduction_step,
        )
    }

    /// Validate configuration before any generation work starts
    ///
    /// Sizes are checked from the numbers alone (pool size, combination
    /// count, windows per variant) so nothing large is allocated for a
    /// config that is going to be rejected.
    pub fn validate(&self) -> Result<()> {
        let skill = &self.skill;

        require_finite("reduction_step", skill.reduction_step)?;
        require_finite("min_reduction", skill.min_reduction)?;
        require_finite("max_reduction", skill.max_reduction)?;
        require_finite("base_cooldown", skill.base_cooldown)?;
        require_finite("activation_duration", skill.activation_duration)?;
        require_finite("activation_start", skill.activation_start)?;
        require_finite("horizon", skill.horizon)?;

        if skill.reduction_step <= 0.0 {
            return Err(invalid(format!(
                "reduction_step ({}) must be positive",
                skill.reduction_step
            )));
        }
        if skill.min_reduction > skill.max_reduction {
            return Err(invalid(format!(
                "min_reduction ({}) must be <= max_reduction ({})",
                skill.min_reduction, skill.max_reduction
            )));
        }
        if skill.horizon <= 0.0 {
            return Err(invalid(format!("horizon ({}) must be positive", skill.horizon)));
        }
        if skill.activation_duration < 0.0 {
            return Err(invalid(format!(
                "activation_duration ({}) must not be negative",
                skill.activation_duration
            )));
        }
        if skill.activation_start < 0.0 {
            return Err(invalid(format!(
                "activation_start ({}) must not be negative",
                skill.activation_start
            )));
        }

        let k = self.search.combination_size;
        if k == 0 {
            return Err(invalid("combination_size must be at least 1".into()));
        }

        // With k >= 1 the pool size never exceeds C(n+k-1, k), so a pool
        // larger than max_combinations is rejected before it is built
        let pool_size = reduction_count(skill.min_reduction, skill.max_reduction, skill.reduction_step)
            .filter(|&n| n as u128 <= self.search.max_combinations as u128)
            .ok_or_else(|| {
                invalid(format!(
                    "reduction range {}..={} in steps of {} exceeds max_combinations ({})",
                    skill.min_reduction,
                    skill.max_reduction,
                    skill.reduction_step,
                    self.search.max_combinations
                ))
            })?;

        let count = combination_count(pool_size, k);
        if count.map_or(true, |c| c > self.search.max_combinations as u128) {
            return Err(invalid(format!(
                "{} values taken {} at a time exceeds max_combinations ({})",
                pool_size, k, self.search.max_combinations
            )));
        }

        let values = self.reduction_values();
        if values.is_empty() {
            return Err(invalid("reduction range produces an empty pool".into()));
        }
        for &value in &values {
            let period = effective_recurrence(skill.base_cooldown, value);
            if period.is_nan() || period <= 0.0 {
                return Err(invalid(format!(
                    "reduction {}% on a {} s cooldown gives a non-positive recurrence ({})",
                    value, skill.base_cooldown, period
                )));
            }

            let windows = ((skill.horizon - skill.activation_start) / period).ceil().max(0.0);
            if windows > self.search.max_windows as f64 {
                return Err(invalid(format!(
                    "reduction {}% fires about {} times before horizon {}, over max_windows ({})",
                    value, windows, skill.horizon, self.search.max_windows
                )));
            }
        }

        self.validate_route()
    }

    fn validate_route(&self) -> Result<()> {
        let route = &self.route;

        require_finite("stay_duration", route.stay_duration)?;
        require_finite("speed_boost_multiplier", route.speed_boost_multiplier)?;

        if route.stay_duration < 0.0 {
            return Err(invalid(format!(
                "stay_duration ({}) must not be negative",
                route.stay_duration
            )));
        }
        if route.speed_boost_multiplier <= 0.0 {
            return Err(invalid(format!(
                "speed_boost_multiplier ({}) must be positive",
                route.speed_boost_multiplier
            )));
        }

        let mut previous: Option<f64> = None;
        for (i, station) in route.stations.iter().enumerate() {
            require_finite("arrival_time", station.arrival_time)?;
            if station.arrival_time < 0.0 {
                return Err(invalid(format!(
                    "station {} arrives at a negative time ({})",
                    i, station.arrival_time
                )));
            }
            if let Some(prev) = previous {
                // Stations must be strictly ordered and must not overlap
                if station.arrival_time <= prev || station.arrival_time < prev + route.stay_duration {
                    return Err(invalid(format!(
                        "station {} at {} overlaps or precedes the previous station ({} + {})",
                        i, station.arrival_time, prev, route.stay_duration
                    )));
                }
            }
            previous = Some(station.arrival_time);
        }

        Ok(())
    }
}

fn require_finite(field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{} ({}) must be a finite number", field, value)))
    }
}

fn invalid(message: String) -> UptimeError {
    UptimeError::InvalidConfig(message)
}
