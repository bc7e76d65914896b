//! Skill Uptime - cooldown-reduction loadout search
//!
//! Enumerates every loadout of periodic skills drawn from a range of
//! cooldown reductions, merges their active windows, subtracts the time lost
//! at stations (fixed, or simulated from movement sped up by active skills)
//! and ranks loadouts by the uptime that remains.

pub mod core;
pub mod engine;
pub mod query;
pub mod scoring;
pub mod search;
pub mod skills;
pub mod stations;
pub mod timeline;

pub use crate::core::{format_time, Interval, PlannerConfig, Result, UptimeError};
pub use engine::{recompute, RankedResults};
pub use query::FilterQuery;
pub use scoring::ScoredCombination;
