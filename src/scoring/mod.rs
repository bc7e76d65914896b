//! Scoring and ranking of skill combinations
//!
//! A combination is scored by merging its members' windows, resolving the
//! stations for that timeline, and measuring the uptime the stations leave.

pub mod effective;

pub use effective::{effective_time, EffectiveTime};

use crate::core::error::Result;
use crate::core::interval::Interval;
use crate::skills::{SkillPool, SkillVariant, SkillWindowSet};
use crate::stations::{Station, StationModel};
use crate::timeline::merge_window_sets;
use serde::{Deserialize, Serialize};

/// One fully evaluated combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCombination {
    /// Member reduction values, space separated (display key, not unique)
    pub identifier: String,
    /// Members in non-decreasing reduction order
    pub combination: Vec<SkillVariant>,
    pub merged_intervals: Vec<Interval>,
    pub total_effective_time: f64,
    pub effective_intervals: Vec<Interval>,
    pub stations: Vec<Station>,
    /// Scoring horizon: the configured horizon, or the last station's end in dynamic mode
    pub dynamic_horizon: f64,
}

/// Labelled interval row for timeline charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineRow {
    pub label: String,
    pub intervals: Vec<Interval>,
}

impl ScoredCombination {
    /// Reduction values of the members, in order
    pub fn reduction_values(&self) -> Vec<f64> {
        self.combination.iter().map(|v| v.reduction_percent).collect()
    }

    /// Chart rows: stations, effective time, then one row per member
    ///
    /// Every row holds exactly `step_count` intervals: extra entries are
    /// dropped and missing ones are filled with an empty `[0, 0]` bar.
    pub fn timeline_rows(&self, pool: &SkillPool, step_count: usize) -> Vec<TimelineRow> {
        let mut rows = vec![
            TimelineRow {
                label: "stations".to_string(),
                intervals: fixed_width(&self.stations, step_count),
            },
            TimelineRow {
                label: "effective".to_string(),
                intervals: fixed_width(&self.effective_intervals, step_count),
            },
        ];

        for variant in &self.combination {
            let windows = pool
                .window_sets()
                .iter()
                .find(|set| set.variant.same_identity(variant))
                .map(|set| set.windows.as_slice())
                .unwrap_or(&[]);
            rows.push(TimelineRow {
                label: format!("-{}%", variant.reduction_percent),
                intervals: fixed_width(windows, step_count),
            });
        }

        rows
    }
}

fn fixed_width(intervals: &[Interval], width: usize) -> Vec<Interval> {
    let mut out: Vec<Interval> = intervals.iter().take(width).copied().collect();
    out.resize(width, Interval { start: 0.0, end: 0.0 });
    out
}

/// Display key for a combination: reduction values joined by spaces
pub fn identifier<'a, I>(members: I) -> String
where
    I: IntoIterator<Item = &'a SkillWindowSet>,
{
    members
        .into_iter()
        .map(|set| set.reduction_percent().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score a single combination
pub fn score_combination(
    members: &[&SkillWindowSet],
    model: &StationModel,
    horizon: f64,
) -> Result<ScoredCombination> {
    let merged = merge_window_sets(members.iter().copied());
    let route = model.resolve(&merged, horizon)?;
    let effective = effective_time(&merged, &route.stations, route.horizon);

    Ok(ScoredCombination {
        identifier: identifier(members.iter().copied()),
        combination: members.iter().map(|set| set.variant).collect(),
        merged_intervals: merged,
        total_effective_time: effective.total,
        effective_intervals: effective.intervals,
        stations: route.stations,
        dynamic_horizon: route.horizon,
    })
}

/// Sort descending by effective time; ties keep generation order
pub fn rank(mut scored: Vec<ScoredCombination>) -> Vec<ScoredCombination> {
    // sort_by is stable
    scored.sort_by(|a, b| b.total_effective_time.total_cmp(&a.total_effective_time));
    scored
}
