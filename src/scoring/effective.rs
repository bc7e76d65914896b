//! Effective uptime: merged windows minus the time spent at stations
//!
//! Every station overlapping a window subtracts its overlap, and the
//! effective intervals are whatever gaps the stations leave. Stations do not
//! overlap each other, so the subtracted total equals the length removed.

use crate::core::interval::{round2, Interval};
use crate::stations::Station;

/// Result of scoring one merged timeline
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveTime {
    /// Sum of effective durations, rounded to 2 decimals, never negative
    pub total: f64,
    pub intervals: Vec<Interval>,
}

/// Score `merged` against `stations` up to `horizon`
pub fn effective_time(merged: &[Interval], stations: &[Station], horizon: f64) -> EffectiveTime {
    let mut total = 0.0;
    let mut intervals = Vec::with_capacity(merged.len());

    for window in merged {
        let Some(window) = window.clipped_to(horizon) else {
            continue;
        };
        if window.is_empty() {
            continue;
        }

        let mut duration = window.duration();
        let mut conflicts: Vec<&Station> = stations.iter().filter(|s| s.touches(&window)).collect();
        for station in &conflicts {
            duration -= station.overlap_len(&window);
        }
        total += duration;

        if conflicts.is_empty() {
            intervals.push(window);
            continue;
        }

        conflicts.sort_by(|a, b| a.start.total_cmp(&b.start));
        let mut cursor = window.start;
        for station in conflicts {
            if station.start > cursor {
                intervals.push(Interval {
                    start: cursor,
                    end: station.start.min(window.end),
                });
            }
            cursor = cursor.max(station.end);
        }
        if cursor < window.end {
            intervals.push(Interval {
                start: cursor,
                end: window.end,
            });
        }
    }

    EffectiveTime {
        total: round2(total.max(0.0)),
        intervals,
    }
}
