//! Collapse skill windows into a single uptime timeline
//!
//! Sort by start, then one sweep that widens the running interval whenever
//! the next one overlaps or touches it. The output is sorted and strictly
//! disjoint: `merged[i].end < merged[i + 1].start`.

use crate::core::interval::Interval;
use crate::skills::windows::SkillWindowSet;

/// Merge an arbitrary collection of intervals
pub fn merge_intervals<I>(intervals: I) -> Vec<Interval>
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if last.touches(&interval) => last.absorb(&interval),
            _ => merged.push(interval),
        }
    }
    merged
}

/// Merge every window of every member of a combination
pub fn merge_window_sets<'a, I>(members: I) -> Vec<Interval>
where
    I: IntoIterator<Item = &'a SkillWindowSet>,
{
    merge_intervals(
        members
            .into_iter()
            .flat_map(|set| set.windows.iter().copied()),
    )
}
