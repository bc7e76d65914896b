//! Closed numeric ranges on the simulation timeline
//!
//! Everything in the planner (skill windows, merged uptime, stations and
//! effective time) is expressed as a list of `Interval`s in seconds.

use serde::{Deserialize, Serialize};

/// Closed range `[start, end]` in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    /// Create an interval, swapping the bounds if they arrive reversed
    pub fn new(start: f64, end: f64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end
    }

    /// Overlap-or-touch test: a shared boundary counts
    pub fn touches(&self, other: &Interval) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Length of the common part of two intervals (0.0 when disjoint or touching)
    pub fn overlap_len(&self, other: &Interval) -> f64 {
        let lo = self.start.max(other.start);
        let hi = self.end.min(other.end);
        (hi - lo).max(0.0)
    }

    /// Widen in place to cover `other` as well
    pub fn absorb(&mut self, other: &Interval) {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
    }

    /// Clip the end to `limit`; returns None if nothing is left before it
    pub fn clipped_to(&self, limit: f64) -> Option<Interval> {
        if self.start >= limit {
            return None;
        }
        Some(Interval {
            start: self.start,
            end: self.end.min(limit),
        })
    }
}

/// Sum of durations of a slice of intervals
pub fn total_duration(intervals: &[Interval]) -> f64 {
    intervals.iter().map(Interval::duration).sum()
}

/// Round to 2 decimal places (the planner's reporting precision)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
