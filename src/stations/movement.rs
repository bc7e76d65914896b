//! Dynamic station arrivals driven by skill uptime
//!
//! The subject travels a 1-D route at base speed, sped up by the boost
//! multiplier whenever the current time falls inside a merged skill window.
//! Station distances come from the reference schedule (arrival at base
//! speed minus the stays before it) and do not depend on the combination.
//!
//! Simulation is event driven with two event sources:
//! - the next window boundary (entering or leaving a merged interval)
//! - reaching the next station at the current speed
//!
//! Each step advances to whichever comes first. Window boundaries are
//! consumed in order and each station is reached once, so a run takes at
//! most `stations + 2 * windows` steps; anything more is reported as a stall.

use crate::core::config::RouteConfig;
use crate::core::error::{Result, UptimeError};
use crate::core::interval::Interval;
use crate::stations::Station;

/// Speed with no skill active (distance units per second)
pub const BASE_SPEED: f64 = 1.0;

/// Stations and timeline end produced by one simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedRoute {
    pub stations: Vec<Station>,
    /// End of the last station's stay
    pub horizon: f64,
}

#[derive(Debug, Clone, Copy)]
struct MovementState {
    time: f64,
    position: f64,
    station_index: usize,
}

/// Precomputed route shared by every combination
#[derive(Debug, Clone, PartialEq)]
pub struct MovementSimulator {
    distances: Vec<f64>,
    stay_duration: f64,
    base_speed: f64,
    boost_multiplier: f64,
}

impl MovementSimulator {
    pub fn new(distances: Vec<f64>, stay_duration: f64, boost_multiplier: f64) -> Self {
        Self {
            distances,
            stay_duration,
            base_speed: BASE_SPEED,
            boost_multiplier,
        }
    }

    /// Derive station distances from the reference schedule
    pub fn from_route(route: &RouteConfig) -> Self {
        let distances = route
            .stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.arrival_time - i as f64 * route.stay_duration) * BASE_SPEED)
            .collect();
        Self::new(distances, route.stay_duration, route.speed_boost_multiplier)
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn station_count(&self) -> usize {
        self.distances.len()
    }

    /// Run the route against a merged uptime timeline
    ///
    /// `merged` must be sorted and disjoint. `fallback_horizon` is used when
    /// the route has no stations.
    pub fn simulate(&self, merged: &[Interval], fallback_horizon: f64) -> Result<SimulatedRoute> {
        let budget = self.distances.len() + 2 * merged.len() + 1;
        let mut stations = Vec::with_capacity(self.distances.len());
        let mut state = MovementState {
            time: 0.0,
            position: 0.0,
            station_index: 0,
        };
        let mut cursor = 0;
        let mut steps = 0;

        while state.station_index < self.distances.len() {
            steps += 1;
            if steps > budget {
                return Err(self.stall(state, steps));
            }

            // Drop windows that are already over
            while cursor < merged.len() && merged[cursor].end <= state.time {
                cursor += 1;
            }

            let (boosted, next_change) = match merged.get(cursor) {
                Some(window) if window.contains(state.time) => (true, window.end),
                Some(window) => (false, window.start),
                None => (false, f64::INFINITY),
            };

            let speed = if boosted {
                self.base_speed * self.boost_multiplier
            } else {
                self.base_speed
            };
            if speed.is_nan() || speed <= 0.0 {
                return Err(self.stall(state, steps));
            }

            let target = self.distances[state.station_index];
            let to_station = (target - state.position).max(0.0) / speed;

            if state.time + to_station <= next_change {
                let arrival = state.time + to_station;
                let station = Interval {
                    start: arrival,
                    end: arrival + self.stay_duration,
                };
                stations.push(station);

                state.time = station.end;
                state.position = target;
                state.station_index += 1;
            } else {
                state.position += speed * (next_change - state.time);
                state.time = next_change;
            }
        }

        let horizon = stations.last().map_or(fallback_horizon, |s| s.end);
        Ok(SimulatedRoute { stations, horizon })
    }

    fn stall(&self, state: MovementState, iterations: usize) -> UptimeError {
        tracing::warn!(
            "Movement stalled at t={:.2}, position {:.2}, station {}",
            state.time,
            state.position,
            state.station_index
        );
        UptimeError::SimulationStall {
            station_index: state.station_index,
            iterations,
        }
    }
}
