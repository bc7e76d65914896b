//! Stations: periods where the subject stands still and uptime is lost
//!
//! Two models are supported:
//! - Static: the reference schedule, identical for every combination
//! - Dynamic: arrivals simulated per combination (see `movement`)

pub mod movement;

pub use movement::{MovementSimulator, SimulatedRoute, BASE_SPEED};

use crate::core::config::RouteConfig;
use crate::core::error::Result;
use crate::core::interval::Interval;

/// A stationary period `[arrival, departure]`
pub type Station = Interval;

/// Fixed, ordered list of stations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSchedule {
    stations: Vec<Station>,
}

impl StationSchedule {
    /// Build stations from arrival times, each lasting `stay_duration`
    ///
    /// Editing an arrival and rebuilding is how the collaborator moves a station.
    pub fn from_arrivals<I>(arrivals: I, stay_duration: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let stations = arrivals
            .into_iter()
            .map(|start| Interval {
                start,
                end: start + stay_duration,
            })
            .collect();
        Self { stations }
    }

    pub fn from_route(route: &RouteConfig) -> Self {
        Self::from_arrivals(
            route.stations.iter().map(|s| s.arrival_time),
            route.stay_duration,
        )
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// How stations are obtained for a combination
#[derive(Debug, Clone, PartialEq)]
pub enum StationModel {
    Static(StationSchedule),
    Dynamic(MovementSimulator),
}

impl StationModel {
    pub fn from_route(route: &RouteConfig) -> Self {
        if route.dynamic_mode {
            StationModel::Dynamic(MovementSimulator::from_route(route))
        } else {
            StationModel::Static(StationSchedule::from_route(route))
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, StationModel::Dynamic(_))
    }

    /// Stations and scoring horizon for one merged timeline
    ///
    /// Static mode keeps the configured `horizon`; dynamic mode ends the
    /// timeline when the last simulated stay ends.
    pub fn resolve(&self, merged: &[Interval], horizon: f64) -> Result<SimulatedRoute> {
        match self {
            StationModel::Static(schedule) => Ok(SimulatedRoute {
                stations: schedule.stations().to_vec(),
                horizon,
            }),
            StationModel::Dynamic(simulator) => simulator.simulate(merged, horizon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::StationStop;

    #[test]
    fn test_from_arrivals_sets_end() {
        let schedule = StationSchedule::from_arrivals([19.0, 61.0], 15.0);
        assert_eq!(
            schedule.stations(),
            &[Interval::new(19.0, 34.0), Interval::new(61.0, 76.0)]
        );
    }

    #[test]
    fn test_static_model_ignores_uptime() {
        let model = StationModel::from_route(&RouteConfig::default());
        assert!(!model.is_dynamic());

        let a = model.resolve(&[], 101.0).unwrap();
        let b = model.resolve(&[Interval::new(0.0, 100.0)], 101.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.horizon, 101.0);
    }

    #[test]
    fn test_dynamic_model_from_route() {
        let route = RouteConfig {
            stations: vec![StationStop { arrival_time: 10.0 }],
            dynamic_mode: true,
            ..RouteConfig::default()
        };
        let model = StationModel::from_route(&route);
        assert!(model.is_dynamic());

        let resolved = model.resolve(&[], 101.0).unwrap();
        assert_eq!(resolved.stations, vec![Interval::new(10.0, 25.0)]);
        assert_eq!(resolved.horizon, 25.0);
    }
}
