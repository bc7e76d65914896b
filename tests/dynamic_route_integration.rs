//! Integration tests for dynamic station arrivals
//!
//! In dynamic mode every combination gets its own stations: active skill
//! windows speed up travel, so stronger loadouts reach stations earlier and
//! their scoring horizon (end of the last stay) moves with them.

use skill_uptime::core::config::StationStop;
use skill_uptime::stations::{MovementSimulator, StationModel};
use skill_uptime::timeline::merge_intervals;
use skill_uptime::{recompute, Interval, PlannerConfig};

fn dynamic_config() -> PlannerConfig {
    let mut config = PlannerConfig::default();
    config.route.dynamic_mode = true;
    config.search.combination_size = 3;
    config
}

#[test]
fn test_every_combination_reaches_every_station() {
    let config = dynamic_config();
    let results = recompute(&config).unwrap();

    for scored in results.results() {
        assert_eq!(scored.stations.len(), config.route.stations.len());
        assert!(scored.stations.windows(2).all(|w| w[0].start < w[1].start));
        assert!(scored
            .stations
            .iter()
            .all(|s| (s.duration() - config.route.stay_duration).abs() < 1e-9));
        assert_eq!(scored.dynamic_horizon, scored.stations.last().unwrap().end);
    }
}

#[test]
fn test_boost_never_delays_arrival() {
    let config = dynamic_config();
    let results = recompute(&config).unwrap();

    // Reference arrivals at base speed are 19 s and 61 s
    for scored in results.results() {
        assert!(scored.stations[0].start <= 19.0 + 1e-9);
        assert!(scored.stations[1].start <= 61.0 + 1e-9);
    }
}

#[test]
fn test_neutral_boost_matches_static_schedule() {
    let mut config = dynamic_config();
    config.route.speed_boost_multiplier = 1.0;
    let results = recompute(&config).unwrap();

    for scored in results.results() {
        assert!((scored.stations[0].start - 19.0).abs() < 1e-9);
        assert!((scored.stations[1].start - 61.0).abs() < 1e-9);
        assert!((scored.dynamic_horizon - 76.0).abs() < 1e-9);
    }
}

#[test]
fn test_effective_time_is_clipped_to_dynamic_horizon() {
    let results = recompute(&dynamic_config()).unwrap();

    for scored in results.results() {
        assert!(scored
            .effective_intervals
            .iter()
            .all(|iv| iv.end <= scored.dynamic_horizon + 1e-9));
    }
}

#[test]
fn test_many_stations_single_sweep() {
    let mut config = dynamic_config();
    config.skill.horizon = 400.0;
    config.route.stay_duration = 5.0;
    config.route.stations = (1..=12)
        .map(|i| StationStop {
            arrival_time: i as f64 * 30.0,
        })
        .collect();

    let results = recompute(&config).unwrap();
    for scored in results.results() {
        assert_eq!(scored.stations.len(), 12);
        assert!(scored.stations.windows(2).all(|w| w[0].end <= w[1].start));
    }
}

#[test]
fn test_simulator_against_dense_uptime() {
    // Heavily overlapping windows collapse to one long boost period
    let merged = merge_intervals((0..20).map(|i| Interval::new(i as f64 * 4.0, i as f64 * 4.0 + 5.0)));
    assert_eq!(merged, vec![Interval::new(0.0, 81.0)]);

    let simulator = MovementSimulator::new(vec![22.0], 0.0, 1.1);
    let route = StationModel::Dynamic(simulator)
        .resolve(&merged, 101.0)
        .unwrap();
    assert!((route.stations[0].start - 20.0).abs() < 1e-9);
}
