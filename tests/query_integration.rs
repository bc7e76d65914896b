//! Integration tests for searching ranked results
//!
//! The query runs against a cached recompute: parse the user's text, keep
//! only loadouts containing the requested reduction values, keep the rank
//! order.

use skill_uptime::{recompute, FilterQuery, PlannerConfig};

#[test]
fn test_duplicate_values_require_duplicate_members() {
    let results = recompute(&PlannerConfig::default()).unwrap();
    let hits = results.search("5 5");

    assert!(!hits.is_empty());
    for hit in &hits {
        let fives = hit
            .combination
            .iter()
            .filter(|v| v.reduction_percent == 5.0)
            .count();
        assert!(fives >= 2, "{} has fewer than two 5% members", hit.identifier);
    }

    // 5 5 plus any multiset of 3 from 8 values: C(10, 3)
    assert_eq!(hits.len(), 120);
}

#[test]
fn test_full_loadout_query_finds_one() {
    let results = recompute(&PlannerConfig::default()).unwrap();
    let hits = results.search("35 0 10 10 20");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].identifier, "0 10 10 20 35");
}

#[test]
fn test_hits_keep_rank_order() {
    let results = recompute(&PlannerConfig::default()).unwrap();
    let hits = results.search("15");

    let totals: Vec<f64> = hits.iter().map(|h| h.total_effective_time).collect();
    assert!(totals.windows(2).all(|w| w[0] >= w[1]));

    // Hits appear in the same relative order as in the full ranking
    let positions: Vec<usize> = hits
        .iter()
        .map(|h| {
            results
                .results()
                .iter()
                .position(|r| std::ptr::eq(r, *h))
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unknown_or_garbage_queries() {
    let results = recompute(&PlannerConfig::default()).unwrap();

    assert!(results.search("").is_empty());
    assert!(results.search("fast cooldowns please").is_empty());
    assert!(results.search("7").is_empty());
    assert!(results.search("5 5 5 5 5 5").is_empty());
}

#[test]
fn test_query_normalization_for_display() {
    let query = FilterQuery::parse("20  five 5 x 10");
    assert_eq!(query.normalized(), "5 10 20");

    let results = recompute(&PlannerConfig::default()).unwrap();
    assert_eq!(results.filter(&query), results.search("5 10 20"));
}

#[test]
fn test_timeline_rows_for_best_result() {
    let results = recompute(&PlannerConfig::default()).unwrap();
    let rows = results.timeline_rows(0, 8).unwrap();

    // stations, effective, then the five members
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|r| r.intervals.len() == 8));
    assert!(results.timeline_rows(10_000, 8).is_none());
}
