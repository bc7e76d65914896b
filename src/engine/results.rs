//! Ranked output of a recompute, kept around for searching and charting

use crate::query::FilterQuery;
use crate::scoring::{ScoredCombination, TimelineRow};
use crate::skills::SkillPool;

/// Combinations sorted by effective time, best first
#[derive(Debug, Clone, Default)]
pub struct RankedResults {
    pool: SkillPool,
    ranked: Vec<ScoredCombination>,
}

impl RankedResults {
    pub fn new(pool: SkillPool, ranked: Vec<ScoredCombination>) -> Self {
        Self { pool, ranked }
    }

    pub fn results(&self) -> &[ScoredCombination] {
        &self.ranked
    }

    pub fn pool(&self) -> &SkillPool {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn best(&self) -> Option<&ScoredCombination> {
        self.ranked.first()
    }

    pub fn top(&self, n: usize) -> &[ScoredCombination] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Results containing the queried reduction values, still ranked
    pub fn filter(&self, query: &FilterQuery) -> Vec<&ScoredCombination> {
        query.filter(&self.ranked)
    }

    /// Parse `text` as a query and filter by it
    pub fn search(&self, text: &str) -> Vec<&ScoredCombination> {
        self.filter(&FilterQuery::parse(text))
    }

    /// Chart rows for the result at `rank` (0 = best)
    pub fn timeline_rows(&self, rank: usize, step_count: usize) -> Option<Vec<TimelineRow>> {
        self.ranked
            .get(rank)
            .map(|scored| scored.timeline_rows(&self.pool, step_count))
    }
}
