//! Search ranked results by the reduction values they contain
//!
//! A query is free text such as `"5 5 10"`. Tokens that are not numbers are
//! ignored. A combination matches when it contains every requested value at
//! least as many times as it was requested, so `"5 5"` matches `5 5 10` but
//! not `5 10`.

use crate::scoring::ScoredCombination;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Parsed multiset of requested reduction values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    values: Vec<f64>,
}

impl FilterQuery {
    /// Parse whitespace separated numbers, silently dropping anything else
    pub fn parse(text: &str) -> Self {
        let mut values: Vec<f64> = text
            .split_whitespace()
            .filter_map(|token| token.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .collect();
        values.sort_by(|a, b| a.total_cmp(b));
        Self { values }
    }

    /// Sorted requested values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Query rewritten in canonical form, e.g. `"10 x 5"` → `"5 10"`
    pub fn normalized(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if every requested value is present often enough in `candidate`
    pub fn matches(&self, candidate: &ScoredCombination) -> bool {
        if self.values.is_empty() {
            return false;
        }

        let mut available = counts(candidate.combination.iter().map(|v| v.reduction_percent));
        for value in &self.values {
            match available.get_mut(&OrderedFloat(*value)) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    }

    /// Matching results, in the order given
    pub fn filter<'a>(&self, ranked: &'a [ScoredCombination]) -> Vec<&'a ScoredCombination> {
        if self.values.is_empty() {
            return Vec::new();
        }
        ranked.iter().filter(|r| self.matches(r)).collect()
    }
}

fn counts<I>(values: I) -> BTreeMap<OrderedFloat<f64>, usize>
where
    I: IntoIterator<Item = f64>,
{
    let mut map = BTreeMap::new();
    for value in values {
        *map.entry(OrderedFloat(value)).or_insert(0) += 1;
    }
    map
}
