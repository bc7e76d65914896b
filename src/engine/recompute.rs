//! Full recompute: config in, ranked combinations out
//!
//! Pipeline:
//! validate -> build skill pool -> enumerate combinations ->
//! per combination (merge -> stations -> effective time) -> rank
//!
//! Combinations are independent, so scoring fans out with rayon once the
//! search is big enough to pay for it. Results are collected in generation
//! order before the stable ranking sort, so output is identical either way.

use crate::core::config::PlannerConfig;
use crate::core::error::Result;
use crate::engine::results::RankedResults;
use crate::scoring::{rank, score_combination, ScoredCombination};
use crate::search::combinations_with_repetition;
use crate::skills::{SkillPool, SkillWindowSet};
use crate::stations::StationModel;
use rayon::prelude::*;

/// Recompute every combination for `config`
///
/// Blocking and one-shot; callers that react to edits should debounce before
/// calling this.
pub fn recompute(config: &PlannerConfig) -> Result<RankedResults> {
    config.validate()?;

    let pool = SkillPool::build(&config.skill);
    for set in pool.window_sets() {
        if set.windows.is_empty() {
            tracing::warn!(
                "Reduction {}% produces no windows before the {} s horizon",
                set.reduction_percent(),
                config.skill.horizon
            );
        }
    }

    let model = StationModel::from_route(&config.route);
    let scored = score_all(&pool, &model, config)?;
    let ranked = rank(scored);

    if let Some(best) = ranked.first() {
        tracing::info!(
            "Scored {} combinations; best {} with {} s effective",
            ranked.len(),
            best.identifier,
            best.total_effective_time
        );
    }

    Ok(RankedResults::new(pool, ranked))
}

fn score_all(
    pool: &SkillPool,
    model: &StationModel,
    config: &PlannerConfig,
) -> Result<Vec<ScoredCombination>> {
    let combinations = combinations_with_repetition(pool.len(), config.search.combination_size);
    let horizon = config.skill.horizon;
    let sets = pool.window_sets();

    let score = |indices: &Vec<usize>| {
        let members: Vec<&SkillWindowSet> = indices.iter().map(|&i| &sets[i]).collect();
        score_combination(&members, model, horizon)
    };

    if combinations.len() >= config.search.parallel_threshold {
        tracing::debug!(
            "Scoring {} combinations in parallel ({} mode)",
            combinations.len(),
            if model.is_dynamic() { "dynamic" } else { "static" }
        );
        // PARALLEL: each combination only reads the shared pool
        combinations.par_iter().map(score).collect()
    } else {
        tracing::debug!(
            "Scoring {} combinations sequentially ({} mode)",
            combinations.len(),
            if model.is_dynamic() { "dynamic" } else { "static" }
        );
        combinations.iter().map(score).collect()
    }
}
