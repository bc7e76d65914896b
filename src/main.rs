//! Skill Uptime - command line front end
//!
//! Loads a planner config (TOML, or the built-in defaults), runs a full
//! recompute and prints the best loadouts, optionally filtered by a query.

use clap::Parser;
use skill_uptime::core::error::Result;
use skill_uptime::{format_time, recompute, FilterQuery, Interval, PlannerConfig, ScoredCombination};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Number of bars per chart row (matches the reference chart layout)
const CHART_STEPS: usize = 8;

/// Rank cooldown-reduction loadouts by effective skill uptime
#[derive(Parser, Debug)]
#[command(name = "skill-uptime")]
#[command(about = "Rank cooldown-reduction loadouts by effective skill uptime")]
struct Args {
    /// Planner config (TOML); built-in defaults when omitted
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the loadout size
    #[arg(long)]
    size: Option<usize>,

    /// Simulate station arrivals from boosted movement
    #[arg(long)]
    dynamic: bool,

    /// Override the speed multiplier used while a skill is active
    #[arg(long)]
    boost: Option<f64>,

    /// How many results to print
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Only show loadouts containing these reduction values, e.g. "5 5 10"
    #[arg(long, short = 'q')]
    query: Option<String>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Print chart rows (stations, effective time, member windows) per result
    #[arg(long)]
    chart: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skill_uptime=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            PlannerConfig::load(path)?
        }
        None => PlannerConfig::default(),
    };
    if let Some(size) = args.size {
        config.search.combination_size = size;
    }
    if args.dynamic {
        config.route.dynamic_mode = true;
    }
    if let Some(boost) = args.boost {
        config.route.speed_boost_multiplier = boost;
    }

    let results = recompute(&config)?;

    let shown: Vec<&ScoredCombination> = match &args.query {
        Some(text) => {
            let query = FilterQuery::parse(text);
            tracing::info!("Filtering by [{}]", query.normalized());
            results.filter(&query).into_iter().take(args.top).collect()
        }
        None => results.top(args.top).iter().collect(),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    println!(
        "{} loadouts scored ({} mode), showing {}",
        results.len(),
        if config.route.dynamic_mode { "dynamic" } else { "static" },
        shown.len()
    );
    println!();

    for (rank, scored) in shown.iter().enumerate() {
        println!(
            "#{:<3} [{}]  effective {}",
            rank + 1,
            scored.identifier,
            format_time(scored.total_effective_time)
        );
        println!("     uptime:   {}", format_intervals(&scored.effective_intervals));
        println!("     stations: {}", format_intervals(&scored.stations));

        if args.chart {
            for row in scored.timeline_rows(results.pool(), CHART_STEPS) {
                println!("     {:>10} {}", row.label, format_intervals(&row.intervals));
            }
        }
    }

    Ok(())
}

fn format_intervals(intervals: &[Interval]) -> String {
    if intervals.is_empty() {
        return "-".to_string();
    }
    intervals
        .iter()
        .map(|iv| format!("{}-{}", format_time(iv.start), format_time(iv.end)))
        .collect::<Vec<_>>()
        .join(", ")
}
