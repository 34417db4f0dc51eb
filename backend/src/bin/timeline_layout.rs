//! Timeline Layout CLI
//!
//! Reads scheduled campaigns from a JSON file, lays them out for one planning
//! year and prints the per-panel layout as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin timeline-layout --features cli -- campaigns.json 2025
//! ```
//!
//! The year argument may be omitted when `timeline.toml` or `TIMELINE_YEAR`
//! provides it.
//!
//! # Environment Variables
//!
//! - `TIMELINE_MODE`, `TIMELINE_BOUNDARY_MONTH`, `TIMELINE_BOUNDARY_DAY`,
//!   `TIMELINE_YEAR`: override `timeline.toml`
//! - `RUST_LOG`: Log filter directives, e.g. `planner_timeline=debug` (default: info)

use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use planner_timeline::config::LayoutConfig;
use planner_timeline::io::load_campaigns_file;
use planner_timeline::services::build_group_layout;

const DEFAULT_LOG_FILTER: &str = "info";

/// Filter from `RUST_LOG` directives, falling back to `info` when unset, empty or invalid.
fn log_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let path = args
        .next()
        .context("usage: timeline-layout <campaigns.json> [year]")?;

    let config = LayoutConfig::load()?;
    let year = match args.next() {
        Some(raw) => raw
            .parse::<i32>()
            .with_context(|| format!("Invalid year '{}'", raw))?,
        None => config
            .timeline
            .year
            .context("No year given and none configured (TIMELINE_YEAR)")?,
    };
    let boundary = config.boundary_for_year(year)?;

    let campaigns = load_campaigns_file(&path)?;
    info!(
        "Loaded {} campaigns from {} (mode={}, boundary={})",
        campaigns.len(),
        path,
        config.mode(),
        boundary
    );

    let layout = build_group_layout(&campaigns, Some(boundary), config.mode())?;
    info!(
        "Built {} panels, widest panel has {} lanes",
        layout.len(),
        layout.max_lane_count()
    );

    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}
