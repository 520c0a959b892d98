//! Report command implementation
//!
//! Runs a single dashboard pass and prints it instead of serving the page.

use crate::cli::output::{format_report, format_report_json};
use crate::cli::ReportArgs;
use crate::config::DashboardConfig;
use crate::data::RandomSource;
use crate::pipeline::{DashboardView, Orchestrator, Selection};

/// Build the view for `args`, seeding from the flag or the config file
pub fn build_report(args: &ReportArgs) -> anyhow::Result<DashboardView> {
    let config = if args.config.exists() {
        DashboardConfig::load(Some(&args.config))?
    } else {
        DashboardConfig::default()
    }
    .with_env_overrides();

    let seed = args.seed.or(config.dashboard.seed);
    let selection = Selection::from_params(Some(&args.department), Some(&args.physician));

    let mut orchestrator = Orchestrator::with_selection(RandomSource::from_seed(seed), selection);
    Ok(orchestrator.refresh())
}

/// Handle `hospital-dashboard report` command
pub fn handle_report(args: &ReportArgs) -> anyhow::Result<String> {
    let view = build_report(args)?;
    if args.json {
        Ok(format_report_json(&view)?)
    } else {
        Ok(format_report(&view))
    }
}
