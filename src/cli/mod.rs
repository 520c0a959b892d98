//! CLI module for the hospital dashboard
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the dashboard server
//! - `report` - Print one dashboard pass to the terminal
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start the page process with default config
//! hospital-dashboard serve
//!
//! # One pass for Cardiology, as JSON
//! hospital-dashboard report --department Cardiology --json
//!
//! # Generate shell completions
//! hospital-dashboard completions bash > ~/.bash_completion.d/hospital-dashboard
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod report;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use report::handle_report;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "hospital-dashboard.toml";

/// Hospital Dashboard - synthetic ward metrics
#[derive(Parser, Debug)]
#[command(
    name = "hospital-dashboard",
    version,
    about = "Operational hospital dashboard with synthetic metrics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the dashboard server
    Serve(ServeArgs),
    /// Print one dashboard pass to the terminal
    Report(ReportArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override server port (beats HOSPITAL_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override server host (beats HOSPITAL_HOST)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Fix the sample data seed for reproducible pages
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Department to show ("All" or a department name)
    #[arg(short, long, default_value = "All")]
    pub department: String,

    /// Physician to show ("All" or a physician name)
    #[arg(short = 'P', long, default_value = "All")]
    pub physician: String,

    /// Fix the sample data seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
