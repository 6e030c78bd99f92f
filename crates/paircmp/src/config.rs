//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use paircmp_core::{TestDesign, DEFAULT_BASELINE, DEFAULT_TREATMENT};

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// paircmp: paired t-test of benchmark timings between two configurations.
#[derive(Parser, Debug)]
#[command(name = "paircmp", version, about)]
pub struct AppConfig {
    /// JSON dataset file (defaults to the built-in measurements).
    #[arg(long, env = "PAIRCMP_DATA")]
    pub data: Option<PathBuf>,

    /// Baseline group name.
    #[arg(short, long, default_value = DEFAULT_BASELINE, env = "PAIRCMP_BASELINE")]
    pub baseline: String,

    /// Treatment group name.
    #[arg(short, long, default_value = DEFAULT_TREATMENT, env = "PAIRCMP_TREATMENT")]
    pub treatment: String,

    /// Significance threshold.
    #[arg(short, long, default_value = "0.05", env = "PAIRCMP_ALPHA")]
    pub alpha: f64,

    /// Test design: `means` (one pair per worker count) or `samples` (one pair per trial).
    #[arg(long, default_value = "means")]
    pub design: TestDesign,

    /// Report format.
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also write the report to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show extra statistics.
    #[arg(short, long)]
    pub verbose: bool,

    /// List the available groups and exit.
    #[arg(long)]
    pub list: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
