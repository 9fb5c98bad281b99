use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How comparison results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned text table
    Text,
    /// LaTeX `table` environment
    Latex,
    /// JSON array of comparisons
    Json,
    /// Text table followed by the LaTeX table
    All,
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    #[arg(
        long,
        env = "BURST_SIM_STEPS",
        default_value_t = graph_burst::DEFAULT_STEPS,
        help = "Scheduling steps per scenario and mode"
    )]
    pub steps: u64,

    #[arg(
        long,
        env = "BURST_SIM_SEED",
        help = "Seed for execution-length draws; random when omitted"
    )]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "BURST_SIM_SCENARIOS",
        value_hint = clap::ValueHint::FilePath,
        help = "YAML or JSON scenario list, e.g. scenarios.yaml (built-in scenarios when omitted)"
    )]
    pub scenarios: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::All, help = "Output format")]
    pub format: OutputFormat,
}
