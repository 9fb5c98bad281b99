use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use utils::version;

use crate::config::run::RunArgs;

#[derive(Parser)]
#[command(about, long_about, version = &**version::VERSION)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Default log level when RUST_LOG is unset"
    )]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare baseline and graph-burst scheduling over a scenario batch
    Run(RunArgs),
    /// Print the built-in scenarios as YAML
    Scenarios,
}
