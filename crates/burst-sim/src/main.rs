mod cmd;
mod config;

use anyhow::Result;
use clap::Parser;
use utils::version;

use crate::config::Cli;
use crate::config::Commands;

/// Sets up global panic hooks.
fn setup_global_hooks() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        default_hook(panic_info);
        tracing::error!("Thread panicked: {}", panic_info);
    }));
}

fn main() -> Result<()> {
    setup_global_hooks();

    let cli = Cli::parse();
    utils::logging::init(cli.log_level);

    tracing::debug!("burst-sim {}", &**version::VERSION);

    match cli.command {
        Commands::Run(run_args) => cmd::run_comparison(run_args),
        Commands::Scenarios => cmd::run_show_scenarios(),
    }
}
