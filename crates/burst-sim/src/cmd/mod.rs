//! Command layer - Entry points for the simulator subcommands

pub mod run;
pub mod scenarios;

pub use run::run_comparison;
pub use scenarios::run_show_scenarios;
