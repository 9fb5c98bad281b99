pub mod cli;
pub mod run;
pub mod scenario_file;

pub use cli::*;
pub use run::*;
