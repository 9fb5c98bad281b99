use anyhow::{Context, Result};
use graph_burst::scenario::default_scenarios;

pub fn run_show_scenarios() -> Result<()> {
    let yaml = serde_yaml::to_string(&default_scenarios())
        .context("failed to serialize built-in scenarios")?;
    print!("{yaml}");
    Ok(())
}
