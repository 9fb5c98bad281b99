use std::path::Path;

use anyhow::{Context, Result};
use graph_burst::ScenarioSpec;
use serde::Deserialize;

/// Scenario files hold either a bare list or a `scenarios:` mapping.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScenarioDocument {
    List(Vec<ScenarioSpec>),
    Wrapped { scenarios: Vec<ScenarioSpec> },
}

impl From<ScenarioDocument> for Vec<ScenarioSpec> {
    fn from(doc: ScenarioDocument) -> Self {
        match doc {
            ScenarioDocument::List(scenarios) => scenarios,
            ScenarioDocument::Wrapped { scenarios } => scenarios,
        }
    }
}

/// load scenario definitions from a YAML or JSON file
pub fn load_scenarios(path: &Path) -> Result<Vec<ScenarioSpec>> {
    tracing::info!("Loading scenarios from {:?}", path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let doc: ScenarioDocument = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON scenario file {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML scenario file {}", path.display()))?
    };
    let scenarios: Vec<ScenarioSpec> = doc.into();

    if scenarios.is_empty() {
        anyhow::bail!("scenario file {} defines no scenarios", path.display());
    }
    tracing::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
