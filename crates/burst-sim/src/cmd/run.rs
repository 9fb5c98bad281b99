use anyhow::{Context, Result};
use graph_burst::scenario::{default_scenarios, BatchOutcome};
use graph_burst::{report, RandomDraw, ScenarioComparison, ScenarioRunner};

use crate::config::scenario_file::load_scenarios;
use crate::config::{OutputFormat, RunArgs};

pub fn run_comparison(args: RunArgs) -> Result<()> {
    let scenarios = match &args.scenarios {
        Some(path) => load_scenarios(path)?,
        None => default_scenarios(),
    };

    let mut draw = match args.seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded execution-length draws");
            RandomDraw::seeded(seed)
        }
        None => RandomDraw::from_os_rng(),
    };

    tracing::info!(
        scenarios = scenarios.len(),
        steps = args.steps,
        "Starting scheduler comparison"
    );
    let outcome = ScenarioRunner::new(args.steps).run_all(&scenarios, &mut draw);

    for failure in &outcome.failures {
        tracing::warn!("Skipped scenario {}: {}", failure.scenario, failure.error);
    }
    ensure_any_succeeded(&outcome)?;

    print!("{}", render(&outcome.comparisons, args.format)?);
    Ok(())
}

fn ensure_any_succeeded(outcome: &BatchOutcome) -> Result<()> {
    if outcome.comparisons.is_empty() && !outcome.failures.is_empty() {
        anyhow::bail!("all {} scenarios failed", outcome.failures.len());
    }
    Ok(())
}

fn render(comparisons: &[ScenarioComparison], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => report::render_text(comparisons),
        OutputFormat::Latex => report::render_latex(comparisons),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(comparisons)
                .context("failed to serialize comparisons")?;
            json.push('\n');
            json
        }
        OutputFormat::All => format!(
            "{}\n{}",
            report::render_text(comparisons),
            report::render_latex(comparisons)
        ),
    };
    Ok(rendered)
}
