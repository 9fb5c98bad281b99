//! Scenario runner
//!
//! Build a fresh task set per (scenario, mode) pair, run the scheduler and
//! collect baseline/proposed result pairs for reporting.

use error_stack::{Report, ResultExt};
use serde::{Deserialize, Serialize};

use crate::boost::BoostCalculator;
use crate::draw::DrawSource;
use crate::metrics::ScenarioResult;
use crate::predictor::BurstPredictor;
use crate::scheduler::{Scheduler, SchedulingMode};
use crate::task::{BurstProfile, Task};
use crate::{Result, SimError, DEFAULT_STEPS};

/// Definition of one task inside a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub priority: u8,
    pub load: f64,
    #[serde(alias = "burst_char")]
    pub burst: BurstProfile,
}

impl TaskSpec {
    pub fn new(name: impl Into<String>, priority: u8, load: f64, burst: BurstProfile) -> Self {
        Self {
            name: name.into(),
            priority,
            load,
            burst,
        }
    }

    pub fn build(&self) -> Result<Task, SimError> {
        Task::new(self.name.clone(), self.priority, self.load, self.burst)
    }
}

/// Named, fixed task set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub tasks: Vec<TaskSpec>,
}

impl ScenarioSpec {
    pub fn new(name: impl Into<String>, tasks: Vec<TaskSpec>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }

    /// Fresh task entities with zeroed scheduling state.
    pub fn build_tasks(&self) -> Result<Vec<Task>, SimError> {
        self.tasks
            .iter()
            .map(|spec| {
                spec.build()
                    .attach_printable_lazy(|| format!("scenario: {}", self.name))
            })
            .collect()
    }
}

/// The three reference workloads: editor, game and mixed media.
pub fn default_scenarios() -> Vec<ScenarioSpec> {
    use BurstProfile::{Batch, Gaming, Interactive};

    vec![
        ScenarioSpec::new(
            "Interactive (Editor/Code)",
            vec![
                TaskSpec::new("Editor", 20, 1024.0, Interactive),
                TaskSpec::new("Background-Math", 30, 4096.0, Batch),
            ],
        ),
        ScenarioSpec::new(
            "Gaming (Low-Latency)",
            vec![
                TaskSpec::new("Game-Renderer", 15, 2048.0, Gaming),
                TaskSpec::new("File-Indexer", 25, 1024.0, Batch),
            ],
        ),
        ScenarioSpec::new(
            "Mixed (Media/Worker)",
            vec![
                TaskSpec::new("Video-Stream", 10, 1024.0, Interactive),
                TaskSpec::new("Worker-Pool", 35, 512.0, Batch),
                TaskSpec::new("System-Daemon", 20, 1024.0, Interactive),
            ],
        ),
    ]
}

/// Run one scenario under one mode and aggregate its metrics.
pub fn run_scenario<D: DrawSource>(
    scenario: &ScenarioSpec,
    n_steps: u64,
    mode: SchedulingMode,
    draw: D,
) -> Result<ScenarioResult, SimError> {
    run_with_models(
        scenario,
        n_steps,
        mode,
        draw,
        BurstPredictor::default(),
        BoostCalculator::default(),
    )
}

fn run_with_models<D: DrawSource>(
    scenario: &ScenarioSpec,
    n_steps: u64,
    mode: SchedulingMode,
    draw: D,
    predictor: BurstPredictor,
    boost: BoostCalculator,
) -> Result<ScenarioResult, SimError> {
    let tasks = scenario.build_tasks()?;
    let mut scheduler = Scheduler::new(tasks, mode, draw)
        .attach_printable_lazy(|| format!("scenario: {}", scenario.name))?
        .with_models(predictor, boost);
    scheduler.run(n_steps);

    let result = ScenarioResult::from_tasks(scenario.name.clone(), mode, scheduler.tasks());
    tracing::info!(
        scenario = %result.scenario,
        mode = %result.mode,
        p99 = result.p99,
        throughput = result.throughput,
        jain = result.jain,
        "Scenario finished"
    );
    Ok(result)
}

/// Baseline and graph-burst results for the same scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub scenario: String,
    pub baseline: ScenarioResult,
    pub proposed: ScenarioResult,
}

/// A scenario that could not be run; the rest of the batch is unaffected.
#[derive(Debug)]
pub struct ScenarioFailure {
    pub scenario: String,
    pub error: Report<SimError>,
}

/// Everything one batch produced, in scenario order.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub comparisons: Vec<ScenarioComparison>,
    pub failures: Vec<ScenarioFailure>,
}

/// Drives every scenario through both scheduling modes.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRunner {
    n_steps: u64,
    predictor: BurstPredictor,
    boost: BoostCalculator,
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

impl ScenarioRunner {
    pub fn new(n_steps: u64) -> Self {
        Self {
            n_steps,
            predictor: BurstPredictor::default(),
            boost: BoostCalculator::default(),
        }
    }

    /// Use custom graph-burst models for the proposed runs.
    pub fn with_models(mut self, predictor: BurstPredictor, boost: BoostCalculator) -> Self {
        self.predictor = predictor;
        self.boost = boost;
        self
    }

    /// Compare both modes on one scenario, baseline first.
    pub fn compare<D: DrawSource>(
        &self,
        scenario: &ScenarioSpec,
        draw: &mut D,
    ) -> Result<ScenarioComparison, SimError> {
        let run = |mode, draw: &mut D| {
            run_with_models(scenario, self.n_steps, mode, draw, self.predictor, self.boost)
        };
        let baseline = run(SchedulingMode::Baseline, &mut *draw)?;
        let proposed = run(SchedulingMode::GraphBurst, &mut *draw)?;
        Ok(ScenarioComparison {
            scenario: scenario.name.clone(),
            baseline,
            proposed,
        })
    }

    pub fn run_all<D: DrawSource>(&self, scenarios: &[ScenarioSpec], draw: &mut D) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        for scenario in scenarios {
            match self.compare(scenario, draw) {
                Ok(comparison) => outcome.comparisons.push(comparison),
                Err(error) => {
                    tracing::error!(scenario = %scenario.name, "Scenario aborted: {error:?}");
                    outcome.failures.push(ScenarioFailure {
                        scenario: scenario.name.clone(),
                        error,
                    });
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boost::BoostConfig;
    use crate::draw::SequenceDraw;

    #[test]
    fn default_scenarios_build() {
        let scenarios = default_scenarios();
        assert_eq!(scenarios.len(), 3);
        for scenario in &scenarios {
            let tasks = scenario.build_tasks().unwrap();
            assert_eq!(tasks.len(), scenario.tasks.len());
        }
        assert_eq!(scenarios[2].tasks[1].name, "Worker-Pool");
        assert_eq!(scenarios[2].tasks[1].load, 512.0);
    }

    #[test]
    fn each_mode_starts_from_fresh_tasks() {
        let scenario = &default_scenarios()[0];
        let mut draw = SequenceDraw::new([1.0, 15.0]).unwrap();
        let comparison = ScenarioRunner::new(10).compare(scenario, &mut draw).unwrap();

        // 10 draws per mode, so both runs replay the same alternating pattern
        assert_eq!(comparison.baseline.throughput, comparison.proposed.throughput);
        assert_eq!(comparison.baseline.mode, SchedulingMode::Baseline);
        assert_eq!(comparison.proposed.mode, SchedulingMode::GraphBurst);
    }

    #[test]
    fn flat_boost_makes_graph_burst_match_baseline() {
        let scenario = &default_scenarios()[0];
        let flat = BoostCalculator::new(BoostConfig {
            min_boost: 1.0,
            max_boost: 1.0,
            ..BoostConfig::default()
        })
        .unwrap();

        let default = ScenarioRunner::new(200)
            .compare(scenario, &mut SequenceDraw::new([15.0]).unwrap())
            .unwrap();
        assert_ne!(default.baseline.jain, default.proposed.jain);

        let flattened = ScenarioRunner::new(200)
            .with_models(BurstPredictor::default(), flat)
            .compare(scenario, &mut SequenceDraw::new([15.0]).unwrap())
            .unwrap();
        assert_eq!(flattened.baseline.jain, flattened.proposed.jain);
        assert_eq!(flattened.baseline.p99, flattened.proposed.p99);
        assert_eq!(flattened.baseline, default.baseline);
    }

    #[test]
    fn invalid_scenario_does_not_abort_batch() {
        let mut scenarios = default_scenarios();
        scenarios.insert(
            1,
            ScenarioSpec::new(
                "Broken",
                vec![TaskSpec::new("zero-load", 10, 0.0, BurstProfile::Batch)],
            ),
        );
        scenarios.push(ScenarioSpec::new("Empty", Vec::new()));

        let mut draw = SequenceDraw::new([2.0]).unwrap();
        let outcome = ScenarioRunner::new(20).run_all(&scenarios, &mut draw);

        assert_eq!(outcome.comparisons.len(), 3);
        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].scenario, "Broken");
        assert!(matches!(
            outcome.failures[0].error.current_context(),
            SimError::InvalidLoad { .. }
        ));
        assert_eq!(
            outcome.failures[1].error.current_context(),
            &SimError::EmptyTaskSet
        );
    }
}
