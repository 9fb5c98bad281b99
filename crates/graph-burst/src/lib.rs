//! Discrete-event model of two CPU scheduling disciplines.
//!
//! The crate compares a baseline weighted-virtual-time scheduler
//! (EEVDF/CFS-style) with the "graph-burst" variant, which divides each
//! virtual-time increment by a contention-aware boost derived from task
//! load and an EWMA burst prediction.
//!
//! - [`Scheduler`]: the step loop over a fixed task set
//! - [`BurstPredictor`] and [`BoostCalculator`]: graph-burst priority inputs
//! - [`DrawSource`]: injectable execution-length sampling
//! - [`metrics`]: p99 latency, throughput and Jain's fairness index
//! - [`scenario`] and [`report`]: batch runs and their rendering

use error_stack::Report;

mod boost;
mod draw;
mod error;
pub mod metrics;
mod predictor;
pub mod report;
pub mod scenario;
mod scheduler;
mod task;


/// Result type using error-stack for context-rich error reporting
pub type Result<T, C> = core::result::Result<T, Report<C>>;

/// Reference load of a nice-0 task; virtual time advances at wall rate for it.
pub const NICE_0_LOAD: f64 = 1024.0;

/// Iteration count used when a caller does not choose one.
pub const DEFAULT_STEPS: u64 = 2000;

pub use boost::{BoostCalculator, BoostConfig};
pub use draw::{DrawSource, RandomDraw, SequenceDraw};
pub use error::SimError;
pub use metrics::ScenarioResult;
pub use predictor::{BurstPredictor, PredictorConfig};
pub use scenario::{run_scenario, ScenarioComparison, ScenarioRunner, ScenarioSpec, TaskSpec};
pub use scheduler::{Scheduler, SchedulingMode, StepOutcome};
pub use task::{BurstProfile, Task, INITIAL_BURST_PREDICTION, MAX_PRIORITY};
