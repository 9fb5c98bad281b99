use crate::task::Task;
use crate::{Result, SimError, NICE_0_LOAD};

/// Tuning of the graph-burst boost.
#[derive(Debug, Clone, Copy)]
pub struct BoostConfig {
    /// Load unit the dependency weight is expressed in.
    pub reference_load: f64,
    /// Dependency weight that maps to a graph factor of 1.0.
    pub graph_normalizer: f64,
    /// Floor applied to the burst prediction before inverting it.
    pub min_burst_pred: f64,
    pub min_boost: f64,
    pub max_boost: f64,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            reference_load: NICE_0_LOAD,
            graph_normalizer: 512.0,
            min_burst_pred: 0.1,
            min_boost: 1.0,
            max_boost: 4.5,
        }
    }
}

/// Contention- and burst-aware multiplier dividing virtual-time increments.
///
/// Heavy tasks with few competing siblings and short predicted bursts get
/// the largest boost. The result never drops below `min_boost`, so a boosted
/// task is never charged more virtual time than under the baseline.
#[derive(Debug, Clone, Copy)]
pub struct BoostCalculator {
    cfg: BoostConfig,
}

impl Default for BoostCalculator {
    fn default() -> Self {
        Self {
            cfg: BoostConfig::default(),
        }
    }
}

impl BoostCalculator {
    pub fn new(cfg: BoostConfig) -> Result<Self, SimError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(cfg.reference_load)
            || !positive(cfg.graph_normalizer)
            || !positive(cfg.min_burst_pred)
        {
            return Err(error_stack::report!(SimError::invalid_config(
                "boost reference load, normalizer and burst floor must be positive"
            )));
        }
        if !positive(cfg.min_boost) || cfg.max_boost < cfg.min_boost {
            return Err(error_stack::report!(SimError::invalid_config(format!(
                "boost bounds [{}, {}] are not a positive interval",
                cfg.min_boost, cfg.max_boost
            ))));
        }
        Ok(Self { cfg })
    }

    /// Boost for `tasks[current]` against the rest of the set.
    ///
    /// Reads the task's current `burst_pred`; callers update the prediction
    /// with the step's burst before calling this.
    pub fn compute(&self, tasks: &[Task], current: usize) -> f64 {
        let task = &tasks[current];
        let sibling_load: f64 = tasks
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != current)
            .map(|(_, t)| t.load())
            .sum();

        let dep_weight = (task.load() * self.cfg.reference_load) / (1.0 + sibling_load);
        let graph_factor = dep_weight / self.cfg.graph_normalizer;
        let burst_factor = 1.0 + 1.0 / task.burst_pred().max(self.cfg.min_burst_pred);

        let boost = graph_factor * burst_factor;
        if boost.is_nan() {
            // inf / inf: both the task and its siblings saturate the load range
            return self.cfg.max_boost;
        }
        boost.clamp(self.cfg.min_boost, self.cfg.max_boost)
    }
}
