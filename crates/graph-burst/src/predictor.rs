use crate::{Result, SimError};

/// Weights of the exponentially-weighted burst average.
#[derive(Debug, Clone, Copy)]
pub struct PredictorConfig {
    /// Share kept from the previous prediction.
    pub history_weight: f64,
    /// Share taken from the newest observed burst.
    pub sample_weight: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        // Both weights are stored so the default blend is exactly 0.8/0.2
        // rather than 0.8/(1.0 - 0.8).
        Self {
            history_weight: 0.8,
            sample_weight: 0.2,
        }
    }
}

/// EWMA predictor of a task's next execution burst.
#[derive(Debug, Clone, Copy)]
pub struct BurstPredictor {
    cfg: PredictorConfig,
}

impl Default for BurstPredictor {
    fn default() -> Self {
        Self {
            cfg: PredictorConfig::default(),
        }
    }
}

impl BurstPredictor {
    pub fn new(cfg: PredictorConfig) -> Result<Self, SimError> {
        let in_unit = |w: f64| (0.0..=1.0).contains(&w);
        if !in_unit(cfg.history_weight) || !in_unit(cfg.sample_weight) {
            return Err(error_stack::report!(SimError::invalid_config(
                "predictor weights must lie in [0, 1]"
            )));
        }
        if (cfg.history_weight + cfg.sample_weight - 1.0).abs() > 1e-9 {
            return Err(error_stack::report!(SimError::invalid_config(format!(
                "predictor weights must sum to 1, got {}",
                cfg.history_weight + cfg.sample_weight
            ))));
        }
        Ok(Self { cfg })
    }

    /// Blend the latest burst into the running estimate.
    pub fn update(&self, current_pred: f64, actual_exec: f64) -> f64 {
        current_pred * self.cfg.history_weight + actual_exec * self.cfg.sample_weight
    }
}
