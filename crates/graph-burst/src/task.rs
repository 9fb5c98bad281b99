use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{Result, SimError, NICE_0_LOAD};

/// Highest nice-mapped priority a task may carry.
pub const MAX_PRIORITY: u8 = 39;

/// Initial execution-length estimate before any burst is observed.
pub const INITIAL_BURST_PREDICTION: f64 = 2.0;

/// Execution-length character of a workload.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurstProfile {
    #[display("interactive")]
    Interactive,
    #[display("batch")]
    Batch,
    #[display("gaming")]
    Gaming,
}

impl BurstProfile {
    /// Half-open `[low, high)` range execution lengths are drawn from.
    pub const fn exec_range(self) -> (f64, f64) {
        match self {
            BurstProfile::Interactive => (0.5, 3.0),
            BurstProfile::Gaming => (1.0, 5.0),
            BurstProfile::Batch => (10.0, 20.0),
        }
    }
}

/// Scheduling state of one simulated workload.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    name: String,
    /// Recorded for a future nice-value mapping; selection ignores it.
    priority: u8,
    load: f64,
    burst: BurstProfile,
    vruntime: f64,
    burst_pred: f64,
    processed: f64,
    latencies: Vec<f64>,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        priority: u8,
        load: f64,
        burst: BurstProfile,
    ) -> Result<Self, SimError> {
        let name = name.into();
        // the weight ratio must stay finite or a zero-length burst charges NaN
        if !load.is_finite() || load <= 0.0 || !(NICE_0_LOAD / load).is_finite() {
            return Err(error_stack::report!(SimError::invalid_load(name, load)));
        }
        if priority > MAX_PRIORITY {
            return Err(error_stack::report!(SimError::InvalidPriority {
                name,
                priority
            }));
        }

        Ok(Self {
            name,
            priority,
            load,
            burst,
            vruntime: 0.0,
            burst_pred: INITIAL_BURST_PREDICTION,
            processed: 0.0,
            latencies: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn burst(&self) -> BurstProfile {
        self.burst
    }

    pub fn vruntime(&self) -> f64 {
        self.vruntime
    }

    pub fn burst_pred(&self) -> f64 {
        self.burst_pred
    }

    pub fn processed(&self) -> f64 {
        self.processed
    }

    /// Per-dispatch execution samples in dispatch order.
    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    pub(crate) fn set_burst_pred(&mut self, burst_pred: f64) {
        self.burst_pred = burst_pred;
    }

    /// Account one dispatch: charge virtual time and record the real burst.
    pub(crate) fn charge(&mut self, vruntime_delta: f64, actual_exec: f64) {
        debug_assert!(vruntime_delta >= 0.0, "vruntime must not decrease");
        self.vruntime += vruntime_delta;
        self.processed += actual_exec;
        self.latencies.push(actual_exec);
    }
}
