use derive_more::Display;

/// Error type shared by the scheduler core and the scenario runner.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum SimError {
    /// Selection was attempted with no runnable task.
    #[display("task set is empty")]
    EmptyTaskSet,
    /// Task load must be a positive finite weight.
    #[display("task `{name}` has invalid load {load}")]
    InvalidLoad { name: String, load: f64 },
    /// Task priority is outside the nice-value window.
    #[display("task `{name}` has priority {priority} outside 0..=39")]
    InvalidPriority { name: String, priority: u8 },
    /// Configuration is invalid or inconsistent.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl core::error::Error for SimError {}

impl SimError {
    pub fn invalid_load(name: impl Into<String>, load: f64) -> Self {
        Self::InvalidLoad {
            name: name.into(),
            load,
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
