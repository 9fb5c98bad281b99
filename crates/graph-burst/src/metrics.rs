//! Metrics aggregation
//!
//! Reduce the final task states of one run into a [`ScenarioResult`].

use serde::{Deserialize, Serialize};

use crate::scheduler::SchedulingMode;
use crate::task::Task;

/// Aggregated outcome of one scenario under one scheduling mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub mode: SchedulingMode,
    /// Nearest-rank 99th percentile of per-dispatch execution lengths.
    pub p99: f64,
    /// Total real execution time consumed across all tasks.
    pub throughput: f64,
    /// Jain's fairness index over per-task processed time.
    pub jain: f64,
}

impl ScenarioResult {
    pub fn from_tasks(scenario: impl Into<String>, mode: SchedulingMode, tasks: &[Task]) -> Self {
        let mut latencies: Vec<f64> = tasks
            .iter()
            .flat_map(|t| t.latencies().iter().copied())
            .collect();
        latencies.sort_by(f64::total_cmp);

        let processed: Vec<f64> = tasks.iter().map(Task::processed).collect();

        Self {
            scenario: scenario.into(),
            mode,
            p99: percentile(&latencies, 0.99),
            throughput: processed.iter().sum(),
            jain: jain_index(&processed),
        }
    }
}

/// Nearest-rank percentile of an ascending slice, 0.0 when empty.
///
/// The rank is `floor(len * quantile)`, clamped to the last element.
pub fn percentile(sorted: &[f64], quantile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (sorted.len() as f64 * quantile) as usize;
    sorted[rank.min(sorted.len() - 1)]
}

/// Jain's fairness index `(Σx)² / (n·Σx²)`, 0.0 when the denominator is 0.
pub fn jain_index(values: &[f64]) -> f64 {
    let sum: f64 = values.iter().sum();
    let sum_sq: f64 = values.iter().map(|v| v * v).sum();
    let denominator = values.len() as f64 * sum_sq;
    if denominator == 0.0 {
        0.0
    } else {
        (sum * sum) / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_empty_is_zero() {
        assert_eq!(percentile(&[], 0.99), 0.0);
    }

    #[test]
    fn percentile_uses_nearest_rank() {
        let sorted: Vec<f64> = (0..200).map(f64::from).collect();
        // floor(200 * 0.99) = 198
        assert_eq!(percentile(&sorted, 0.99), 198.0);

        let sorted: Vec<f64> = (0..10).map(f64::from).collect();
        // floor(9.9) = 9
        assert_eq!(percentile(&sorted, 0.99), 9.0);
    }

    #[test]
    fn percentile_rank_is_clamped() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(percentile(&sorted, 1.0), 3.0);
        assert_eq!(percentile(&[5.0], 0.99), 5.0);
    }

    #[test]
    fn jain_of_equal_shares_is_one() {
        assert_eq!(jain_index(&[4.0, 4.0, 4.0]), 1.0);
    }

    #[test]
    fn jain_of_single_winner_is_one_over_n() {
        let j = jain_index(&[10.0, 0.0, 0.0, 0.0]);
        assert!((j - 0.25).abs() < 1e-12);
    }

    #[test]
    fn jain_with_zero_denominator_is_zero() {
        assert_eq!(jain_index(&[]), 0.0);
        assert_eq!(jain_index(&[0.0, 0.0]), 0.0);
    }
}
