use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::boost::BoostCalculator;
use crate::draw::DrawSource;
use crate::predictor::BurstPredictor;
use crate::task::Task;
use crate::{Result, SimError, NICE_0_LOAD};

/// Scheduling discipline driving virtual-time accounting.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingMode {
    /// Plain weighted virtual time, boost fixed at 1.0.
    #[display("baseline")]
    Baseline,
    /// Virtual time divided by the graph-burst boost.
    #[display("graph_burst")]
    GraphBurst,
}

/// What a single scheduling step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Index of the dispatched task in the task set.
    pub task: usize,
    /// Virtual runtime of the task before it was charged.
    pub vruntime_before: f64,
    pub actual_exec: f64,
    pub boost: f64,
    /// Virtual time actually charged, after dividing by the boost.
    pub vruntime_delta: f64,
}

/// Minimum-virtual-runtime scheduler over a fixed task set.
///
/// ```plaintext
/// select min vruntime ──▶ draw burst ──▶ [graph_burst: predict ──▶ boost]
///        ▲                                              │
///        └──── record burst ◀── vruntime += exec·1024/load/boost
/// ```
#[derive(Debug)]
pub struct Scheduler<D> {
    tasks: Vec<Task>,
    mode: SchedulingMode,
    draw: D,
    predictor: BurstPredictor,
    boost: BoostCalculator,
    steps: u64,
}

impl<D: DrawSource> Scheduler<D> {
    pub fn new(tasks: Vec<Task>, mode: SchedulingMode, draw: D) -> Result<Self, SimError> {
        if tasks.is_empty() {
            return Err(error_stack::report!(SimError::EmptyTaskSet));
        }
        Ok(Self {
            tasks,
            mode,
            draw,
            predictor: BurstPredictor::default(),
            boost: BoostCalculator::default(),
            steps: 0,
        })
    }

    /// Replace the default predictor and boost models.
    pub fn with_models(mut self, predictor: BurstPredictor, boost: BoostCalculator) -> Self {
        self.predictor = predictor;
        self.boost = boost;
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    /// Steps executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Index of the task with the lowest virtual runtime.
    ///
    /// Ties go to the task that comes first in the set.
    pub fn select(&self) -> usize {
        let mut best = 0;
        for (idx, task) in self.tasks.iter().enumerate().skip(1) {
            if task.vruntime() < self.tasks[best].vruntime() {
                best = idx;
            }
        }
        best
    }

    /// Dispatch one task and charge it for the burst it ran.
    pub fn step(&mut self) -> StepOutcome {
        let current = self.select();
        let (low, high) = self.tasks[current].burst().exec_range();
        let actual_exec = self.draw.draw_uniform(low, high);

        let boost = match self.mode {
            SchedulingMode::Baseline => 1.0,
            SchedulingMode::GraphBurst => {
                let task = &mut self.tasks[current];
                let burst_pred = self.predictor.update(task.burst_pred(), actual_exec);
                task.set_burst_pred(burst_pred);
                self.boost.compute(&self.tasks, current)
            }
        };

        let task = &mut self.tasks[current];
        let vruntime_before = task.vruntime();
        let increment = actual_exec * (NICE_0_LOAD / task.load());
        let vruntime_delta = increment / boost;
        task.charge(vruntime_delta, actual_exec);
        self.steps += 1;

        tracing::trace!(
            step = self.steps,
            task = task.name(),
            mode = %self.mode,
            actual_exec = actual_exec,
            boost = boost,
            vruntime = task.vruntime(),
            "Dispatched task"
        );

        StepOutcome {
            task: current,
            vruntime_before,
            actual_exec,
            boost,
            vruntime_delta,
        }
    }

    /// Execute `n_steps` consecutive steps.
    pub fn run(&mut self, n_steps: u64) {
        for _ in 0..n_steps {
            self.step();
        }
        tracing::debug!(
            mode = %self.mode,
            steps = self.steps,
            tasks = self.tasks.len(),
            "Scheduler run finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::SequenceDraw;
    use crate::task::BurstProfile;

    fn batch_pair() -> Vec<Task> {
        vec![
            Task::new("task-1", 20, 1024.0, BurstProfile::Batch).unwrap(),
            Task::new("task-2", 20, 4096.0, BurstProfile::Batch).unwrap(),
        ]
    }

    #[test]
    fn empty_task_set_is_rejected() {
        let draw = SequenceDraw::new([1.0]).unwrap();
        let err = Scheduler::new(Vec::new(), SchedulingMode::Baseline, draw).unwrap_err();
        assert_eq!(err.current_context(), &SimError::EmptyTaskSet);
    }

    #[test]
    fn single_step_charges_first_tied_task() {
        let draw = SequenceDraw::new([15.0]).unwrap();
        let mut scheduler = Scheduler::new(batch_pair(), SchedulingMode::Baseline, draw).unwrap();

        let outcome = scheduler.step();

        assert_eq!(outcome.task, 0);
        assert_eq!(outcome.boost, 1.0);
        let tasks = scheduler.tasks();
        assert_eq!(tasks[0].vruntime(), 15.0);
        assert_eq!(tasks[0].processed(), 15.0);
        assert_eq!(tasks[1].vruntime(), 0.0);
        assert_eq!(tasks[1].processed(), 0.0);
    }

    #[test]
    fn heavier_task_is_charged_less_virtual_time() {
        let draw = SequenceDraw::new([15.0]).unwrap();
        let mut scheduler = Scheduler::new(batch_pair(), SchedulingMode::Baseline, draw).unwrap();

        scheduler.step();
        let second = scheduler.step();

        assert_eq!(second.task, 1);
        assert_eq!(second.vruntime_delta, 15.0 * 1024.0 / 4096.0);
    }

    #[test]
    fn baseline_never_touches_burst_prediction() {
        let draw = SequenceDraw::new([12.0, 18.0, 11.0]).unwrap();
        let mut scheduler = Scheduler::new(batch_pair(), SchedulingMode::Baseline, draw).unwrap();

        scheduler.run(50);

        assert!(scheduler.tasks().iter().all(|t| t.burst_pred() == 2.0));
        assert_eq!(scheduler.steps(), 50);
    }

    #[test]
    fn graph_burst_updates_prediction_before_boosting() {
        let draw = SequenceDraw::new([15.0]).unwrap();
        let mut scheduler =
            Scheduler::new(batch_pair(), SchedulingMode::GraphBurst, draw).unwrap();

        let outcome = scheduler.step();

        let task = &scheduler.tasks()[0];
        assert_eq!(task.burst_pred(), 2.0 * 0.8 + 15.0 * 0.2);
        // task-1 is light against a heavy sibling, so the boost is floored
        assert_eq!(outcome.boost, 1.0);
        assert_eq!(task.vruntime(), 15.0);

        let outcome = scheduler.step();
        assert_eq!(outcome.task, 1);
        assert_eq!(outcome.boost, 4.5);
        assert_eq!(outcome.vruntime_delta, 15.0 * 0.25 / 4.5);
    }

    #[test]
    fn boosted_task_is_selected_more_often() {
        let tasks = || {
            vec![
                Task::new("light", 20, 1024.0, BurstProfile::Batch).unwrap(),
                Task::new("heavy", 20, 4096.0, BurstProfile::Batch).unwrap(),
            ]
        };
        let count_heavy = |mode| {
            let draw = SequenceDraw::new([15.0]).unwrap();
            let mut scheduler = Scheduler::new(tasks(), mode, draw).unwrap();
            (0..400).filter(|_| scheduler.step().task == 1).count()
        };

        assert!(count_heavy(SchedulingMode::GraphBurst) > count_heavy(SchedulingMode::Baseline));
    }

    #[test]
    fn saturated_loads_do_not_poison_vruntime() {
        let tasks = vec![
            Task::new("huge", 0, 1e306, BurstProfile::Batch).unwrap(),
            Task::new("max-a", 0, 1e308, BurstProfile::Batch).unwrap(),
            Task::new("max-b", 0, 1e308, BurstProfile::Batch).unwrap(),
        ];
        let draw = SequenceDraw::new([15.0]).unwrap();
        let mut scheduler = Scheduler::new(tasks, SchedulingMode::GraphBurst, draw).unwrap();

        for _ in 0..30 {
            let outcome = scheduler.step();
            assert!((1.0..=4.5).contains(&outcome.boost));
            assert!(outcome.vruntime_delta >= 0.0);
        }
        assert!(scheduler.tasks().iter().all(|t| t.vruntime().is_finite()));
    }

    #[test]
    fn custom_models_replace_defaults() {
        let flat = BoostCalculator::new(crate::BoostConfig {
            min_boost: 1.0,
            max_boost: 1.0,
            ..crate::BoostConfig::default()
        })
        .unwrap();
        let draw = SequenceDraw::new([15.0]).unwrap();
        let mut scheduler = Scheduler::new(batch_pair(), SchedulingMode::GraphBurst, draw)
            .unwrap()
            .with_models(BurstPredictor::default(), flat);

        scheduler.step();
        let outcome = scheduler.step();

        assert_eq!(outcome.task, 1);
        assert_eq!(outcome.boost, 1.0);
        assert_eq!(outcome.vruntime_delta, 15.0 * 0.25);
    }

    #[test]
    fn mode_names() {
        assert_eq!(SchedulingMode::Baseline.to_string(), "baseline");
        assert_eq!(SchedulingMode::GraphBurst.to_string(), "graph_burst");
    }
}
