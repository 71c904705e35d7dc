//! Benchmark result types.

use std::cmp::Ordering;
use std::time::Duration;

use fillforge_core::Amount;
use fillforge_solver::{AmountImprovement, FillResult, TerminationReason};

/// Result of a single benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkRun<A> {
    /// Run index (0-based).
    pub run_index: usize,
    /// Total solve time.
    pub solve_time: Duration,
    /// Amount of the best bag.
    pub final_amount: A,
    /// Number of items in the best bag.
    pub item_count: usize,
    /// Why the run stopped.
    pub reason: TerminationReason,
    /// Best-amount progression over time.
    pub amount_history: Vec<AmountImprovement<A>>,
    /// Items pulled from the remaining list.
    pub steps: u64,
    /// Overshoots handed to the reconciler.
    pub conflicts: u64,
    /// Reconciliation table cells evaluated.
    pub cells_evaluated: u64,
}

impl<A: Amount> BenchmarkRun<A> {
    /// Creates a benchmark run from a fill result.
    ///
    /// # Example
    ///
    /// ```
    /// use fillforge_benchmark::BenchmarkRun;
    /// use fillforge_core::Item;
    /// use fillforge_solver::Allocator;
    ///
    /// let fill = Allocator::new(vec![Item::new("a", 4), Item::new("b", 3)], 10)
    ///     .unwrap()
    ///     .solve();
    /// let run = BenchmarkRun::from_result(0, fill);
    /// assert_eq!(run.final_amount, 7);
    /// assert_eq!(run.item_count, 2);
    /// ```
    pub fn from_result(run_index: usize, result: FillResult<A>) -> Self {
        let statistics = result.statistics;
        Self {
            run_index,
            solve_time: statistics.total_duration,
            final_amount: result.solution.amount(),
            item_count: result.solution.len(),
            reason: result.reason,
            amount_history: statistics.improvements,
            steps: statistics.step_count,
            conflicts: statistics.conflicts,
            cells_evaluated: statistics.cells_evaluated,
        }
    }

    /// Returns reconciliation cells evaluated per second.
    pub fn cells_per_second(&self) -> f64 {
        if self.solve_time.is_zero() {
            0.0
        } else {
            self.cells_evaluated as f64 / self.solve_time.as_secs_f64()
        }
    }

    pub fn terminated_early(&self) -> bool {
        self.reason == TerminationReason::Terminated
    }
}

/// Aggregated results from multiple benchmark runs.
#[derive(Debug, Clone)]
pub struct BenchmarkResult<A> {
    /// Benchmark name.
    pub name: String,
    /// Filler configuration name.
    pub solver_name: String,
    /// Problem instance name.
    pub problem_name: String,
    /// Individual runs.
    pub runs: Vec<BenchmarkRun<A>>,
}

impl<A: Amount> BenchmarkResult<A> {
    pub fn new(
        name: impl Into<String>,
        solver_name: impl Into<String>,
        problem_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            solver_name: solver_name.into(),
            problem_name: problem_name.into(),
            runs: Vec::new(),
        }
    }

    pub fn add_run(&mut self, run: BenchmarkRun<A>) {
        self.runs.push(run);
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the highest final amount across all runs.
    pub fn best_amount(&self) -> Option<A> {
        self.runs
            .iter()
            .map(|r| r.final_amount)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Returns the lowest final amount across all runs.
    pub fn worst_amount(&self) -> Option<A> {
        self.runs
            .iter()
            .map(|r| r.final_amount)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Returns the number of runs that stopped early.
    pub fn terminated_count(&self) -> usize {
        self.runs.iter().filter(|r| r.terminated_early()).count()
    }

    /// Returns the average solve time.
    ///
    /// # Example
    ///
    /// ```
    /// use fillforge_benchmark::{BenchmarkResult, BenchmarkRun};
    /// use fillforge_solver::TerminationReason;
    /// use std::time::Duration;
    ///
    /// let run = |run_index, millis| BenchmarkRun {
    ///     run_index,
    ///     solve_time: Duration::from_millis(millis),
    ///     final_amount: 480,
    ///     item_count: 4,
    ///     reason: TerminationReason::Exhausted,
    ///     amount_history: vec![],
    ///     steps: 3,
    ///     conflicts: 1,
    ///     cells_evaluated: 5,
    /// };
    ///
    /// let mut result = BenchmarkResult::new("Test", "default", "swap");
    /// result.add_run(run(0, 100));
    /// result.add_run(run(1, 200));
    ///
    /// assert_eq!(result.avg_solve_time(), Duration::from_millis(150));
    /// assert_eq!(result.best_amount(), Some(480));
    /// ```
    pub fn avg_solve_time(&self) -> Duration {
        if self.runs.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.runs.iter().map(|r| r.solve_time).sum();
        total / self.runs.len() as u32
    }

    pub fn min_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    pub fn max_solve_time(&self) -> Duration {
        self.runs
            .iter()
            .map(|r| r.solve_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the average reconciliation cells per second.
    pub fn avg_cells_per_second(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        let total: f64 = self.runs.iter().map(|r| r.cells_per_second()).sum();
        total / self.runs.len() as f64
    }
}
