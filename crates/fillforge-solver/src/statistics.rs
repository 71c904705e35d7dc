//! Filler statistics collection and reporting.
//!
//! [`FillStats`] holds the live counters of a run. When the run ends they are
//! frozen into a [`FillStatistics`] together with the history of best-amount
//! improvements.

use std::time::{Duration, Instant};

use fillforge_core::Amount;

/// Live counters for a single fill run.
///
/// # Example
///
/// ```
/// use fillforge_solver::statistics::FillStats;
///
/// let mut stats = FillStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_placed();
/// stats.record_step();
/// stats.record_discarded();
///
/// assert_eq!(stats.step_count, 2);
/// assert_eq!(stats.items_placed, 1);
/// assert_eq!(stats.items_discarded, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FillStats {
    start_time: Option<Instant>,
    /// Items pulled from the remaining list.
    pub step_count: u64,
    /// Items appended to the working bag.
    pub items_placed: u64,
    /// Items discarded because they alone exceed the ceiling.
    pub items_discarded: u64,
    /// Overshoots handed to the reconciler.
    pub conflicts: u64,
    /// Overshoots resolved with an improving substitution.
    pub reconciliations: u64,
    /// Reconciliation table cells evaluated.
    pub cells_evaluated: u64,
}

impl FillStats {
    /// Marks the start of filling.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since filling started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    pub fn record_placed(&mut self) {
        self.items_placed += 1;
    }

    pub fn record_discarded(&mut self) {
        self.items_discarded += 1;
    }

    pub fn record_conflict(&mut self) {
        self.conflicts += 1;
    }

    pub fn record_reconciliation(&mut self) {
        self.reconciliations += 1;
    }

    pub fn record_cells(&mut self, cells: u64) {
        self.cells_evaluated += cells;
    }
}

/// Record of a best-amount improvement.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountImprovement<A> {
    /// Time since filling started when the improvement occurred.
    pub time_offset: Duration,
    /// Step number when the improvement occurred.
    pub step_count: u64,
    /// The new best amount.
    pub amount: A,
}

/// Complete statistics for a fill run.
#[derive(Debug, Clone)]
pub struct FillStatistics<A> {
    /// Total time spent filling.
    pub total_duration: Duration,
    /// Items pulled from the remaining list.
    pub step_count: u64,
    /// Items appended to the working bag.
    pub items_placed: u64,
    /// Items discarded as oversized.
    pub items_discarded: u64,
    /// Overshoots handed to the reconciler.
    pub conflicts: u64,
    /// Overshoots resolved with an improving substitution.
    pub reconciliations: u64,
    /// Reconciliation table cells evaluated.
    pub cells_evaluated: u64,
    /// History of best-amount improvements, in order.
    pub improvements: Vec<AmountImprovement<A>>,
}

impl<A: Amount> FillStatistics<A> {
    /// Freezes live counters and an improvement history.
    pub fn from_stats(stats: &FillStats, improvements: Vec<AmountImprovement<A>>) -> Self {
        Self {
            total_duration: stats.elapsed(),
            step_count: stats.step_count,
            items_placed: stats.items_placed,
            items_discarded: stats.items_discarded,
            conflicts: stats.conflicts,
            reconciliations: stats.reconciliations,
            cells_evaluated: stats.cells_evaluated,
            improvements,
        }
    }

    /// Returns the best amount reached (last improvement, or None).
    pub fn best_amount(&self) -> Option<A> {
        self.improvements.last().map(|i| i.amount)
    }

    /// Returns the number of improvements recorded.
    pub fn improvement_count(&self) -> usize {
        self.improvements.len()
    }

    /// Returns reconciled conflicts / total conflicts.
    pub fn reconciliation_rate(&self) -> f64 {
        if self.conflicts == 0 {
            0.0
        } else {
            self.reconciliations as f64 / self.conflicts as f64
        }
    }

    /// Returns true if the improvement history never decreases.
    pub fn is_monotonic(&self) -> bool {
        self.improvements
            .windows(2)
            .all(|w| w[0].amount <= w[1].amount)
    }
}

impl<A> Default for FillStatistics<A> {
    fn default() -> Self {
        Self {
            total_duration: Duration::ZERO,
            step_count: 0,
            items_placed: 0,
            items_discarded: 0,
            conflicts: 0,
            reconciliations: 0,
            cells_evaluated: 0,
            improvements: Vec::new(),
        }
    }
}
