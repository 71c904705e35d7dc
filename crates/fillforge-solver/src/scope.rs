//! Fill-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use fillforge_core::{Amount, Item, Solution};

use crate::reconciler::Resolution;
use crate::statistics::{AmountImprovement, FillStatistics, FillStats};

/// Working state of one fill run.
///
/// Owns the remaining items, the in-progress bag (`current`) and the best
/// non-overshooting bag found so far (`best`). Remaining items are consumed
/// from the front through a cursor and never regrow.
pub struct FillScope<A: Amount> {
    ceiling: A,
    items: Vec<Item<A>>,
    cursor: usize,
    current: Solution<A>,
    best: Solution<A>,
    stats: FillStats,
    improvements: Vec<AmountImprovement<A>>,
    terminate_early_flag: Option<Arc<AtomicBool>>,
}

/// What happened to the item pulled by [`FillScope::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<A> {
    /// The item was appended to the working bag.
    Placed(Item<A>),
    /// The item alone exceeds the ceiling and was dropped.
    Discarded(Item<A>),
}

impl<A: Amount> FillScope<A> {
    /// Creates a scope over items already sorted by descending amount.
    pub fn new(items: Vec<Item<A>>, ceiling: A) -> Self {
        Self {
            ceiling,
            items,
            cursor: 0,
            current: Solution::empty(),
            best: Solution::empty(),
            stats: FillStats::default(),
            improvements: Vec::new(),
            terminate_early_flag: None,
        }
    }

    pub fn start_solving(&mut self) {
        self.stats.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    pub fn ceiling(&self) -> A {
        self.ceiling
    }

    /// Items not yet placed or discarded, largest first.
    pub fn remaining(&self) -> &[Item<A>] {
        &self.items[self.cursor..]
    }

    pub fn current(&self) -> &Solution<A> {
        &self.current
    }

    pub fn best(&self) -> &Solution<A> {
        &self.best
    }

    pub fn best_amount(&self) -> A {
        self.best.amount()
    }

    pub fn stats(&self) -> &FillStats {
        &self.stats
    }

    pub fn total_step_count(&self) -> u64 {
        self.stats.step_count
    }

    /// Returns true if the best bag fills the ceiling exactly.
    pub fn is_perfect(&self) -> bool {
        self.best.amount() == self.ceiling
    }

    /// Returns true if the working bag holds items and is over the ceiling.
    pub fn has_conflict(&self) -> bool {
        !self.current.is_empty() && self.current.exceeds(self.ceiling)
    }

    /// Pulls the largest remaining item and places or discards it.
    ///
    /// Returns None when no items remain.
    pub fn step(&mut self) -> Option<StepOutcome<A>> {
        let item = self.items.get(self.cursor)?.clone();
        self.cursor += 1;
        self.stats.record_step();

        if item.exceeds(self.ceiling) {
            self.stats.record_discarded();
            Some(StepOutcome::Discarded(item))
        } else {
            self.stats.record_placed();
            self.current.push(item.clone());
            Some(StepOutcome::Placed(item))
        }
    }

    /// Promotes the working bag to best if it is strictly better.
    ///
    /// Returns true if the best bag changed.
    pub fn update_best_solution(&mut self) -> bool {
        if !self.has_conflict() && self.current.amount() > self.best.amount() {
            self.best = self.current.clone();
            self.record_improvement();
            true
        } else {
            false
        }
    }

    /// Adopts a reconciled bag as both working and best bag.
    ///
    /// Drops every remaining item up to and including the resolution's
    /// column index.
    pub fn adopt_resolution(&mut self, resolution: Resolution<A>) {
        let consumed = (resolution.index + 1).min(self.remaining().len());
        self.cursor += consumed;
        self.best = resolution.solution.clone();
        self.current = resolution.solution;
        self.stats.record_reconciliation();
        self.record_improvement();
    }

    pub fn record_conflict(&mut self) {
        self.stats.record_conflict();
    }

    pub fn record_cells(&mut self, cells: u64) {
        self.stats.record_cells(cells);
    }

    fn record_improvement(&mut self) {
        self.improvements.push(AmountImprovement {
            time_offset: self.stats.elapsed(),
            step_count: self.stats.step_count,
            amount: self.best.amount(),
        });
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Panics if a solution invariant is violated.
    ///
    /// Checked after every step when the environment mode is `full_assert`.
    pub fn assert_invariants(&self) {
        assert!(
            self.best.is_consistent(),
            "best amount {} does not match its items ({})",
            self.best.amount(),
            self.best.recomputed_amount()
        );
        assert!(
            self.current.is_consistent(),
            "current amount {} does not match its items ({})",
            self.current.amount(),
            self.current.recomputed_amount()
        );
        assert!(
            self.best.is_empty() || !self.best.exceeds(self.ceiling),
            "best amount {} exceeds ceiling {}",
            self.best.amount(),
            self.ceiling
        );
        if let [.., previous, last] = self.improvements.as_slice() {
            assert!(
                previous.amount <= last.amount,
                "best amount decreased from {} to {}",
                previous.amount,
                last.amount
            );
        }
    }

    /// Consumes the scope and returns the best bag with its statistics.
    pub fn into_best(self) -> (Solution<A>, FillStatistics<A>) {
        let statistics = FillStatistics::from_stats(&self.stats, self.improvements);
        (self.best, statistics)
    }
}
