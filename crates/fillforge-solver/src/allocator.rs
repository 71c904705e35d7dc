//! Greedy largest-first filler.
//!
//! The [`Allocator`] pulls items in descending order and appends them to a
//! working bag. Items larger than the ceiling on their own are discarded.
//! When the bag overshoots, the [`Reconciler`] looks for a replacement bag;
//! an improving replacement becomes both the working and the best bag and
//! filling resumes with the items it did not consume. Without an improvement
//! the run ends with the best bag found so far.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use fillforge_config::{FillerConfig, TieBreak};
use fillforge_core::{Amount, FillForgeError, Item, Result, Solution};
use tracing::{debug, info, trace};

use crate::builder::{ConfiguredTermination, TerminationBuilder};
use crate::event::{FillEventListener, FillEventSupport};
use crate::ordering::sort_descending;
use crate::reconciler::Reconciler;
use crate::result::{FillResult, TerminationReason};
use crate::scope::{FillScope, StepOutcome};
use crate::termination::{NoTermination, Termination, TerminationHandle};

/// Fills a ceiling from a list of items.
///
/// A run consumes the allocator; construct a new one for every query.
///
/// The filler is a heuristic, not an exact subset-sum search. It can stop
/// below the ceiling even when some subset of the items fills it exactly:
/// for `[27, 24, 23, 22, 21, 14, 13, 2]` and ceiling 37 it returns 27,
/// although 23 + 14 = 37.
///
/// # Example
///
/// ```
/// use fillforge_core::Item;
/// use fillforge_solver::{Allocator, TerminationReason};
///
/// let items = vec![
///     Item::new("1", 10.0),
///     Item::new("2", 4.0),
///     Item::new("3", 4.0),
///     Item::new("4", 2.0),
///     Item::new("5", 1.0),
///     Item::new("6", 0.80),
///     Item::new("7", 0.50),
///     Item::new("8", 0.49),
/// ];
///
/// let result = Allocator::new(items, 9.99).unwrap().solve();
/// assert_eq!(result.amount(), 9.99);
/// assert_eq!(result.solution.len(), 5);
/// assert!(result.is_perfect());
/// assert_eq!(result.reason, TerminationReason::Perfect);
/// ```
#[derive(Debug)]
pub struct Allocator<A: Amount, T = NoTermination> {
    items: Vec<Item<A>>,
    ceiling: A,
    termination: T,
    terminate_early_flag: Arc<AtomicBool>,
    assert_invariants: bool,
    events: FillEventSupport<A>,
}

impl<A: Amount> Allocator<A, NoTermination> {
    /// Creates an allocator; equal amounts keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`FillForgeError::InvalidAmount`] for the first negative or
    /// NaN item amount and [`FillForgeError::InvalidCeiling`] for a NaN
    /// ceiling.
    pub fn new(items: Vec<Item<A>>, ceiling: A) -> Result<Self> {
        Self::with_tie_break(items, ceiling, TieBreak::InputOrder)
    }

    /// Creates an allocator with an explicit tie-break for equal amounts.
    pub fn with_tie_break(mut items: Vec<Item<A>>, ceiling: A, tie_break: TieBreak) -> Result<Self> {
        if !ceiling.is_comparable() {
            return Err(FillForgeError::InvalidCeiling(ceiling.to_string()));
        }
        for item in &items {
            item.validate()?;
        }
        sort_descending(&mut items, tie_break);

        Ok(Self {
            items,
            ceiling,
            termination: NoTermination,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            assert_invariants: false,
            events: FillEventSupport::new(),
        })
    }

    /// Creates an allocator wired from configuration: tie-break,
    /// termination limits and invariant checking.
    pub fn from_config(
        items: Vec<Item<A>>,
        ceiling: A,
        config: &FillerConfig,
    ) -> Result<Allocator<A, ConfiguredTermination<A>>> {
        let termination = TerminationBuilder::build(config.termination.as_ref())?;
        Ok(Self::with_tie_break(items, ceiling, config.tie_break)?
            .with_termination(termination)
            .with_invariant_checks(config.is_asserting()))
    }
}

impl<A: Amount, T: Termination<A>> Allocator<A, T> {
    /// Replaces the termination condition.
    pub fn with_termination<T2: Termination<A>>(self, termination: T2) -> Allocator<A, T2> {
        Allocator {
            items: self.items,
            ceiling: self.ceiling,
            termination,
            terminate_early_flag: self.terminate_early_flag,
            assert_invariants: self.assert_invariants,
            events: self.events,
        }
    }

    /// Registers an event listener.
    pub fn with_listener(mut self, listener: Arc<dyn FillEventListener<A>>) -> Self {
        self.events.add_listener(listener);
        self
    }

    /// Enables invariant checks after every step.
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.assert_invariants = enabled;
        self
    }

    /// Returns a handle that stops the run from another thread.
    pub fn termination_handle(&self) -> TerminationHandle {
        TerminationHandle::new(Arc::clone(&self.terminate_early_flag))
    }

    /// Returns the items in the order they will be consumed.
    pub fn items(&self) -> &[Item<A>] {
        &self.items
    }

    pub fn ceiling(&self) -> A {
        self.ceiling
    }

    /// Runs the filler and returns the best bag.
    pub fn run(self) -> Solution<A> {
        self.solve().into_solution()
    }

    /// Runs the filler and returns the best bag with run details.
    pub fn solve(self) -> FillResult<A> {
        let Allocator {
            items,
            ceiling,
            termination,
            terminate_early_flag,
            assert_invariants,
            events,
        } = self;

        let item_count = items.len();
        let mut scope = FillScope::new(items, ceiling);
        scope.set_terminate_early_flag(terminate_early_flag);
        scope.start_solving();

        info!(event = "solve_start", item_count, ceiling = %ceiling);
        events.fire_solving_started(item_count, ceiling);

        let reason = loop {
            if scope.is_perfect() {
                break TerminationReason::Perfect;
            }

            if scope.has_conflict() {
                scope.record_conflict();
                let remaining = scope.remaining().len();
                debug!(
                    event = "conflict",
                    step = scope.total_step_count(),
                    amount = %scope.current().amount(),
                    remaining,
                );
                events.fire_conflict(scope.current(), remaining);

                let reconciliation = Reconciler::new(scope.remaining(), scope.current(), ceiling)
                    .resolve(|| scope.is_terminate_early() || termination.is_terminated(&scope));
                scope.record_cells(reconciliation.cells_evaluated);

                let best_amount = scope.best_amount();
                match reconciliation.resolution {
                    Some(resolution) if resolution.solution.amount() > best_amount => {
                        debug!(
                            event = "reconciled",
                            amount = %resolution.solution.amount(),
                            consumed = resolution.index + 1,
                            cells = reconciliation.cells_evaluated,
                        );
                        events.fire_reconciled(&resolution);
                        scope.adopt_resolution(resolution);
                        events.fire_best_solution_changed(scope.best());
                        if assert_invariants {
                            scope.assert_invariants();
                        }
                        continue;
                    }
                    _ if reconciliation.interrupted => break TerminationReason::Terminated,
                    _ => {
                        debug!(
                            event = "unreconcilable",
                            cells = reconciliation.cells_evaluated,
                        );
                        break TerminationReason::Unreconcilable;
                    }
                }
            }

            if scope.update_best_solution() {
                events.fire_best_solution_changed(scope.best());
            }
            if assert_invariants {
                scope.assert_invariants();
            }
            if scope.remaining().is_empty() {
                break TerminationReason::Exhausted;
            }
            if scope.is_terminate_early() || termination.is_terminated(&scope) {
                break TerminationReason::Terminated;
            }

            match scope.step() {
                None => break TerminationReason::Exhausted,
                Some(StepOutcome::Placed(item)) => {
                    trace!(event = "place", id = item.id(), amount = %item.amount());
                }
                Some(StepOutcome::Discarded(item)) => {
                    trace!(event = "discard", id = item.id(), amount = %item.amount());
                }
            }
        };

        if assert_invariants {
            scope.assert_invariants();
        }
        let (solution, statistics) = scope.into_best();

        info!(
            event = "solve_end",
            amount = %solution.amount(),
            items = solution.len(),
            reason = %reason,
            steps = statistics.step_count,
            conflicts = statistics.conflicts,
            reconciliations = statistics.reconciliations,
            duration_ms = statistics.total_duration.as_millis() as u64,
        );
        events.fire_solving_ended(&solution, reason == TerminationReason::Terminated);

        FillResult {
            solution,
            ceiling,
            reason,
            statistics,
        }
    }
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;
