//! Event system for filler monitoring.
//!
//! Listeners registered on an [`Allocator`](crate::Allocator) are notified
//! synchronously, in registration order, about the run lifecycle, every
//! improvement of the best bag, and every overshoot handed to the
//! reconciler.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use fillforge_core::{Item, Solution};
//! use fillforge_solver::{Allocator, CountingEventListener, FillEventListener};
//!
//! #[derive(Debug)]
//! struct PrintListener;
//! impl FillEventListener<i64> for PrintListener {
//!     fn on_best_solution_changed(&self, solution: &Solution<i64>) {
//!         println!("New best: {}", solution.amount());
//!     }
//! }
//!
//! let counter = Arc::new(CountingEventListener::new());
//! let items = vec![Item::new("a", 6_i64), Item::new("b", 3)];
//! let best = Allocator::new(items, 10)
//!     .unwrap()
//!     .with_listener(Arc::new(PrintListener))
//!     .with_listener(counter.clone())
//!     .run();
//!
//! assert_eq!(best.amount(), 9);
//! assert_eq!(counter.best_solution_count(), 2);
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fillforge_core::{Amount, Solution};
use tracing::{debug, info};

use crate::reconciler::Resolution;

/// Listener for filler events.
pub trait FillEventListener<A: Amount>: Send + Sync + Debug {
    /// Called when the best bag strictly improves.
    fn on_best_solution_changed(&self, solution: &Solution<A>);

    /// Called once before the first step.
    fn on_solving_started(&self, _item_count: usize, _ceiling: A) {}

    /// Called when the working bag overshoots the ceiling.
    ///
    /// `remaining` is the number of outside items available to the
    /// reconciler.
    fn on_conflict(&self, _conflict: &Solution<A>, _remaining: usize) {}

    /// Called when a reconciliation is adopted.
    fn on_reconciled(&self, _resolution: &Resolution<A>) {}

    /// Called once with the final best bag.
    fn on_solving_ended(&self, _solution: &Solution<A>, _is_terminated_early: bool) {}
}

/// Central event broadcaster for filler events.
pub struct FillEventSupport<A: Amount> {
    listeners: Vec<Arc<dyn FillEventListener<A>>>,
}

impl<A: Amount> FillEventSupport<A> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Arc<dyn FillEventListener<A>>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn fire_best_solution_changed(&self, solution: &Solution<A>) {
        for listener in &self.listeners {
            listener.on_best_solution_changed(solution);
        }
    }

    pub fn fire_solving_started(&self, item_count: usize, ceiling: A) {
        for listener in &self.listeners {
            listener.on_solving_started(item_count, ceiling);
        }
    }

    pub fn fire_conflict(&self, conflict: &Solution<A>, remaining: usize) {
        for listener in &self.listeners {
            listener.on_conflict(conflict, remaining);
        }
    }

    pub fn fire_reconciled(&self, resolution: &Resolution<A>) {
        for listener in &self.listeners {
            listener.on_reconciled(resolution);
        }
    }

    pub fn fire_solving_ended(&self, solution: &Solution<A>, is_terminated_early: bool) {
        for listener in &self.listeners {
            listener.on_solving_ended(solution, is_terminated_early);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl<A: Amount> Default for FillEventSupport<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Amount> Debug for FillEventSupport<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FillEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Emits every event as a `tracing` event.
#[derive(Debug, Clone, Default)]
pub struct LoggingEventListener {
    prefix: String,
}

impl LoggingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logging listener with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl<A: Amount> FillEventListener<A> for LoggingEventListener {
    fn on_best_solution_changed(&self, solution: &Solution<A>) {
        info!(
            prefix = %self.prefix,
            amount = %solution.amount(),
            items = solution.len(),
            "New best solution"
        );
    }

    fn on_solving_started(&self, item_count: usize, ceiling: A) {
        info!(prefix = %self.prefix, item_count, ceiling = %ceiling, "Solving started");
    }

    fn on_conflict(&self, conflict: &Solution<A>, remaining: usize) {
        debug!(
            prefix = %self.prefix,
            amount = %conflict.amount(),
            remaining,
            "Overshoot"
        );
    }

    fn on_reconciled(&self, resolution: &Resolution<A>) {
        debug!(
            prefix = %self.prefix,
            amount = %resolution.solution.amount(),
            consumed = resolution.index + 1,
            "Reconciled"
        );
    }

    fn on_solving_ended(&self, solution: &Solution<A>, is_terminated_early: bool) {
        info!(
            prefix = %self.prefix,
            amount = %solution.amount(),
            terminated_early = is_terminated_early,
            "Solving ended"
        );
    }
}

/// Counts event occurrences.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    best_solution_count: AtomicUsize,
    solving_started_count: AtomicUsize,
    solving_ended_count: AtomicUsize,
    conflict_count: AtomicUsize,
    reconciled_count: AtomicUsize,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best_solution_count(&self) -> usize {
        self.best_solution_count.load(Ordering::SeqCst)
    }

    pub fn solving_started_count(&self) -> usize {
        self.solving_started_count.load(Ordering::SeqCst)
    }

    pub fn solving_ended_count(&self) -> usize {
        self.solving_ended_count.load(Ordering::SeqCst)
    }

    pub fn conflict_count(&self) -> usize {
        self.conflict_count.load(Ordering::SeqCst)
    }

    pub fn reconciled_count(&self) -> usize {
        self.reconciled_count.load(Ordering::SeqCst)
    }

    /// Resets all counters to zero.
    pub fn reset(&self) {
        self.best_solution_count.store(0, Ordering::SeqCst);
        self.solving_started_count.store(0, Ordering::SeqCst);
        self.solving_ended_count.store(0, Ordering::SeqCst);
        self.conflict_count.store(0, Ordering::SeqCst);
        self.reconciled_count.store(0, Ordering::SeqCst);
    }
}

impl<A: Amount> FillEventListener<A> for CountingEventListener {
    fn on_best_solution_changed(&self, _solution: &Solution<A>) {
        self.best_solution_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solving_started(&self, _item_count: usize, _ceiling: A) {
        self.solving_started_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_conflict(&self, _conflict: &Solution<A>, _remaining: usize) {
        self.conflict_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_reconciled(&self, _resolution: &Resolution<A>) {
        self.reconciled_count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_solving_ended(&self, _solution: &Solution<A>, _is_terminated_early: bool) {
        self.solving_ended_count.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
