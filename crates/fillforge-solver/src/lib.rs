//! FillForge Solver Engine
//!
//! This crate provides the capacity filler:
//! - Allocator: greedy largest-first filling with overshoot repair
//! - Reconciler: swap-one-for-a-run search that resolves an overshoot
//! - Item ordering with explicit tie-breaking
//! - Termination conditions and early cancellation
//! - Statistics and an event system for monitoring
//! - Configuration wiring (builder module)
//!
//! # Example
//!
//! ```
//! use fillforge_core::Item;
//! use fillforge_solver::Allocator;
//!
//! let items = vec![
//!     Item::new("1", 260.0),
//!     Item::new("2", 210.0),
//!     Item::new("3", 100.0),
//!     Item::new("4", 90.0),
//!     Item::new("5", 80.0),
//! ];
//!
//! let best = Allocator::new(items, 500.0).unwrap().run();
//! assert_eq!(best.amount(), 480.0);
//! assert_eq!(best.len(), 4);
//! ```

pub mod allocator;
pub mod builder;
pub mod event;
pub mod ordering;
pub mod reconciler;
pub mod result;
pub mod scope;
pub mod statistics;
pub mod termination;

pub use allocator::Allocator;
pub use builder::{ConfiguredTermination, TerminationBuilder};
pub use event::{CountingEventListener, FillEventListener, FillEventSupport, LoggingEventListener};
pub use ordering::{is_sorted_descending, sort_descending};
pub use reconciler::{Reconciler, Reconciliation, Resolution};
pub use result::{FillResult, TerminationReason};
pub use scope::{FillScope, StepOutcome};
pub use statistics::{AmountImprovement, FillStatistics, FillStats};
pub use termination::{
    AndTermination, BestAmountTermination, ExternalTermination, NoTermination, OrTermination,
    StepCountTermination, Termination, TerminationHandle, TimeTermination,
};
