//! FillForge - fill a ceiling as closely as possible without going over
//!
//! Zero-wiring API: hand over the items and the ceiling, get the best bag.
//!
//! # Example
//!
//! ```rust
//! use fillforge::prelude::*;
//!
//! let items = vec![
//!     Item::new("1", 260.0),
//!     Item::new("2", 210.0),
//!     Item::new("3", 100.0),
//!     Item::new("4", 90.0),
//!     Item::new("5", 80.0),
//! ];
//!
//! let best = fillforge::solve(items, 500.0).unwrap();
//! assert_eq!(best.amount(), 480.0);
//! ```

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::{solve, solve_with_config, CONFIG_FILE};

pub use fillforge_config::{ConfigError, EnvironmentMode, FillerConfig, TerminationConfig, TieBreak};
pub use fillforge_core::{Amount, FillForgeError, Item, Result, Solution};
pub use fillforge_solver::{
    Allocator, CountingEventListener, FillEventListener, FillResult, FillStatistics,
    LoggingEventListener, TerminationHandle, TerminationReason,
};

pub mod termination {
    pub use fillforge_solver::termination::*;
}

pub mod prelude {
    pub use super::{solve, solve_with_config};
    pub use super::{Allocator, FillResult, TerminationReason};
    pub use super::{Amount, FillForgeError, Item, Solution};
    pub use super::{FillerConfig, TieBreak};
}
