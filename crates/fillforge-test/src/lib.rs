//! Shared test fixtures for FillForge crates.
//!
//! - [`scenario`] - reference instances with known results
//! - [`random`] - seeded random instances for property checks
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! fillforge-test = { workspace = true }
//! ```

pub mod random;
pub mod scenario;

pub use random::{random_float_instance, random_instance, RandomInstance};
pub use scenario::{items_from_amounts, scenarios, Scenario};

use fillforge_core::{Amount, Solution};

/// Panics unless `solution` is a valid answer for `ceiling`: the cached
/// total matches its items and it does not overshoot.
pub fn assert_solution_valid<A: Amount>(solution: &Solution<A>, ceiling: A) {
    assert!(
        solution.is_consistent(),
        "cached amount {} differs from item sum {}",
        solution.amount(),
        solution.recomputed_amount()
    );
    assert!(
        solution.is_empty() || !solution.exceeds(ceiling),
        "amount {} exceeds ceiling {}",
        solution.amount(),
        ceiling
    );
}

/// Panics if any item id occurs twice in `solution`.
pub fn assert_no_duplicates<A: Amount>(solution: &Solution<A>) {
    let mut ids: Vec<&str> = solution.ids().collect();
    ids.sort_unstable();
    let before = ids.len();
    ids.dedup();
    assert_eq!(before, ids.len(), "duplicate item in {}", solution);
}
