//! FillForge Core - Core types for capacity filling
//!
//! This crate provides the fundamental abstractions for FillForge:
//! - Amount types for representing item sizes and ceilings
//! - Items, the immutable candidates offered to the filler
//! - Solutions, ordered item selections with a cached total

pub mod amount;
pub mod error;
pub mod item;
pub mod solution;

#[cfg(test)]
mod amount_tests;
#[cfg(test)]
mod solution_tests;

pub use amount::Amount;
pub use error::{FillForgeError, Result};
pub use item::Item;
pub use solution::Solution;
