//! Reference instances with known results.
//!
//! # Example
//!
//! ```
//! use fillforge_test::scenario::{items_from_amounts, scenarios};
//!
//! let first = &scenarios()[0];
//! let items = items_from_amounts(&first.amounts);
//! assert_eq!(items.len(), 8);
//! assert_eq!(items[0].id(), "1");
//! ```

use fillforge_core::{Amount, Item};

/// An instance together with the result the filler is expected to reach.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub amounts: Vec<f64>,
    pub ceiling: f64,
    pub expected_amount: f64,
    pub expected_len: usize,
}

impl Scenario {
    fn new(
        name: &'static str,
        amounts: &[f64],
        ceiling: f64,
        expected_amount: f64,
        expected_len: usize,
    ) -> Self {
        Self {
            name,
            amounts: amounts.to_vec(),
            ceiling,
            expected_amount,
            expected_len,
        }
    }

    /// Returns the items, numbered from "1" in input order.
    pub fn items(&self) -> Vec<Item<f64>> {
        items_from_amounts(&self.amounts)
    }
}

/// Returns every reference scenario.
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "fractional_exact_fit",
            &[10.0, 4.0, 4.0, 2.0, 1.0, 0.80, 0.50, 0.49],
            9.99,
            9.99,
            5,
        ),
        Scenario::new(
            "swap_one_for_run",
            &[260.0, 210.0, 100.0, 90.0, 80.0],
            500.0,
            480.0,
            4,
        ),
        Scenario::new("empty_input", &[], 42.0, 0.0, 0),
        Scenario::new("all_oversized", &[100.0], 10.0, 0.0, 0),
        Scenario::new("single_exact_fit", &[10.0], 10.0, 10.0, 1),
    ]
}

/// Returns the scenario with the given name.
pub fn scenario(name: &str) -> Option<Scenario> {
    scenarios().into_iter().find(|s| s.name == name)
}

/// Builds items numbered "1", "2", ... in the given order.
pub fn items_from_amounts<A: Amount>(amounts: &[A]) -> Vec<Item<A>> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, &amount)| Item::new((i + 1).to_string(), amount))
        .collect()
}
