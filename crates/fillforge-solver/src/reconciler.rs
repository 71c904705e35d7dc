//! Overshoot repair.
//!
//! When the working bag overshoots the ceiling, the [`Reconciler`] searches
//! for a replacement: drop exactly one bagged item (row `y`) and append the
//! leading run `0..=x` of the outside items (column `x`). Rows are scanned in
//! order, columns left to right. The first cell that hits the ceiling exactly
//! wins; otherwise the highest non-overshooting cell is kept.
//!
//! Outside items are non-negative and appended cumulatively, so once a row
//! overshoots no later column of that row can fit. The scan moves on to the
//! next row at the first overshoot.

use fillforge_core::{Amount, Item, Solution};
use tracing::trace;

/// A repaired bag and the last outside column it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<A> {
    /// Non-overshooting replacement for the conflicting bag.
    pub solution: Solution<A>,
    /// Index of the last outside item appended. Outside items `0..=index`
    /// are consumed by adopting this resolution.
    pub index: usize,
}

/// Result of one table search.
#[derive(Debug, Clone)]
pub struct Reconciliation<A> {
    /// Best candidate found, if any beat the empty bag.
    pub resolution: Option<Resolution<A>>,
    /// Number of table cells evaluated.
    pub cells_evaluated: u64,
    /// True if the search was stopped before the table was exhausted.
    pub interrupted: bool,
}

impl<A> Reconciliation<A> {
    /// Returns true if the search found an exact fit.
    pub fn is_exact(&self, ceiling: A) -> bool
    where
        A: Amount,
    {
        self.resolution
            .as_ref()
            .is_some_and(|r| r.solution.amount() == ceiling)
    }
}

/// Searches the drop-one, append-a-run table for an overshooting bag.
///
/// # Example
///
/// ```
/// use fillforge_core::{Item, Solution};
/// use fillforge_solver::Reconciler;
///
/// let conflict = Solution::from_items(vec![
///     Item::new("1", 260),
///     Item::new("2", 210),
///     Item::new("3", 100),
/// ]);
/// let outside = [Item::new("4", 90), Item::new("5", 80)];
///
/// let reconciliation = Reconciler::new(&outside, &conflict, 500).resolve(|| false);
/// let resolution = reconciliation.resolution.unwrap();
///
/// assert_eq!(resolution.solution.amount(), 480);
/// assert_eq!(resolution.index, 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'a, A: Amount> {
    outside: &'a [Item<A>],
    conflict: &'a Solution<A>,
    ceiling: A,
}

impl<'a, A: Amount> Reconciler<'a, A> {
    pub fn new(outside: &'a [Item<A>], conflict: &'a Solution<A>, ceiling: A) -> Self {
        Self {
            outside,
            conflict,
            ceiling,
        }
    }

    /// Scans the table.
    ///
    /// `should_stop` is polled before every cell. When it returns true the
    /// scan ends and the best candidate seen so far is returned.
    pub fn resolve<F>(&self, mut should_stop: F) -> Reconciliation<A>
    where
        F: FnMut() -> bool,
    {
        let mut best: Option<Resolution<A>> = None;
        let mut cells_evaluated = 0;

        for y in 0..self.conflict.len() {
            let mut previous: Option<Solution<A>> = None;

            for (x, item) in self.outside.iter().enumerate() {
                if should_stop() {
                    return Reconciliation {
                        resolution: best,
                        cells_evaluated,
                        interrupted: true,
                    };
                }
                cells_evaluated += 1;

                let cell = match &previous {
                    None => self.conflict.without(y).extended(item.clone()),
                    Some(prev) => prev.extended(item.clone()),
                };
                let amount = cell.amount();

                if amount == self.ceiling {
                    trace!(row = y, column = x, amount = %amount, "exact fit");
                    return Reconciliation {
                        resolution: Some(Resolution {
                            solution: cell,
                            index: x,
                        }),
                        cells_evaluated,
                        interrupted: false,
                    };
                }

                if amount > self.ceiling {
                    break;
                }

                let best_amount = best
                    .as_ref()
                    .map_or_else(A::zero, |r| r.solution.amount());
                if amount > best_amount {
                    best = Some(Resolution {
                        solution: cell.clone(),
                        index: x,
                    });
                }
                previous = Some(cell);
            }
        }

        Reconciliation {
            resolution: best,
            cells_evaluated,
            interrupted: false,
        }
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
