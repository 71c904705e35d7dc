//! Best-amount termination.

use fillforge_core::Amount;

use super::Termination;
use crate::scope::FillScope;

/// Terminates once the best amount reaches or exceeds a target.
///
/// # Example
///
/// ```
/// use fillforge_solver::termination::BestAmountTermination;
///
/// // Good enough once 95 of 100 is filled
/// let term = BestAmountTermination::new(95_i64);
/// ```
#[derive(Debug, Clone)]
pub struct BestAmountTermination<A> {
    target: A,
}

impl<A: Amount> BestAmountTermination<A> {
    pub fn new(target: A) -> Self {
        Self { target }
    }

    pub fn target(&self) -> A {
        self.target
    }
}

impl<A: Amount> Termination<A> for BestAmountTermination<A> {
    fn is_terminated(&self, scope: &FillScope<A>) -> bool {
        !scope.best().is_empty() && scope.best_amount() >= self.target
    }
}
