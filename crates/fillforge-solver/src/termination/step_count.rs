//! Step count termination.

use fillforge_core::Amount;

use super::Termination;
use crate::scope::FillScope;

/// Terminates after a number of items have been pulled.
///
/// # Example
///
/// ```
/// use fillforge_solver::termination::StepCountTermination;
///
/// // Stop after 1000 items
/// let term = StepCountTermination::new(1000);
/// ```
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl<A: Amount> Termination<A> for StepCountTermination {
    fn is_terminated(&self, scope: &FillScope<A>) -> bool {
        scope.total_step_count() >= self.limit
    }
}
