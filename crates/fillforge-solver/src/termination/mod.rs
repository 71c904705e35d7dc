//! Termination conditions for fill runs.

mod best_amount;
mod composite;
mod external;
mod step_count;
mod time;

use std::fmt::Debug;

use fillforge_core::Amount;

use crate::scope::FillScope;

pub use best_amount::BestAmountTermination;
pub use composite::{AndTermination, OrTermination};
pub use external::{ExternalTermination, TerminationHandle};
pub use step_count::StepCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop filling.
///
/// Polled before the allocator pulls each item and before every cell the
/// reconciler evaluates. A terminated run returns the best solution found
/// so far.
pub trait Termination<A: Amount>: Send + Debug {
    /// Returns true if filling should stop.
    fn is_terminated(&self, scope: &FillScope<A>) -> bool;
}

/// Never terminates. Runs continue until the items are exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl<A: Amount> Termination<A> for NoTermination {
    fn is_terminated(&self, _scope: &FillScope<A>) -> bool {
        false
    }
}

/// An absent termination never fires.
impl<A: Amount, T: Termination<A>> Termination<A> for Option<T> {
    fn is_terminated(&self, scope: &FillScope<A>) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}

#[cfg(test)]
mod tests;
