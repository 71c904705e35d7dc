//! Fill result types.

use std::fmt;

use fillforge_core::{Amount, Solution};

use crate::statistics::FillStatistics;

/// Why a fill run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The best solution hit the ceiling exactly.
    Perfect,
    /// Every item has been placed or discarded.
    Exhausted,
    /// An overshoot could not be repaired into an improvement.
    Unreconcilable,
    /// A termination condition or an early-termination request fired.
    Terminated,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerminationReason::Perfect => "perfect",
            TerminationReason::Exhausted => "exhausted",
            TerminationReason::Unreconcilable => "unreconcilable",
            TerminationReason::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

/// Outcome of a fill run: the best solution plus how the run went.
#[derive(Debug, Clone)]
pub struct FillResult<A> {
    /// The best non-overshooting solution found.
    pub solution: Solution<A>,
    /// The ceiling the run filled against.
    pub ceiling: A,
    /// Why the run stopped.
    pub reason: TerminationReason,
    /// Counters and improvement history.
    pub statistics: FillStatistics<A>,
}

impl<A: Amount> FillResult<A> {
    /// Returns the best amount.
    pub fn amount(&self) -> A {
        self.solution.amount()
    }

    /// Returns true if the run was cut short by a termination condition.
    pub fn terminated_early(&self) -> bool {
        self.reason == TerminationReason::Terminated
    }

    /// Returns true if the solution fills the ceiling exactly.
    pub fn is_perfect(&self) -> bool {
        self.solution.amount() == self.ceiling
    }

    /// Returns the unused capacity below the ceiling.
    pub fn slack(&self) -> A {
        self.ceiling - self.solution.amount()
    }

    /// Consumes the result and returns the solution.
    pub fn into_solution(self) -> Solution<A> {
        self.solution
    }
}
