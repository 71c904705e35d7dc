//! External termination via a shared AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use fillforge_core::Amount;

use super::Termination;
use crate::scope::FillScope;

/// Terminates when an external flag is set.
///
/// # Example
///
/// ```
/// use fillforge_solver::termination::ExternalTermination;
///
/// let term = ExternalTermination::new();
/// let handle = term.handle();
///
/// // From another thread:
/// handle.terminate();
/// assert!(handle.is_terminated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a termination that watches an existing flag.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Returns a handle that can request termination from anywhere.
    pub fn handle(&self) -> TerminationHandle {
        TerminationHandle {
            flag: Arc::clone(&self.flag),
        }
    }
}

impl<A: Amount> Termination<A> for ExternalTermination {
    fn is_terminated(&self, _scope: &FillScope<A>) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Cloneable handle for stopping a fill run from another thread.
#[derive(Debug, Clone, Default)]
pub struct TerminationHandle {
    flag: Arc<AtomicBool>,
}

impl TerminationHandle {
    pub(crate) fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Requests termination. The run stops at its next poll.
    pub fn terminate(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_terminated(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
