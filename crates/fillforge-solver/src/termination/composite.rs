//! Composite termination conditions (AND/OR) over tuples.

use fillforge_core::Amount;

use super::Termination;
use crate::scope::FillScope;

/// Terminates when ANY wrapped termination fires.
///
/// # Examples
///
/// ```
/// use fillforge_solver::termination::{OrTermination, StepCountTermination, TimeTermination};
///
/// // Stop after 30 seconds OR 1000 items
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     StepCountTermination::new(1000),
/// ));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<A, $($T),+> Termination<A> for OrTermination<($($T,)+)>
        where
            A: Amount,
            $($T: Termination<A>,)+
        {
            fn is_terminated(&self, scope: &FillScope<A>) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);

/// Terminates when ALL wrapped terminations fire.
///
/// # Examples
///
/// ```
/// use fillforge_solver::termination::{AndTermination, BestAmountTermination, StepCountTermination};
///
/// // Stop only once 90 is reached AND at least 10 items were pulled
/// let termination = AndTermination((
///     BestAmountTermination::new(90_i64),
///     StepCountTermination::new(10),
/// ));
/// ```
#[derive(Debug)]
pub struct AndTermination<T>(pub T);

impl<T> AndTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_and_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<A, $($T),+> Termination<A> for AndTermination<($($T,)+)>
        where
            A: Amount,
            $($T: Termination<A>,)+
        {
            fn is_terminated(&self, scope: &FillScope<A>) -> bool {
                $((self.0).$idx.is_terminated(scope))&&+
            }
        }
    };
}

impl_and_termination!(0: T0);
impl_and_termination!(0: T0, 1: T1);
impl_and_termination!(0: T0, 1: T1, 2: T2);
impl_and_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_and_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
