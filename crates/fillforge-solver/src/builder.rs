//! Builder module for constructing filler components from configuration
//!
//! This module provides the wiring between `fillforge_config` types and the
//! termination conditions the allocator polls.

use fillforge_config::TerminationConfig;
use fillforge_core::{Amount, FillForgeError, Result};

use crate::termination::{
    BestAmountTermination, OrTermination, StepCountTermination, TimeTermination,
};

/// Termination assembled from a [`TerminationConfig`].
///
/// Each configured limit occupies one slot; unset limits never fire.
pub type ConfiguredTermination<A> = OrTermination<(
    Option<TimeTermination>,
    Option<StepCountTermination>,
    Option<BestAmountTermination<A>>,
)>;

/// Builder for constructing terminations from configuration.
pub struct TerminationBuilder;

impl TerminationBuilder {
    /// Builds a termination from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FillForgeError::Config`] if `best_amount_limit` cannot be
    /// parsed as the amount type or is not a valid amount.
    pub fn build<A: Amount>(config: Option<&TerminationConfig>) -> Result<ConfiguredTermination<A>> {
        let Some(config) = config else {
            return Ok(OrTermination((None, None, None)));
        };

        let time = config.time_limit().map(TimeTermination::new);
        let steps = config.step_count_limit.map(StepCountTermination::new);
        let best = config
            .best_amount_limit
            .as_deref()
            .map(Self::parse_amount::<A>)
            .transpose()?
            .map(BestAmountTermination::new);

        Ok(OrTermination((time, steps, best)))
    }

    /// Parses a decimal amount string as `A`.
    pub fn parse_amount<A: Amount>(s: &str) -> Result<A> {
        let amount = A::from_str_radix(s.trim(), 10).map_err(|_| {
            FillForgeError::Config(format!("best_amount_limit {s:?} is not a valid amount"))
        })?;
        if !amount.is_valid() {
            return Err(FillForgeError::Config(format!(
                "best_amount_limit {s:?} must be non-negative"
            )));
        }
        Ok(amount)
    }
}
