//! Filler entry points that hide the configuration wiring.

use fillforge_config::FillerConfig;
use fillforge_core::{Amount, Item, Result, Solution};
use fillforge_solver::{Allocator, FillResult};
use tracing::debug;

/// Configuration file read by [`solve`] from the working directory.
pub const CONFIG_FILE: &str = "fillforge.toml";

/// Fills `ceiling` from `items` and returns the best bag.
///
/// Reads [`CONFIG_FILE`] from the working directory; a missing or invalid
/// file means default configuration.
///
/// # Errors
///
/// Returns an error for a negative or NaN item amount, a NaN ceiling, or a
/// configured `best_amount_limit` that is not a valid amount.
pub fn solve<A: Amount>(items: Vec<Item<A>>, ceiling: A) -> Result<Solution<A>> {
    let config = FillerConfig::load(CONFIG_FILE).unwrap_or_else(|err| {
        debug!(event = "config_default", file = CONFIG_FILE, reason = %err);
        FillerConfig::default()
    });
    Ok(solve_with_config(items, ceiling, &config)?.into_solution())
}

/// Fills `ceiling` from `items` under an explicit configuration.
pub fn solve_with_config<A: Amount>(
    items: Vec<Item<A>>,
    ceiling: A,
    config: &FillerConfig,
) -> Result<FillResult<A>> {
    Ok(Allocator::from_config(items, ceiling, config)?.solve())
}
