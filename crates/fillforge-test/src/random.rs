//! Seeded random instances.
//!
//! Instances are generated with `ChaCha8Rng`, so a seed always yields the
//! same items on every platform.

use fillforge_core::Item;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A generated item list and ceiling.
#[derive(Debug, Clone)]
pub struct RandomInstance<A> {
    pub seed: u64,
    pub items: Vec<Item<A>>,
    pub ceiling: A,
}

/// Generates `len` integer items in `0..=max_amount` and a ceiling between
/// one item and the total of all items.
///
/// # Example
///
/// ```
/// use fillforge_test::random_instance;
///
/// let a = random_instance(7, 20, 100);
/// let b = random_instance(7, 20, 100);
/// assert_eq!(a.items, b.items);
/// assert_eq!(a.ceiling, b.ceiling);
/// ```
pub fn random_instance(seed: u64, len: usize, max_amount: u64) -> RandomInstance<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let items: Vec<Item<u64>> = (0..len)
        .map(|i| Item::new(format!("r{i}"), rng.random_range(0..=max_amount)))
        .collect();
    let total: u64 = items.iter().map(Item::amount).sum();
    let ceiling = rng.random_range(0..=total.max(max_amount));
    RandomInstance {
        seed,
        items,
        ceiling,
    }
}

/// Generates `len` float items with two decimals in `0.0..=max_amount` and
/// a float ceiling.
pub fn random_float_instance(seed: u64, len: usize, max_amount: f64) -> RandomInstance<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let cents = (max_amount * 100.0) as u64;
    let items: Vec<Item<f64>> = (0..len)
        .map(|i| {
            let amount = rng.random_range(0..=cents) as f64 / 100.0;
            Item::new(format!("f{i}"), amount)
        })
        .collect();
    let total: f64 = items.iter().map(Item::amount).sum();
    let ceiling = rng.random_range(0.0..=total.max(max_amount));
    RandomInstance {
        seed,
        items,
        ceiling,
    }
}
