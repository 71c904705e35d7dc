//! Item - a candidate offered to the filler.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::error::{FillForgeError, Result};

/// An immutable candidate item: an opaque identifier and a non-negative amount.
///
/// # Examples
///
/// ```
/// use fillforge_core::Item;
///
/// let item = Item::new("crate-7", 4.0);
/// assert_eq!(item.id(), "crate-7");
/// assert_eq!(item.amount(), 4.0);
/// assert!(item.validate().is_ok());
///
/// assert!(Item::new("broken", -1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item<A = f64> {
    id: String,
    amount: A,
}

impl<A: Amount> Item<A> {
    /// Creates a new item.
    pub fn new(id: impl Into<String>, amount: A) -> Self {
        Self {
            id: id.into(),
            amount,
        }
    }

    /// Returns the item identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the item amount.
    #[inline]
    pub fn amount(&self) -> A {
        self.amount
    }

    /// Returns true if the amount alone exceeds `ceiling`.
    #[inline]
    pub fn exceeds(&self, ceiling: A) -> bool {
        self.amount > ceiling
    }

    /// Checks that the amount is comparable and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.amount.is_valid() {
            Ok(())
        } else {
            Err(FillForgeError::InvalidAmount {
                id: self.id.clone(),
                amount: self.amount.to_string(),
            })
        }
    }
}

impl<A: Amount> fmt::Display for Item<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.id, self.amount)
    }
}
