//! Solution - an ordered item selection with a cached total.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::amount::Amount;
use crate::item::Item;

/// An ordered sequence of items plus their cumulative amount.
///
/// The cached amount is maintained incrementally by [`push`](Solution::push),
/// [`extended`](Solution::extended) and [`without`](Solution::without); it
/// always equals the sum of the item amounts (see
/// [`is_consistent`](Solution::is_consistent)). Solutions are compared by
/// amount only; item order matters for which items count as used.
///
/// Every derived solution owns its own item vector, so solutions built from a
/// common parent never share storage.
///
/// # Examples
///
/// ```
/// use fillforge_core::{Item, Solution};
///
/// let mut bag = Solution::empty();
/// bag.push(Item::new("a", 4.0));
/// bag.push(Item::new("b", 2.0));
/// assert_eq!(bag.amount(), 6.0);
///
/// let swapped = bag.without(0).extended(Item::new("c", 3.0));
/// assert_eq!(swapped.amount(), 5.0);
/// assert_eq!(swapped.ids().collect::<Vec<_>>(), vec!["b", "c"]);
///
/// // The parent is untouched
/// assert_eq!(bag.len(), 2);
/// assert!(swapped.is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Solution<A = f64> {
    items: Vec<Item<A>>,
    amount: A,
}

impl<A: Amount> Solution<A> {
    /// Creates an empty solution with amount zero.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            amount: A::zero(),
        }
    }

    /// Creates a solution from items, summing their amounts in order.
    pub fn from_items(items: Vec<Item<A>>) -> Self {
        let amount = sum_amounts(&items);
        Self { items, amount }
    }

    /// Returns the cached cumulative amount.
    #[inline]
    pub fn amount(&self) -> A {
        self.amount
    }

    /// Returns the items in selection order.
    pub fn items(&self) -> &[Item<A>] {
        &self.items
    }

    /// Returns the item identifiers in selection order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item and adds its amount to the total.
    pub fn push(&mut self, item: Item<A>) {
        self.amount = self.amount + item.amount();
        self.items.push(item);
    }

    /// Returns a copy of this solution with `item` appended.
    pub fn extended(&self, item: Item<A>) -> Self {
        let mut next = self.clone();
        next.push(item);
        next
    }

    /// Returns a copy of this solution with the item at `index` removed.
    ///
    /// The remaining items keep their relative order. The new total is the
    /// old total minus the removed amount.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn without(&self, index: usize) -> Self {
        let removed = self.items[index].amount();
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        Self {
            items,
            amount: self.amount - removed,
        }
    }

    /// Returns true if the total exceeds `ceiling`.
    #[inline]
    pub fn exceeds(&self, ceiling: A) -> bool {
        self.amount > ceiling
    }

    /// Recomputes the total from the items.
    pub fn recomputed_amount(&self) -> A {
        sum_amounts(&self.items)
    }

    /// Returns true if the cached total matches the item sum.
    pub fn is_consistent(&self) -> bool {
        self.amount.approx_eq(&self.recomputed_amount())
    }
}

impl<A: Amount> Default for Solution<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Amount> fmt::Display for Solution<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.amount)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

fn sum_amounts<A: Amount>(items: &[Item<A>]) -> A {
    items
        .iter()
        .fold(A::zero(), |total, item| total + item.amount())
}
