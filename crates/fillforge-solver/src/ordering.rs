//! Descending item ordering with an explicit tie-break.
//!
//! The filler always consumes the largest remaining item first. Items of
//! equal amount are ordered by [`TieBreak`], so identical input always yields
//! the identical item order.

use std::cmp::Ordering;

use fillforge_config::TieBreak;
use fillforge_core::{Amount, Item};

/// Sorts items by descending amount.
///
/// The sort is stable: with [`TieBreak::InputOrder`] equal amounts keep the
/// order in which they were supplied. With [`TieBreak::Id`] equal amounts are
/// ordered by ascending identifier, falling back to input order for equal ids.
///
/// # Example
///
/// ```
/// use fillforge_config::TieBreak;
/// use fillforge_core::Item;
/// use fillforge_solver::sort_descending;
///
/// let mut items = vec![Item::new("b", 4.0), Item::new("c", 10.0), Item::new("a", 4.0)];
///
/// sort_descending(&mut items, TieBreak::InputOrder);
/// let ids: Vec<_> = items.iter().map(|i| i.id()).collect();
/// assert_eq!(ids, vec!["c", "b", "a"]);
///
/// sort_descending(&mut items, TieBreak::Id);
/// let ids: Vec<_> = items.iter().map(|i| i.id()).collect();
/// assert_eq!(ids, vec!["c", "a", "b"]);
/// ```
pub fn sort_descending<A: Amount>(items: &mut [Item<A>], tie_break: TieBreak) {
    match tie_break {
        TieBreak::InputOrder => items.sort_by(by_amount_descending),
        TieBreak::Id => {
            items.sort_by(|a, b| by_amount_descending(a, b).then_with(|| a.id().cmp(b.id())))
        }
    }
}

/// Returns true if no item is followed by a larger one.
pub fn is_sorted_descending<A: Amount>(items: &[Item<A>]) -> bool {
    items.windows(2).all(|w| w[0].amount() >= w[1].amount())
}

// Amounts are validated before sorting; NaN never reaches the comparator.
fn by_amount_descending<A: Amount>(a: &Item<A>, b: &Item<A>) -> Ordering {
    b.amount()
        .partial_cmp(&a.amount())
        .unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids<A: Amount>(items: &[Item<A>]) -> Vec<&str> {
        items.iter().map(|i| i.id()).collect()
    }

    #[test]
    fn test_sort_descending_by_amount() {
        let mut items = vec![
            Item::new("1", 90),
            Item::new("2", 260),
            Item::new("3", 80),
            Item::new("4", 210),
        ];
        sort_descending(&mut items, TieBreak::InputOrder);
        assert_eq!(ids(&items), vec!["2", "4", "1", "3"]);
        assert!(is_sorted_descending(&items));
    }

    #[test]
    fn test_input_order_ties_are_stable() {
        let mut items = vec![
            Item::new("z", 4.0),
            Item::new("y", 4.0),
            Item::new("x", 4.0),
        ];
        sort_descending(&mut items, TieBreak::InputOrder);
        assert_eq!(ids(&items), vec!["z", "y", "x"]);
    }

    #[test]
    fn test_id_ties() {
        let mut items = vec![
            Item::new("z", 4.0),
            Item::new("y", 4.0),
            Item::new("big", 9.0),
            Item::new("x", 4.0),
        ];
        sort_descending(&mut items, TieBreak::Id);
        assert_eq!(ids(&items), vec!["big", "x", "y", "z"]);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let mut items = vec![
            Item::new("1", 10.0),
            Item::new("2", 4.0),
            Item::new("3", 4.0),
            Item::new("4", 2.0),
            Item::new("5", 0.49),
            Item::new("6", 2.0),
        ];
        for tie_break in [TieBreak::InputOrder, TieBreak::Id] {
            sort_descending(&mut items, tie_break);
            let first = items.clone();
            sort_descending(&mut items, tie_break);
            assert_eq!(first, items);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<Item<f64>> = vec![];
        sort_descending(&mut empty, TieBreak::Id);
        assert!(is_sorted_descending(&empty));

        let mut one = vec![Item::new("only", 1)];
        sort_descending(&mut one, TieBreak::InputOrder);
        assert_eq!(ids(&one), vec!["only"]);
    }

    #[test]
    fn test_not_sorted() {
        let items = vec![Item::new("a", 1), Item::new("b", 2)];
        assert!(!is_sorted_descending(&items));
    }
}
