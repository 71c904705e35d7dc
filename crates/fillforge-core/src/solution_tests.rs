//! Tests for Item and Solution.

use crate::{FillForgeError, Item, Solution};

fn bag(amounts: &[f64]) -> Solution {
    Solution::from_items(
        amounts
            .iter()
            .enumerate()
            .map(|(i, &a)| Item::new(format!("{}", i + 1), a))
            .collect(),
    )
}

#[test]
fn test_empty_solution() {
    let s: Solution<f64> = Solution::empty();
    assert_eq!(s.amount(), 0.0);
    assert!(s.is_empty());
    assert!(s.is_consistent());
    assert_eq!(Solution::<i64>::default().amount(), 0);
}

#[test]
fn test_push_accumulates() {
    let mut s = Solution::empty();
    s.push(Item::new("a", 4));
    s.push(Item::new("b", 4));
    s.push(Item::new("c", 2));
    assert_eq!(s.amount(), 10);
    assert_eq!(s.len(), 3);
    assert!(s.exceeds(9));
    assert!(!s.exceeds(10));
}

#[test]
fn test_without_keeps_order_and_total() {
    let s = bag(&[4.0, 4.0, 1.0, 0.8, 0.5]);
    let dropped = s.without(3);

    assert_eq!(dropped.ids().collect::<Vec<_>>(), vec!["1", "2", "3", "5"]);
    assert!(dropped.is_consistent());
    assert_eq!(s.len(), 5);
}

#[test]
fn test_without_last_item() {
    let s = bag(&[260.0, 210.0, 100.0]);
    let dropped = s.without(2);
    assert_eq!(dropped.amount(), 470.0);
    assert_eq!(dropped.len(), 2);
}

#[test]
fn test_extended_does_not_alias_parent() {
    let parent = bag(&[4.0, 2.0]);
    let left = parent.extended(Item::new("x", 1.0));
    let right = parent.extended(Item::new("y", 0.5));

    assert_eq!(parent.len(), 2);
    assert_eq!(left.ids().last(), Some("x"));
    assert_eq!(right.ids().last(), Some("y"));
    assert_eq!(left.amount(), 7.0);
    assert_eq!(right.amount(), 6.5);
}

#[test]
fn test_recomputed_amount() {
    let s = bag(&[10.0, 0.8, 0.49]);
    assert!(s.amount().to_bits() == s.recomputed_amount().to_bits());
}

#[test]
fn test_display() {
    let s = bag(&[4.0, 2.0]);
    assert_eq!(s.to_string(), "6 [1=4, 2=2]");
}

#[test]
fn test_item_validation() {
    assert!(Item::new("ok", 0.0).validate().is_ok());

    match Item::new("neg", -2.5).validate() {
        Err(FillForgeError::InvalidAmount { id, amount }) => {
            assert_eq!(id, "neg");
            assert_eq!(amount, "-2.5");
        }
        other => panic!("expected InvalidAmount, got {:?}", other),
    }

    assert!(Item::new("nan", f64::NAN).validate().is_err());
}

#[test]
fn test_item_exceeds() {
    let item = Item::new("big", 100);
    assert!(item.exceeds(10));
    assert!(!item.exceeds(100));
}
