//! Tests for termination conditions.

use std::thread;
use std::time::Duration;

use fillforge_core::Item;

use super::*;
use crate::scope::FillScope;

fn create_scope(amounts: &[i64], ceiling: i64) -> FillScope<i64> {
    let items = amounts
        .iter()
        .enumerate()
        .map(|(i, &a)| Item::new(format!("{}", i + 1), a))
        .collect();
    FillScope::new(items, ceiling)
}

#[test]
fn test_no_termination() {
    let scope = create_scope(&[1, 2], 10);
    assert!(!NoTermination.is_terminated(&scope));
}

#[test]
fn test_option_termination() {
    let scope = create_scope(&[], 10);
    let absent: Option<StepCountTermination> = None;
    let present = Some(StepCountTermination::new(0));

    assert!(!absent.is_terminated(&scope));
    assert!(present.is_terminated(&scope));
}

#[test]
fn test_step_count_termination() {
    let mut scope = create_scope(&[1, 1, 1, 1], 10);
    let term = StepCountTermination::new(3);

    assert!(!term.is_terminated(&scope));
    scope.step();
    scope.step();
    assert!(!term.is_terminated(&scope));
    scope.step();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_time_termination() {
    let mut scope = create_scope(&[1], 10);
    let term = TimeTermination::millis(5);

    scope.start_solving();
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));
    thread::sleep(Duration::from_millis(10));
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_best_amount_termination() {
    let mut scope = create_scope(&[6, 3], 10);
    let term = BestAmountTermination::new(8);
    assert_eq!(term.target(), 8);

    assert!(!term.is_terminated(&scope));
    scope.step();
    scope.update_best_solution();
    assert!(!term.is_terminated(&scope));
    scope.step();
    scope.update_best_solution();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_best_amount_termination_ignores_empty_best() {
    let scope = create_scope(&[5], 10);
    let term = BestAmountTermination::new(0);
    assert!(!term.is_terminated(&scope));
}

#[test]
fn test_external_termination() {
    let scope = create_scope(&[1], 10);
    let term = ExternalTermination::new();
    let handle = term.handle();

    assert!(!term.is_terminated(&scope));
    handle.terminate();
    assert!(handle.is_terminated());
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_external_termination_across_threads() {
    let scope = create_scope(&[1], 10);
    let term = ExternalTermination::new();
    let handle = term.handle();

    thread::spawn(move || handle.terminate())
        .join()
        .unwrap();

    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination() {
    let mut scope = create_scope(&[1, 1], 10);
    let term = OrTermination((StepCountTermination::new(1), StepCountTermination::new(5)));

    assert!(!term.is_terminated(&scope));
    scope.step();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_and_termination() {
    let mut scope = create_scope(&[1, 1, 1], 10);
    let term = AndTermination((StepCountTermination::new(1), StepCountTermination::new(2)));

    scope.step();
    assert!(!term.is_terminated(&scope));
    scope.step();
    assert!(term.is_terminated(&scope));
}

#[test]
fn test_or_termination_with_absent_members() {
    let mut scope = create_scope(&[1, 1], 10);
    let term = OrTermination((
        None::<TimeTermination>,
        Some(StepCountTermination::new(2)),
        None::<BestAmountTermination<i64>>,
    ));

    scope.step();
    assert!(!term.is_terminated(&scope));
    scope.step();
    assert!(term.is_terminated(&scope));
}
