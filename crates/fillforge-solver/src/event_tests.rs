//! Tests for the event system.

use super::*;
use fillforge_core::Item;

fn solution(amounts: &[i64]) -> Solution<i64> {
    Solution::from_items(
        amounts
            .iter()
            .enumerate()
            .map(|(i, &a)| Item::new(format!("{}", i + 1), a))
            .collect(),
    )
}

#[test]
fn test_event_support_new() {
    let support: FillEventSupport<i64> = FillEventSupport::new();

    assert_eq!(support.listener_count(), 0);
    assert!(!support.has_listeners());
}

#[test]
fn test_event_support_fire_events() {
    let mut support: FillEventSupport<i64> = FillEventSupport::new();
    let listener = Arc::new(CountingEventListener::new());
    support.add_listener(listener.clone());

    let best = solution(&[4, 3]);
    support.fire_solving_started(5, 10);
    support.fire_best_solution_changed(&best);
    support.fire_conflict(&solution(&[4, 3, 5]), 2);
    support.fire_reconciled(&Resolution {
        solution: best.clone(),
        index: 0,
    });
    support.fire_solving_ended(&best, false);

    assert_eq!(listener.solving_started_count(), 1);
    assert_eq!(listener.best_solution_count(), 1);
    assert_eq!(listener.conflict_count(), 1);
    assert_eq!(listener.reconciled_count(), 1);
    assert_eq!(listener.solving_ended_count(), 1);
}

#[test]
fn test_multiple_listeners_all_notified() {
    let mut support: FillEventSupport<i64> = FillEventSupport::new();
    let first = Arc::new(CountingEventListener::new());
    let second = Arc::new(CountingEventListener::new());
    support.add_listener(first.clone());
    support.add_listener(second.clone());

    support.fire_best_solution_changed(&solution(&[1]));

    assert_eq!(first.best_solution_count(), 1);
    assert_eq!(second.best_solution_count(), 1);
}

#[test]
fn test_clear_listeners() {
    let mut support: FillEventSupport<i64> = FillEventSupport::new();
    support.add_listener(Arc::new(CountingEventListener::new()));
    support.add_listener(Arc::new(LoggingEventListener::new()));
    assert_eq!(support.listener_count(), 2);

    support.clear_listeners();
    assert!(!support.has_listeners());
}

#[test]
fn test_counting_listener_reset() {
    let listener = CountingEventListener::new();
    FillEventListener::<i64>::on_best_solution_changed(&listener, &solution(&[2]));
    FillEventListener::<i64>::on_conflict(&listener, &solution(&[2]), 0);
    assert_eq!(listener.best_solution_count(), 1);

    listener.reset();
    assert_eq!(listener.best_solution_count(), 0);
    assert_eq!(listener.conflict_count(), 0);
}

#[test]
fn test_logging_listener_does_not_panic() {
    let listener = LoggingEventListener::with_prefix("[test] ");
    let best = solution(&[3, 2]);

    listener.on_solving_started(2, 10_i64);
    listener.on_best_solution_changed(&best);
    listener.on_conflict(&best, 0);
    listener.on_solving_ended(&best, true);
}

#[test]
fn test_event_support_debug() {
    let mut support: FillEventSupport<i64> = FillEventSupport::new();
    support.add_listener(Arc::new(CountingEventListener::new()));

    let debug = format!("{:?}", support);
    assert!(debug.contains("FillEventSupport"));
    assert!(debug.contains("listeners: 1"));
}
