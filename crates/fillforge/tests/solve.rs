//! End-to-end runs through the facade.

use std::io::Write;

use fillforge::prelude::*;
use fillforge::{EnvironmentMode, TerminationReason};
use fillforge_test::{assert_no_duplicates, assert_solution_valid, items_from_amounts, scenarios};

#[test]
fn test_reference_scenarios() {
    let config = FillerConfig::default().with_environment_mode(EnvironmentMode::FullAssert);

    for scenario in scenarios() {
        let result = solve_with_config(scenario.items(), scenario.ceiling, &config).unwrap();

        assert_eq!(
            result.amount(),
            scenario.expected_amount,
            "scenario {}",
            scenario.name
        );
        assert_eq!(result.solution.len(), scenario.expected_len, "scenario {}", scenario.name);
        assert_solution_valid(&result.solution, scenario.ceiling);
        assert_no_duplicates(&result.solution);
    }
}

#[test]
fn test_solve_with_defaults() {
    let items = items_from_amounts(&[260.0, 210.0, 100.0, 90.0, 80.0]);

    let best = fillforge::solve(items, 500.0).unwrap();

    assert_eq!(best.amount(), 480.0);
    assert_eq!(best.ids().collect::<Vec<_>>(), vec!["2", "3", "4", "5"]);
}

#[test]
fn test_solve_integer_amounts() {
    let items = items_from_amounts(&[260_u64, 210, 100, 90, 80]);

    let best = fillforge::solve(items, 500).unwrap();

    assert_eq!(best.amount(), 480);
}

#[test]
fn test_solve_rejects_negative_amount() {
    let items = vec![Item::new("a", 3.0), Item::new("b", -1.0)];

    let err = fillforge::solve(items, 10.0).unwrap_err();

    assert!(matches!(err, FillForgeError::InvalidAmount { .. }));
}

#[test]
fn test_toml_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
environment_mode = "full_assert"
tie_break = "id"

[termination]
step_count_limit = 1
"#
    )
    .unwrap();

    let config = FillerConfig::load(file.path()).unwrap();
    let items = vec![Item::new("b", 5.0), Item::new("a", 5.0)];
    let result = solve_with_config(items, 20.0, &config).unwrap();

    assert_eq!(result.reason, TerminationReason::Terminated);
    assert_eq!(result.solution.ids().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn test_yaml_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        "termination:\n  best_amount_limit: \"300\"\n"
    )
    .unwrap();

    let config = FillerConfig::from_yaml_file(file.path()).unwrap();
    let items = items_from_amounts(&[260.0, 210.0, 100.0, 90.0, 80.0]);
    let result = solve_with_config(items, 500.0, &config).unwrap();

    assert!(result.terminated_early());
    assert!(result.amount() >= 300.0);
    assert_solution_valid(&result.solution, 500.0);
}

#[test]
fn test_unparseable_best_amount_limit() {
    let config = FillerConfig::default().with_best_amount_limit("lots");
    let items = items_from_amounts(&[1.0, 2.0]);

    let err = solve_with_config(items, 3.0, &config).unwrap_err();

    assert!(matches!(err, FillForgeError::Config(_)));
}
