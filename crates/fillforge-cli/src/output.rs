//! Result rendering for the terminal and for JSON consumers.

use std::fmt::Write;

use fillforge::{FillResult, Item};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON shape of a `solve` run.
#[derive(Debug, Serialize)]
pub struct SolveOutput<'a> {
    pub ceiling: f64,
    pub amount: f64,
    pub slack: f64,
    pub reason: String,
    pub perfect: bool,
    pub items: &'a [Item<f64>],
    pub steps: u64,
    pub conflicts: u64,
    pub reconciliations: u64,
    pub cells_evaluated: u64,
    pub duration_ms: u64,
}

impl<'a> SolveOutput<'a> {
    pub fn new(result: &'a FillResult<f64>) -> Self {
        let statistics = &result.statistics;
        Self {
            ceiling: result.ceiling,
            amount: result.amount(),
            slack: result.slack(),
            reason: result.reason.to_string(),
            perfect: result.is_perfect(),
            items: result.solution.items(),
            steps: statistics.step_count,
            conflicts: statistics.conflicts,
            reconciliations: statistics.reconciliations,
            cells_evaluated: statistics.cells_evaluated,
            duration_ms: statistics.total_duration.as_millis() as u64,
        }
    }
}

pub fn to_json(result: &FillResult<f64>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SolveOutput::new(result))
}

/// Renders the chosen items as an aligned table followed by a summary line.
pub fn to_table(result: &FillResult<f64>) -> String {
    let items = result.solution.items();
    let id_width = items
        .iter()
        .map(|item| item.id().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut out = String::new();
    let _ = render_table(&mut out, result, items, id_width);
    out
}

fn render_table(
    out: &mut String,
    result: &FillResult<f64>,
    items: &[Item<f64>],
    id_width: usize,
) -> std::fmt::Result {
    writeln!(out, "{:<id_width$}  {:>12}", "ID".bold(), "AMOUNT".bold())?;
    for item in items {
        writeln!(out, "{:<id_width$}  {:>12}", item.id(), item.amount())?;
    }
    writeln!(out)?;
    write!(
        out,
        "{} {} of {} ({} items, slack {}, {})",
        "Total:".bold(),
        result.amount().bright_green(),
        result.ceiling,
        items.len(),
        result.slack(),
        result.reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fillforge::{Allocator, TerminationReason};

    fn result() -> FillResult<f64> {
        let items = vec![
            Item::new("1", 260.0),
            Item::new("2", 210.0),
            Item::new("3", 100.0),
            Item::new("4", 90.0),
            Item::new("5", 80.0),
        ];
        Allocator::new(items, 500.0).unwrap().solve()
    }

    #[test]
    fn test_json_output() {
        let result = result();
        assert_eq!(result.reason, TerminationReason::Exhausted);

        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(value["amount"], 480.0);
        assert_eq!(value["slack"], 20.0);
        assert_eq!(value["reason"], "exhausted");
        assert_eq!(value["perfect"], false);
        assert_eq!(value["items"].as_array().unwrap().len(), 4);
        assert_eq!(value["items"][0]["id"], "2");
    }

    #[test]
    fn test_table_lists_every_item() {
        let table = to_table(&result());
        for id in ["2", "3", "4", "5"] {
            assert!(table.lines().any(|line| line.starts_with(id)));
        }
        assert!(table.contains("480"));
        assert!(table.contains("exhausted"));
    }
}
