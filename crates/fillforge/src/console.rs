//! Colorful console output for filler runs.
//!
//! Provides a custom `tracing` layer that formats filler events with colors.
//! Output goes to stderr so stdout stays free for results.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "fillforge_solver=info";

/// Initializes console output with [`DEFAULT_FILTER`].
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes console output, using `default_filter` when `RUST_LOG` is
/// unset.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_with_filter(default_filter: &str) {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FillConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
 _____ _ _ _ _____
|  ___(_) | |  ___|__  _ __ __ _  ___
| |_  | | | | |_ / _ \| '__/ _` |/ _ \
|  _| | | | |  _| (_) | | | (_| |  __/
|_|   |_|_|_|_|  \___/|_|  \__, |\___|
                           |___/
"#;

    let version_line = format!(
        "          v{} - Greedy Capacity Filler\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", banner.bright_cyan());
    let _ = writeln!(stderr, "{}", version_line.bright_white().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats filler events with colors.
pub struct FillConsoleLayer;

impl<S: Subscriber> Layer<S> for FillConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("fillforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_fill_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    message: Option<String>,
    event: Option<String>,
    item_count: Option<u64>,
    ceiling: Option<String>,
    amount: Option<String>,
    items: Option<u64>,
    reason: Option<String>,
    step: Option<u64>,
    steps: Option<u64>,
    conflicts: Option<u64>,
    reconciliations: Option<u64>,
    consumed: Option<u64>,
    cells: Option<u64>,
    duration_ms: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "message" => self.message = Some(s),
            "ceiling" => self.ceiling = Some(s),
            "amount" => self.amount = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "item_count" => self.item_count = Some(value),
            "items" => self.items = Some(value),
            "step" => self.step = Some(value),
            "steps" => self.steps = Some(value),
            "conflicts" => self.conflicts = Some(value),
            "reconciliations" => self.reconciliations = Some(value),
            "consumed" => self.consumed = Some(value),
            "cells" => self.cells = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_fill_event(v: &EventVisitor) -> String {
    match (v.event.as_deref(), v.message.as_deref()) {
        (Some("solve_start"), _) => format_solve_start(v),
        (Some("solve_end"), _) => format_solve_end(v),
        (Some("reconciled"), _) => format_reconciled(v),
        (_, Some("New best solution")) => format_new_best(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let item_count = v.item_count.unwrap_or(0);
    let ceiling = v.ceiling.as_deref().unwrap_or("N/A");

    format!(
        "{} {} {} item count ({}), ceiling ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Filler]".bright_cyan(),
        item_count.to_formatted_string(&Locale::en).bright_yellow(),
        ceiling.bright_yellow()
    )
}

fn format_reconciled(v: &EventVisitor) -> String {
    let amount = v.amount.as_deref().unwrap_or("N/A");
    let consumed = v.consumed.unwrap_or(0);
    let cells = v.cells.unwrap_or(0);

    format!(
        "    {} Reconciled {} | consumed {} | cells {}",
        "->".bright_blue(),
        amount.bright_green(),
        consumed.to_formatted_string(&Locale::en).white(),
        cells.to_formatted_string(&Locale::en).white()
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    let amount = v.amount.as_deref().unwrap_or("N/A");
    let items = v.items.unwrap_or(0);

    format!(
        "    {} New best {} ({} items)",
        "->".bright_blue(),
        amount.bright_green(),
        items.to_formatted_string(&Locale::en).white()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let amount = v.amount.as_deref().unwrap_or("N/A");
    let reason = v.reason.as_deref().unwrap_or("unknown");
    let items = v.items.unwrap_or(0);
    let steps = v.steps.unwrap_or(0);
    let conflicts = v.conflicts.unwrap_or(0);
    let reconciliations = v.reconciliations.unwrap_or(0);
    let duration_ms = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} Solving ended: time spent ({}), best amount ({}), step total ({}), conflicts ({} reconciled of {})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Filler]".bright_cyan(),
        format_duration_ms(duration_ms).yellow(),
        amount.bright_green().bold(),
        steps.to_formatted_string(&Locale::en).white(),
        reconciliations.to_formatted_string(&Locale::en).white(),
        conflicts.to_formatted_string(&Locale::en).white()
    );

    output.push_str("\n\n");
    output.push_str(&"╔══════════════════════════════════════════════════════════╗".bright_cyan().to_string());
    output.push('\n');

    let status_text = status_text(reason);
    let status_colored = match reason {
        "perfect" => format!("  {}  ", status_text).bright_green().bold().to_string(),
        "terminated" => format!("  {}  ", status_text).yellow().bold().to_string(),
        _ => format!("  {}  ", status_text).bright_white().bold().to_string(),
    };
    let status_padding = 56 - status_text.len() - 4;
    let left_pad = status_padding / 2;
    let right_pad = status_padding - left_pad;
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');

    output.push_str(&"╠══════════════════════════════════════════════════════════╣".bright_cyan().to_string());
    output.push('\n');

    for (label, value) in [("Best Amount:", amount.to_string()), ("Items:", items.to_string())] {
        output.push_str(&format!(
            "{}  {:<18}{:>36}  {}",
            "║".bright_cyan(),
            label,
            value,
            "║".bright_cyan()
        ));
        output.push('\n');
    }

    output.push_str(&"╚══════════════════════════════════════════════════════════╝".bright_cyan().to_string());
    output.push('\n');

    output
}

fn status_text(reason: &str) -> &'static str {
    match reason {
        "perfect" => "PERFECT FIT FOUND",
        "terminated" => "TERMINATED EARLY",
        _ => "BEST FIT FOUND",
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_unknown_events_are_silent() {
        let visitor = EventVisitor {
            event: Some("place".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_fill_event(&visitor).is_empty());
    }

    #[test]
    fn test_solve_start_line() {
        let visitor = EventVisitor {
            event: Some("solve_start".to_string()),
            item_count: Some(12_345),
            ceiling: Some("9.99".to_string()),
            ..EventVisitor::default()
        };
        let line = format_fill_event(&visitor);
        assert!(line.contains("12,345"));
        assert!(line.contains("9.99"));
    }

    #[test]
    fn test_solve_end_summary() {
        let visitor = EventVisitor {
            event: Some("solve_end".to_string()),
            amount: Some("480".to_string()),
            reason: Some("exhausted".to_string()),
            items: Some(4),
            steps: Some(3),
            conflicts: Some(1),
            reconciliations: Some(1),
            duration_ms: Some(2),
            ..EventVisitor::default()
        };
        let output = format_fill_event(&visitor);
        assert!(output.contains("BEST FIT FOUND"));
        assert!(output.contains("480"));
        assert!(output.contains("2ms"));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text("perfect"), "PERFECT FIT FOUND");
        assert_eq!(status_text("terminated"), "TERMINATED EARLY");
        assert_eq!(status_text("unreconcilable"), "BEST FIT FOUND");
    }
}
