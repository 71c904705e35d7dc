//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use fillforge_core::Amount;

use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// # Example
///
/// ```
/// use fillforge_benchmark::{BenchmarkResult, CsvExporter};
///
/// let result = BenchmarkResult::<f64>::new("Test", "default", "Problem");
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("run_index,solve_time_ms,final_amount"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    pub fn to_string<A: Amount>(result: &BenchmarkResult<A>) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(result, &mut output);
        output
    }

    fn render<A: Amount>(result: &BenchmarkResult<A>, output: &mut String) -> fmt::Result {
        writeln!(
            output,
            "run_index,solve_time_ms,final_amount,item_count,reason,steps,conflicts,cells_evaluated,cells_per_second"
        )?;
        for run in &result.runs {
            writeln!(
                output,
                "{},{},{},{},{},{},{},{},{:.2}",
                run.run_index,
                run.solve_time.as_millis(),
                run.final_amount,
                run.item_count,
                run.reason,
                run.steps,
                run.conflicts,
                run.cells_evaluated,
                run.cells_per_second(),
            )?;
        }
        Ok(())
    }

    pub fn to_file<A: Amount>(result: &BenchmarkResult<A>, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    pub fn write<A: Amount, W: Write>(result: &BenchmarkResult<A>, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use fillforge_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::<f64>::new("Test", "default", "Problem");
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    pub fn to_string<A: Amount>(result: &BenchmarkResult<A>) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render<A: Amount>(result: &BenchmarkResult<A>, output: &mut String) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;
        writeln!(output, "- **Solver**: {}", result.solver_name)?;
        writeln!(output, "- **Problem**: {}", result.problem_name)?;
        writeln!(output, "- **Runs**: {}", result.run_count())?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;
        match (result.best_amount(), result.worst_amount()) {
            (Some(best), Some(worst)) => {
                writeln!(output, "| Metric | Value |")?;
                writeln!(output, "|--------|-------|")?;
                writeln!(output, "| Best Amount | {} |", best)?;
                writeln!(output, "| Worst Amount | {} |", worst)?;
                writeln!(
                    output,
                    "| Avg Time | {:.2} ms |",
                    result.avg_solve_time().as_secs_f64() * 1000.0
                )?;
                writeln!(
                    output,
                    "| Min Time | {:.2} ms |",
                    result.min_solve_time().as_secs_f64() * 1000.0
                )?;
                writeln!(
                    output,
                    "| Max Time | {:.2} ms |",
                    result.max_solve_time().as_secs_f64() * 1000.0
                )?;
                writeln!(
                    output,
                    "| Avg Cells/sec | {:.0} |",
                    result.avg_cells_per_second()
                )?;
                writeln!(output, "| Terminated Early | {} |", result.terminated_count())?;
            }
            _ => writeln!(output, "*No runs completed.*")?,
        }
        writeln!(output)?;

        if !result.runs.is_empty() {
            writeln!(output, "## Run Details")?;
            writeln!(output)?;
            writeln!(output, "| Run | Time (ms) | Amount | Items | Reason | Cells |")?;
            writeln!(output, "|-----|-----------|--------|-------|--------|-------|")?;
            for run in &result.runs {
                writeln!(
                    output,
                    "| {} | {:.2} | {} | {} | {} | {} |",
                    run.run_index,
                    run.solve_time.as_secs_f64() * 1000.0,
                    run.final_amount,
                    run.item_count,
                    run.reason,
                    run.cells_evaluated,
                )?;
            }
        }
        Ok(())
    }

    pub fn to_file<A: Amount>(result: &BenchmarkResult<A>, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    pub fn write<A: Amount, W: Write>(result: &BenchmarkResult<A>, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }

    /// Generates a comparison table for multiple results.
    ///
    /// # Example
    ///
    /// ```
    /// use fillforge_benchmark::{BenchmarkResult, MarkdownReport};
    ///
    /// let by_input = BenchmarkResult::<i64>::new("Ties", "input_order", "Problem");
    /// let by_id = BenchmarkResult::<i64>::new("Ties", "id", "Problem");
    ///
    /// let comparison = MarkdownReport::comparison(&[&by_input, &by_id]);
    /// assert!(comparison.contains("## Comparison"));
    /// assert!(comparison.contains("| id | Problem | N/A |"));
    /// ```
    pub fn comparison<A: Amount>(results: &[&BenchmarkResult<A>]) -> String {
        let mut output = String::new();
        let _ = Self::render_comparison(results, &mut output);
        output
    }

    fn render_comparison<A: Amount>(
        results: &[&BenchmarkResult<A>],
        output: &mut String,
    ) -> fmt::Result {
        writeln!(output, "## Comparison")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Solver | Problem | Best Amount | Avg Time (ms) | Cells/sec |"
        )?;
        writeln!(
            output,
            "|--------|---------|-------------|---------------|-----------|"
        )?;
        for result in results {
            let best = result
                .best_amount()
                .map(|a| a.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(
                output,
                "| {} | {} | {} | {:.2} | {:.0} |",
                result.solver_name,
                result.problem_name,
                best,
                result.avg_solve_time().as_secs_f64() * 1000.0,
                result.avg_cells_per_second(),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use fillforge_solver::TerminationReason;

    use super::*;
    use crate::result::BenchmarkRun;

    fn run(run_index: usize, final_amount: f64, reason: TerminationReason) -> BenchmarkRun<f64> {
        BenchmarkRun {
            run_index,
            solve_time: Duration::from_millis(100),
            final_amount,
            item_count: 5,
            reason,
            amount_history: vec![],
            steps: 5,
            conflicts: 2,
            cells_evaluated: 1000,
        }
    }

    fn result() -> BenchmarkResult<f64> {
        let mut result = BenchmarkResult::new("Fill", "default", "fractional");
        result.add_run(run(0, 9.99, TerminationReason::Perfect));
        result.add_run(run(1, 9.5, TerminationReason::Terminated));
        result
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvExporter::to_string(&result());
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "0,100,9.99,5,perfect,5,2,1000,10000.00");
        assert!(lines[2].contains(",terminated,"));
    }

    #[test]
    fn test_markdown_summary() {
        let md = MarkdownReport::to_string(&result());

        assert!(md.contains("| Best Amount | 9.99 |"));
        assert!(md.contains("| Worst Amount | 9.5 |"));
        assert!(md.contains("| Terminated Early | 1 |"));
        assert!(md.contains("| 1 | 100.00 | 9.5 | 5 | terminated | 1000 |"));
    }

    #[test]
    fn test_write_to_writer() {
        let mut buffer = Vec::new();
        CsvExporter::write(&result(), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("run_index"));
    }
}
