//! Benchmark runner.

use std::marker::PhantomData;

use fillforge_core::{Amount, Result};
use fillforge_solver::{Allocator, Termination};

use crate::config::BenchmarkConfig;
use crate::report::{CsvExporter, MarkdownReport};
use crate::result::{BenchmarkResult, BenchmarkRun};

/// Repeatedly runs allocators built by a factory.
///
/// An allocator is single-use, so the factory builds a fresh one for every
/// warmup and measured run.
///
/// # Type Parameters
///
/// * `A` - The amount type
/// * `T` - The termination of the produced allocators
/// * `F` - Allocator factory: `Fn() -> Result<Allocator<A, T>>`
pub struct Benchmark<A, T, F>
where
    A: Amount,
    T: Termination<A>,
    F: Fn() -> Result<Allocator<A, T>>,
{
    config: BenchmarkConfig,
    solver_name: String,
    problem_name: String,
    factory: F,
    _phantom: PhantomData<(A, T)>,
}

impl<A, T, F> Benchmark<A, T, F>
where
    A: Amount,
    T: Termination<A>,
    F: Fn() -> Result<Allocator<A, T>>,
{
    /// Creates a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `config` - Benchmark configuration (warmup count, run count, etc.)
    /// * `solver_name` - Name identifying the filler configuration
    /// * `problem_name` - Name identifying the item list and ceiling
    /// * `factory` - Builds a fresh allocator per run
    pub fn new(
        config: BenchmarkConfig,
        solver_name: impl Into<String>,
        problem_name: impl Into<String>,
        factory: F,
    ) -> Self {
        Self {
            config,
            solver_name: solver_name.into(),
            problem_name: problem_name.into(),
            factory,
            _phantom: PhantomData,
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs warmups, then measured runs, and writes any configured reports.
    ///
    /// # Errors
    ///
    /// Returns the factory's error, or an I/O error if a report cannot be
    /// written.
    pub fn run(&self) -> Result<BenchmarkResult<A>> {
        for _ in 0..self.config.warmup_count() {
            (self.factory)()?.solve();
        }

        let mut result =
            BenchmarkResult::new(self.config.name(), &self.solver_name, &self.problem_name);

        for run_index in 0..self.config.run_count() {
            let fill = (self.factory)()?.solve();
            result.add_run(BenchmarkRun::from_result(run_index, fill));
        }

        if let Some(path) = self.config.csv_output_path() {
            CsvExporter::to_file(&result, path)?;
        }
        if let Some(path) = self.config.markdown_output_path() {
            MarkdownReport::to_file(&result, path)?;
        }

        Ok(result)
    }
}

/// Builder for creating benchmarks with a fluent API.
pub struct BenchmarkBuilder<A: Amount> {
    config: BenchmarkConfig,
    solver_name: String,
    problem_name: String,
    _phantom: PhantomData<A>,
}

impl<A: Amount> BenchmarkBuilder<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: BenchmarkConfig::new(name),
            solver_name: "default".to_string(),
            problem_name: "default".to_string(),
            _phantom: PhantomData,
        }
    }

    pub fn with_solver_name(mut self, name: impl Into<String>) -> Self {
        self.solver_name = name.into();
        self
    }

    pub fn with_problem_name(mut self, name: impl Into<String>) -> Self {
        self.problem_name = name.into();
        self
    }

    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.config = self.config.with_warmup_count(count);
        self
    }

    pub fn with_run_count(mut self, count: usize) -> Self {
        self.config = self.config.with_run_count(count);
        self
    }

    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_csv_output(path);
        self
    }

    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.config = self.config.with_markdown_output(path);
        self
    }

    /// Builds the benchmark with the given allocator factory.
    pub fn build<T, F>(self, factory: F) -> Benchmark<A, T, F>
    where
        T: Termination<A>,
        F: Fn() -> Result<Allocator<A, T>>,
    {
        Benchmark::new(self.config, self.solver_name, self.problem_name, factory)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use fillforge_core::{FillForgeError, Item};
    use fillforge_solver::StepCountTermination;
    use fillforge_test::scenario::scenario;

    use super::*;

    #[test]
    fn test_warmups_are_not_measured() {
        let calls = Cell::new(0);
        let instance = scenario("swap_one_for_run").unwrap();

        let benchmark = BenchmarkBuilder::new("counted")
            .with_warmup_count(2)
            .with_run_count(4)
            .build(|| {
                calls.set(calls.get() + 1);
                Allocator::new(instance.items(), instance.ceiling)
            });
        let result = benchmark.run().unwrap();

        assert_eq!(calls.get(), 6);
        assert_eq!(result.run_count(), 4);
        assert!(result.runs.iter().all(|r| r.final_amount == 480.0));
        assert_eq!(result.runs[3].run_index, 3);
    }

    #[test]
    fn test_factory_error_is_returned() {
        let benchmark = BenchmarkBuilder::new("invalid")
            .build(|| Allocator::new(vec![Item::new("bad", -1.0)], 10.0));

        let err = benchmark.run().unwrap_err();
        assert!(matches!(err, FillForgeError::InvalidAmount { .. }));
    }

    #[test]
    fn test_terminated_runs_are_recorded() {
        let benchmark = BenchmarkBuilder::new("limited")
            .with_warmup_count(0)
            .with_run_count(1)
            .build(|| {
                Ok(Allocator::new(vec![Item::new("a", 3_i64), Item::new("b", 2)], 10)?
                    .with_termination(StepCountTermination::new(1)))
            });

        let result = benchmark.run().unwrap();
        assert_eq!(result.runs[0].final_amount, 3);
        assert!(result.runs[0].terminated_early());
    }

    #[test]
    fn test_reports_written_to_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("runs.csv");
        let md = dir.path().join("report.md");

        let benchmark = BenchmarkBuilder::new("files")
            .with_warmup_count(0)
            .with_run_count(2)
            .with_csv_output(csv.to_string_lossy())
            .with_markdown_output(md.to_string_lossy())
            .build(|| Allocator::new(vec![Item::new("a", 5_u64)], 5));
        benchmark.run().unwrap();

        let csv = std::fs::read_to_string(csv).unwrap();
        assert_eq!(csv.lines().count(), 3);
        let md = std::fs::read_to_string(md).unwrap();
        assert!(md.contains("# Benchmark: files"));
    }
}
