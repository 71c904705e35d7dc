//! Benchmarking framework for FillForge.
//!
//! Runs an allocator factory repeatedly against the same instance, with
//! warmup runs before measurement, and exports the collected runs to CSV
//! and Markdown.
//!
//! # Example
//!
//! ```
//! use fillforge_benchmark::{Benchmark, BenchmarkConfig, MarkdownReport};
//! use fillforge_core::Item;
//! use fillforge_solver::Allocator;
//!
//! let items = vec![Item::new("1", 260), Item::new("2", 210), Item::new("3", 100)];
//!
//! let config = BenchmarkConfig::new("Small fill")
//!     .with_warmup_count(1)
//!     .with_run_count(3);
//! let benchmark = Benchmark::new(config, "default", "three-items", || {
//!     Allocator::new(items.clone(), 500)
//! });
//!
//! let result = benchmark.run().unwrap();
//! assert_eq!(result.run_count(), 3);
//! assert_eq!(result.best_amount(), Some(470));
//! assert!(MarkdownReport::to_string(&result).contains("# Benchmark: Small fill"));
//! ```

mod config;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun};
pub use runner::{Benchmark, BenchmarkBuilder};
