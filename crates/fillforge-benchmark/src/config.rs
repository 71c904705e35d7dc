//! Benchmark configuration.

/// Configuration for a benchmark run.
///
/// Controls warmup iterations, measurement runs, and optional output paths.
///
/// # Example
///
/// ```
/// use fillforge_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_warmup_count(3)
///     .with_run_count(10)
///     .with_csv_output("results.csv");
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// assert_eq!(config.csv_output_path(), Some("results.csv"));
/// assert_eq!(config.markdown_output_path(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a configuration with one warmup run and three measured runs.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 1,
            run_count: 3,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
