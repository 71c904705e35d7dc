//! `fillforge` command-line filler.

mod items;
mod output;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use fillforge::{Allocator, FillForgeError, FillerConfig, Result, CONFIG_FILE};
use fillforge_benchmark::{Benchmark, BenchmarkConfig, MarkdownReport};

#[derive(Debug, Parser)]
#[command(name = "fillforge", version, about = "Fill a ceiling as closely as possible without going over")]
struct Cli {
    /// Log conflicts and reconciliations too (-v), or every item (-vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress the console log
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill the ceiling from an item file
    Solve {
        #[command(flatten)]
        input: Input,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time repeated fills of an item file and print a Markdown report
    Bench {
        #[command(flatten)]
        input: Input,

        /// Measured runs
        #[arg(long, default_value_t = 5)]
        runs: usize,

        /// Unmeasured runs before measuring
        #[arg(long, default_value_t = 1)]
        warmup: usize,

        /// Also write the runs as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct Input {
    /// Item file (.json or .toml)
    #[arg(long)]
    items: PathBuf,

    /// Capacity to fill
    #[arg(long, allow_negative_numbers = true)]
    ceiling: f64,

    /// Filler configuration (.toml, .yaml or .yml); defaults to ./fillforge.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        fillforge::console::init_with_filter(log_filter(cli.verbose));
    }

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Solve { input, json } => solve(&input, json),
        Command::Bench {
            input,
            runs,
            warmup,
            csv,
        } => bench(&input, runs, warmup, csv.as_deref()),
    }
}

fn solve(input: &Input, json: bool) -> Result<()> {
    let items = items::load_items(&input.items)?;
    let config = load_config(input.config.as_deref())?;

    let result = fillforge::solve_with_config(items, input.ceiling, &config)?;

    if json {
        let rendered =
            output::to_json(&result).map_err(|e| FillForgeError::Parse(e.to_string()))?;
        println!("{}", rendered);
    } else {
        println!("{}", output::to_table(&result));
    }
    Ok(())
}

fn bench(input: &Input, runs: usize, warmup: usize, csv: Option<&Path>) -> Result<()> {
    let items = items::load_items(&input.items)?;
    let config = load_config(input.config.as_deref())?;
    let problem_name = input
        .items
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "items".to_string());

    let mut bench_config = BenchmarkConfig::new(format!("{} @ {}", problem_name, input.ceiling))
        .with_warmup_count(warmup)
        .with_run_count(runs);
    if let Some(path) = csv {
        bench_config = bench_config.with_csv_output(path.to_string_lossy());
    }

    let ceiling = input.ceiling;
    let benchmark = Benchmark::new(bench_config, "default", problem_name, || {
        Allocator::from_config(items.clone(), ceiling, &config)
    });
    let result = benchmark.run()?;

    println!("{}", MarkdownReport::to_string(&result));
    Ok(())
}

/// Loads the configuration named on the command line, or `fillforge.toml`
/// from the working directory when present.
fn load_config(path: Option<&Path>) -> Result<FillerConfig> {
    let loaded = match path {
        Some(path) => match items::extension(path).as_deref() {
            Some("yaml" | "yml") => FillerConfig::from_yaml_file(path),
            _ => FillerConfig::from_toml_file(path),
        },
        None if Path::new(CONFIG_FILE).exists() => FillerConfig::load(CONFIG_FILE),
        None => return Ok(FillerConfig::default()),
    };
    loaded.map_err(|e| FillForgeError::Config(e.to_string()))
}

fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "fillforge_solver=info",
        1 => "fillforge_solver=debug",
        _ => "fillforge_solver=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_solve() {
        let cli = Cli::parse_from([
            "fillforge", "solve", "--items", "items.json", "--ceiling", "9.99", "--json",
        ]);
        match cli.command {
            Command::Solve { input, json } => {
                assert_eq!(input.items, PathBuf::from("items.json"));
                assert_eq!(input.ceiling, 9.99);
                assert!(json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_bench_defaults() {
        let cli = Cli::parse_from(["fillforge", "bench", "--items", "a.toml", "--ceiling", "10", "-v"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Bench { runs, warmup, csv, .. } => {
                assert_eq!(runs, 5);
                assert_eq!(warmup, 1);
                assert!(csv.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_load_yaml_config() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "tie_break: id").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.tie_break, fillforge::TieBreak::Id);
    }

    #[test]
    fn test_bad_config_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "tie_break = \"sideways\"").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, FillForgeError::Config(_)));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(0), "fillforge_solver=info");
        assert_eq!(log_filter(2), "fillforge_solver=trace");
    }
}
