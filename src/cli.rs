// src/cli.rs

//! CLI argument parsing for `sortbench` using `clap`.

use crate::bench::{self, ArrayKind, BenchConfig, SortAlgorithm};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

/// Command-line arguments for `sortbench`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sortbench",
    version,
    about = "Compare heap sort against quicksort and mergesort on generated arrays.",
    long_about = None
)]
pub struct CliArgs {
    /// Array sizes to time, comma separated.
    ///
    /// Default: 100,1000,5000,10000.
    #[arg(long, value_delimiter = ',', value_name = "N,...")]
    pub sizes: Vec<usize>,

    /// Array shapes to time. Default: all.
    #[arg(long, value_enum, value_delimiter = ',', value_name = "KIND,...")]
    pub kinds: Vec<ArrayKind>,

    /// Sort routines to time. Default: all.
    #[arg(long, value_enum, value_delimiter = ',', value_name = "ALGORITHM,...")]
    pub algorithms: Vec<SortAlgorithm>,

    /// Keep the best of this many runs per measurement.
    #[arg(long, value_name = "COUNT")]
    pub repetitions: Option<usize>,

    /// Seed for array generation.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SORTBENCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Overlays the flags that were given on top of [`BenchConfig::default`].
    pub fn to_config(&self) -> BenchConfig {
        let mut config = BenchConfig::default();
        if !self.sizes.is_empty() {
            config.sizes = self.sizes.clone();
        }
        if !self.kinds.is_empty() {
            config.kinds = self.kinds.clone();
        }
        if !self.algorithms.is_empty() {
            config.algorithms = self.algorithms.clone();
        }
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config
    }
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Runs the comparison described by `args` and prints the report to stdout.
pub fn run(args: CliArgs) -> Result<()> {
    let config = args.to_config();
    let report = bench::run_comparison(&config).context("sort comparison failed")?;
    print!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_flags() {
        let args = CliArgs::try_parse_from(["sortbench"]).unwrap();
        assert_eq!(args.to_config(), BenchConfig::default());
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = CliArgs::try_parse_from([
            "sortbench",
            "--sizes",
            "10,20",
            "--kinds",
            "sorted,reverse",
            "--algorithms",
            "heap-sort",
            "--repetitions",
            "3",
            "--seed",
            "42",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let config = args.to_config();
        assert_eq!(config.sizes, [10, 20]);
        assert_eq!(config.kinds, [ArrayKind::Sorted, ArrayKind::Reverse]);
        assert_eq!(config.algorithms, [SortAlgorithm::HeapSort]);
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        assert!(CliArgs::try_parse_from(["sortbench", "--kinds", "shuffled"]).is_err());
    }

    #[test]
    fn test_run_reports_invalid_config() {
        let args = CliArgs::try_parse_from(["sortbench", "--repetitions", "0"]).unwrap();
        let err = run(args).unwrap_err();
        assert!(format!("{err:#}").contains("repetitions must be at least 1"));
    }
}
