//! Sort comparison harness
//!
//! Times [`heap_sort`](crate::engine::heap_sort) against the quicksort and
//! mergesort baselines (and the standard library's unstable sort) over
//! random, already sorted and reverse sorted arrays of several sizes.
//!
//! Arrays are generated from a seeded [`StdRng`], so two runs with the same
//! [`BenchConfig`] time the same inputs. Every sort result is checked before
//! its timing is recorded.
//!
//! # Example
//!
//! ```rust
//! use task_heap::bench::{run_comparison, ArrayKind, BenchConfig, SortAlgorithm};
//!
//! let config = BenchConfig {
//!     sizes: vec![10, 100],
//!     ..BenchConfig::default()
//! };
//! let report = run_comparison(&config).unwrap();
//! let series = report.series(ArrayKind::Reverse, SortAlgorithm::HeapSort).unwrap();
//! assert_eq!(series.timings.len(), 2);
//! ```

pub mod baseline;

use crate::engine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Default array sizes, matching the classic heapsort comparison
pub const DEFAULT_SIZES: [usize; 4] = [100, 1_000, 5_000, 10_000];

/// Default seed for array generation
pub const DEFAULT_SEED: u64 = 0x5eed_4ea9;

/// Shape of a generated input array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ArrayKind {
    /// Uniform values in `0..=size`
    Random,
    /// `0, 1, ..., size - 1`
    Sorted,
    /// `size, size - 1, ..., 1`
    Reverse,
}

impl ArrayKind {
    pub const ALL: [ArrayKind; 3] = [ArrayKind::Random, ArrayKind::Sorted, ArrayKind::Reverse];

    pub fn name(self) -> &'static str {
        match self {
            ArrayKind::Random => "random",
            ArrayKind::Sorted => "sorted",
            ArrayKind::Reverse => "reverse",
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A sort routine the harness can time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortAlgorithm {
    HeapSort,
    QuickSort,
    MergeSort,
    /// `slice::sort_unstable`, for scale
    Std,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::HeapSort,
        SortAlgorithm::QuickSort,
        SortAlgorithm::MergeSort,
        SortAlgorithm::Std,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::HeapSort => "heapsort",
            SortAlgorithm::QuickSort => "quicksort",
            SortAlgorithm::MergeSort => "mergesort",
            SortAlgorithm::Std => "std",
        }
    }

    /// Sorts a copy of `input`
    pub fn run(self, input: &[i64]) -> Vec<i64> {
        match self {
            SortAlgorithm::HeapSort => {
                let mut sorted = input.to_vec();
                engine::heap_sort(&mut sorted);
                sorted
            }
            SortAlgorithm::QuickSort => baseline::quicksort(input),
            SortAlgorithm::MergeSort => baseline::mergesort(input),
            SortAlgorithm::Std => {
                let mut sorted = input.to_vec();
                sorted.sort_unstable();
                sorted
            }
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised by the comparison harness
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    #[error("no array sizes configured")]
    EmptySizes,
    #[error("no array kinds configured")]
    EmptyKinds,
    #[error("no sort algorithms configured")]
    EmptyAlgorithms,
    #[error("repetitions must be at least 1")]
    ZeroRepetitions,
    #[error("{algorithm} produced an unsorted result for a {kind} array of size {size}")]
    Unsorted {
        algorithm: SortAlgorithm,
        kind: ArrayKind,
        size: usize,
    },
}

/// Generates an input array of the given shape
pub fn generate<R: Rng + ?Sized>(kind: ArrayKind, size: usize, rng: &mut R) -> Vec<i64> {
    let upper = size as i64;
    match kind {
        ArrayKind::Random => (0..size).map(|_| rng.gen_range(0..=upper)).collect(),
        ArrayKind::Sorted => (0..upper).collect(),
        ArrayKind::Reverse => (1..=upper).rev().collect(),
    }
}

/// Wall time of one call of `sort` over `input`
///
/// The result of the sort is passed through [`black_box`] so the call is not
/// optimised away.
pub fn measure_time<T, R, F>(sort: F, input: &[T]) -> Duration
where
    F: FnOnce(&[T]) -> R,
{
    timed(sort, input).0
}

fn timed<T, R, F>(sort: F, input: &[T]) -> (Duration, R)
where
    F: FnOnce(&[T]) -> R,
{
    let start = Instant::now();
    let output = black_box(sort(black_box(input)));
    (start.elapsed(), output)
}

fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

fn dedup_in_order<T: PartialEq + Copy>(items: &[T]) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for &item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Parameters of a comparison run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Array sizes, one table row each
    pub sizes: Vec<usize>,
    pub kinds: Vec<ArrayKind>,
    pub algorithms: Vec<SortAlgorithm>,
    /// Each measurement keeps the best of this many runs
    pub repetitions: usize,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            kinds: ArrayKind::ALL.to_vec(),
            algorithms: SortAlgorithm::ALL.to_vec(),
            repetitions: 1,
            seed: DEFAULT_SEED,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::EmptySizes);
        }
        if self.kinds.is_empty() {
            return Err(BenchError::EmptyKinds);
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::EmptyAlgorithms);
        }
        if self.repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        Ok(())
    }
}

/// Timings of one algorithm on one array kind, one entry per size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub kind: ArrayKind,
    pub algorithm: SortAlgorithm,
    pub timings: Vec<Duration>,
}

/// Result of [`run_comparison`]
#[derive(Debug, Clone)]
pub struct Report {
    sizes: Vec<usize>,
    kinds: Vec<ArrayKind>,
    algorithms: Vec<SortAlgorithm>,
    series: Vec<Series>,
}

impl Report {
    fn new(config: &BenchConfig) -> Self {
        let kinds = dedup_in_order(&config.kinds);
        let algorithms = dedup_in_order(&config.algorithms);
        let series = kinds
            .iter()
            .flat_map(|&kind| {
                algorithms.iter().map(move |&algorithm| Series {
                    kind,
                    algorithm,
                    timings: Vec::with_capacity(config.sizes.len()),
                })
            })
            .collect();
        Self {
            sizes: config.sizes.clone(),
            kinds,
            algorithms,
            series,
        }
    }

    fn record(&mut self, kind: ArrayKind, algorithm: SortAlgorithm, elapsed: Duration) {
        if let Some(series) = self
            .series
            .iter_mut()
            .find(|s| s.kind == kind && s.algorithm == algorithm)
        {
            series.timings.push(elapsed);
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn series(&self, kind: ArrayKind, algorithm: SortAlgorithm) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.kind == kind && s.algorithm == algorithm)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (table, &kind) in self.kinds.iter().enumerate() {
            if table > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Sorting performance: {kind} arrays (ms)")?;
            write!(f, "{:>10}", "size")?;
            for algorithm in &self.algorithms {
                write!(f, " {:>12}", algorithm.name())?;
            }
            writeln!(f)?;

            for (row, size) in self.sizes.iter().enumerate() {
                write!(f, "{size:>10}")?;
                for &algorithm in &self.algorithms {
                    match self
                        .series(kind, algorithm)
                        .and_then(|s| s.timings.get(row))
                    {
                        Some(elapsed) => write!(f, " {:>12.3}", elapsed.as_secs_f64() * 1e3)?,
                        None => write!(f, " {:>12}", "-")?,
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Times every configured algorithm on every configured array kind and size
///
/// For each size and kind a single array is generated and shared by all
/// algorithms. Each measurement is the best of `repetitions` runs.
pub fn run_comparison(config: &BenchConfig) -> Result<Report, BenchError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = Report::new(config);
    let kinds = report.kinds.clone();
    let algorithms = report.algorithms.clone();

    info!(
        sizes = ?config.sizes,
        repetitions = config.repetitions,
        seed = config.seed,
        "starting sort comparison"
    );

    for &size in &config.sizes {
        for &kind in &kinds {
            let input = generate(kind, size, &mut rng);
            for &algorithm in &algorithms {
                let mut best = Duration::MAX;
                for _ in 0..config.repetitions {
                    let (elapsed, output) = timed(|values| algorithm.run(values), &input);
                    if output.len() != input.len() || !is_sorted(&output) {
                        return Err(BenchError::Unsorted {
                            algorithm,
                            kind,
                            size,
                        });
                    }
                    best = best.min(elapsed);
                }
                debug!(%algorithm, %kind, size, elapsed_us = best.as_micros() as u64, "measured");
                report.record(kind, algorithm, best);
            }
        }
    }

    info!("sort comparison finished");
    Ok(report)
}
