//! Timing harness.
//!
//! [`SortingBenchmark`] copies the caller's items, sorts the copy with the
//! requested algorithm and measures the sort with a monotonic clock
//! ([`Instant`]). Elapsed time is always reported in microseconds as `f64`;
//! [`ElapsedUnit`] converts for display.

use crate::algo::{AlgorithmKind, sort_by_kind};
use crate::config::BenchmarkConfig;
use crate::core::Prioritized;
use crate::error::{Result, SortError};
use cuneiform::cuneiform;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Result of one algorithm run.
#[derive(Clone, Debug, PartialEq)]
pub struct SortRun<T> {
    pub kind: AlgorithmKind,
    pub sorted: Vec<T>,
    pub elapsed_us: f64,
}

// Cache-aligned per-algorithm timings, indexed by `AlgorithmKind::index`.
#[cuneiform]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timings {
    data: [Option<f64>; 4],
}

impl Timings {
    fn record(&mut self, kind: AlgorithmKind, elapsed_us: f64) {
        self.data[kind.index()] = Some(elapsed_us);
    }

    /// Elapsed microseconds for `kind`, if it was run.
    pub fn get(&self, kind: AlgorithmKind) -> Option<f64> {
        self.data[kind.index()]
    }

    /// `(kind, elapsed_us)` for every algorithm that was run, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (AlgorithmKind, f64)> + '_ {
        AlgorithmKind::all()
            .iter()
            .filter_map(|&kind| self.get(kind).map(|us| (kind, us)))
    }

    /// The algorithm with the smallest recorded time.
    pub fn fastest(&self) -> Option<(AlgorithmKind, f64)> {
        self.iter().min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Outcome of running several algorithms over the same input.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison<T> {
    /// Algorithm whose output is in `sorted`. `None` when nothing was run.
    pub kept: Option<AlgorithmKind>,
    pub sorted: Vec<T>,
    pub timings: Timings,
}

/// Stateless sorting/timing harness.
///
/// # Examples
///
/// ```
/// use grocery_sort::prelude::*;
///
/// let items = vec![Item::new("Milk", 3), Item::new("Bread", 1)];
/// let run = SortingBenchmark::default().run(&items, AlgorithmKind::Merge);
///
/// assert_eq!(run.sorted[0].name, "Bread");
/// assert!(run.elapsed_us >= 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SortingBenchmark {
    config: BenchmarkConfig,
}

impl SortingBenchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Sorts a private copy of `items` with `kind` and times the sort.
    ///
    /// `items` is never modified. The copy is made before the clock starts.
    pub fn run<T: Prioritized + Clone>(&self, items: &[T], kind: AlgorithmKind) -> SortRun<T> {
        let mut sorted = items.to_vec();

        let start = Instant::now();
        sort_by_kind(kind, &mut sorted, self.config.tie_break);
        let elapsed_us = start.elapsed().as_nanos() as f64 / 1_000.0;

        debug!(algorithm = %kind, len = sorted.len(), elapsed_us, "Sort finished");

        SortRun {
            kind,
            sorted,
            elapsed_us,
        }
    }

    /// Like [`SortingBenchmark::run`] but consumes an iterator.
    ///
    /// Fails with [`SortError::InvalidInput`] once the iterator yields more than
    /// `max_items` elements; the rest of the iterator is not pulled.
    pub fn try_run_iter<T, I>(&self, items: I, kind: AlgorithmKind) -> Result<SortRun<T>>
    where
        T: Prioritized + Clone,
        I: IntoIterator<Item = T>,
    {
        let limit = self.config.max_items;
        let collected: Vec<T> = items.into_iter().take(limit.saturating_add(1)).collect();
        if collected.len() > limit {
            return Err(SortError::InvalidInput(format!(
                "more than {} items supplied",
                limit
            )));
        }
        Ok(self.run(&collected, kind))
    }

    /// Runs each of `kinds` in order, each on its own copy of `items`.
    ///
    /// The output of the configured `keep` algorithm is returned; if it is not
    /// among `kinds`, the first kind's output is kept instead.
    #[instrument(skip(self, items, kinds), fields(len = items.len()))]
    pub fn compare<T: Prioritized + Clone>(
        &self,
        items: &[T],
        kinds: &[AlgorithmKind],
    ) -> Comparison<T> {
        let kept = if kinds.contains(&self.config.keep) {
            Some(self.config.keep)
        } else {
            kinds.first().copied()
        };

        let mut timings = Timings::default();
        let mut sorted = None;
        for &kind in kinds {
            let run = self.run(items, kind);
            timings.record(kind, run.elapsed_us);
            if sorted.is_none() && Some(kind) == kept {
                sorted = Some(run.sorted);
            }
        }

        if let Some((kind, us)) = timings.fastest() {
            info!(fastest = %kind, elapsed_us = us, runs = kinds.len(), "Comparison complete");
        }

        Comparison {
            kept,
            sorted: sorted.unwrap_or_else(|| items.to_vec()),
            timings,
        }
    }

    /// [`SortingBenchmark::compare`] over every [`AlgorithmKind`].
    pub fn compare_all<T: Prioritized + Clone>(&self, items: &[T]) -> Comparison<T> {
        self.compare(items, AlgorithmKind::all())
    }
}

/// Sorts a copy of `items` with default configuration.
///
/// Returns the sorted copy and the elapsed time in microseconds.
pub fn run<T: Prioritized + Clone>(items: &[T], kind: AlgorithmKind) -> (Vec<T>, f64) {
    let run = SortingBenchmark::default().run(items, kind);
    (run.sorted, run.elapsed_us)
}

/// Display unit for elapsed times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElapsedUnit {
    #[default]
    Microseconds,
    Seconds,
}

impl ElapsedUnit {
    pub fn convert(&self, elapsed_us: f64) -> f64 {
        match self {
            ElapsedUnit::Microseconds => elapsed_us,
            ElapsedUnit::Seconds => elapsed_us / 1_000_000.0,
        }
    }

    /// ```
    /// use grocery_sort::bench::ElapsedUnit;
    ///
    /// assert_eq!(ElapsedUnit::Microseconds.format(12.5), "12.5000 microseconds");
    /// assert_eq!(ElapsedUnit::Seconds.format(1_500.0), "0.001500 seconds");
    /// ```
    pub fn format(&self, elapsed_us: f64) -> String {
        match self {
            ElapsedUnit::Microseconds => format!("{:.4} microseconds", self.convert(elapsed_us)),
            ElapsedUnit::Seconds => format!("{:.6} seconds", self.convert(elapsed_us)),
        }
    }
}
