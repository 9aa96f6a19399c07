//! Benchmark configuration.

use crate::algo::AlgorithmKind;
use crate::error::Result;
use serde::{Deserialize, Serialize};

fn default_max_items() -> usize {
    10_000
}

/// Secondary ordering bubble sort applies when two priorities are equal.
///
/// Quick, selection and merge sort always compare priority alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Priority only. Equal priorities land wherever the algorithm puts them.
    #[default]
    None,
    /// Equal priorities are ordered by name, lexicographically.
    Name,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Algorithm whose output a comparison keeps.
    #[serde(default)]
    pub keep: AlgorithmKind,
    /// Upper bound accepted by [`crate::bench::SortingBenchmark::try_run_iter`].
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            keep: AlgorithmKind::default(),
            max_items: default_max_items(),
        }
    }
}

impl BenchmarkConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    ///
    /// ```
    /// use grocery_sort::config::{BenchmarkConfig, TieBreak};
    ///
    /// let config = BenchmarkConfig::from_json(r#"{ "tie_break": "name" }"#).unwrap();
    /// assert_eq!(config.tie_break, TieBreak::Name);
    /// assert_eq!(config.max_items, 10_000);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_keep(mut self, keep: AlgorithmKind) -> Self {
        self.keep = keep;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }
}
