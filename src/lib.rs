//! # grocery-sort
//!
//! `grocery-sort` sorts small item lists (groceries, activities, places) by
//! priority with four textbook algorithms and times each of them, so the
//! results can be compared side by side.
//!
//! ## Key Features
//!
//! - **Four algorithms**: bubble, quick (Lomuto), selection and merge sort behind a
//!   single [`AlgorithmKind`] selector.
//! - **Independent copies**: every run sorts its own copy of the input, so one
//!   algorithm never sees another's partial ordering and the caller's data is untouched.
//! - **Monotonic timing**: elapsed time is read from [`std::time::Instant`] and
//!   reported in microseconds.
//! - **Configurable tie-break**: bubble sort can optionally order equal priorities
//!   by name ([`TieBreak::Name`]).
//! - **Generic keys**: the [`Prioritized`] trait lets any type be sorted, not just [`Item`].
//!
//! ## Usage
//!
//! ### Single run
//!
//! ```rust
//! use grocery_sort::prelude::*;
//!
//! let items = vec![Item::new("B", 2), Item::new("A", 1), Item::new("C", 1)];
//! let (sorted, elapsed_us) = run(&items, AlgorithmKind::Merge);
//!
//! let names: Vec<&str> = sorted.iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, vec!["A", "C", "B"]);
//! assert!(elapsed_us >= 0.0);
//! ```
//!
//! ### Comparing all algorithms
//!
//! ```rust
//! use grocery_sort::prelude::*;
//!
//! let benchmark = SortingBenchmark::new(BenchmarkConfig::default().with_tie_break(TieBreak::Name));
//! let items = vec![Item::new("Milk", 3), Item::new("Eggs", 1), Item::new("Bread", 3)];
//!
//! let comparison = benchmark.compare_all(&items);
//! assert_eq!(comparison.kept, Some(AlgorithmKind::Bubble));
//! assert_eq!(comparison.timings.iter().count(), 4);
//!
//! let names: Vec<&str> = comparison.sorted.iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, vec!["Eggs", "Bread", "Milk"]);
//! ```
//!
//! ## Stability
//!
//! Only [`AlgorithmKind::Merge`] is stable. Quick, selection and bubble sort (without
//! the name tie-break) may reorder equal-priority items.

pub mod algo;
pub mod bench;
pub mod config;
pub mod core;
pub mod error;
pub mod generator;
pub mod list;

pub use crate::algo::{AlgorithmKind, sort_by_kind};
pub use crate::bench::{Comparison, ElapsedUnit, SortRun, SortingBenchmark, Timings, run};
pub use crate::config::{BenchmarkConfig, TieBreak};
pub use crate::core::{Category, Item, ItemId, Prioritized};
pub use crate::error::{Result, SortError};
pub use crate::generator::ItemGenerator;
pub use crate::list::{ItemList, PriorityRules};

pub mod prelude {
    pub use crate::algo::{AlgorithmKind, sort_by_kind};
    pub use crate::bench::{Comparison, ElapsedUnit, SortRun, SortingBenchmark, run};
    pub use crate::config::{BenchmarkConfig, TieBreak};
    pub use crate::core::{Category, Item, Prioritized};
    pub use crate::list::{ItemList, PriorityRules};
}
