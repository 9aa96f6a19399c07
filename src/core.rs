//! Core types for grocery-sort.
//!
//! This module defines:
//! - [`Item`]: the sortable record (identity, name, priority, optional category).
//! - [`Prioritized`]: the key trait every sorting routine works through.
//! - [`Category`] and [`ItemId`].

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque, never-reused identity of an [`Item`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Display grouping for items. Never consulted when sorting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Activity,
    Place,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Activity => "Activity",
            Category::Place => "Place",
        }
    }

    pub fn all() -> &'static [Category] {
        &[Category::Food, Category::Activity, Category::Place]
    }
}

/// A list entry sorted by ascending `priority`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub priority: i64,
    #[serde(default)]
    pub category: Option<Category>,
}

impl Item {
    /// Creates an uncategorized item with a fresh id.
    pub fn new(name: impl Into<String>, priority: i64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            priority,
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Priority: {}", self.name, self.priority)
    }
}

/// A trait for reading the sort key of an element without copying it.
///
/// Every algorithm in [`crate::algo`] orders elements by [`Prioritized::priority`]
/// and, when the name tie-break is enabled, by [`Prioritized::name`].
///
/// # Examples
///
/// ```
/// use grocery_sort::core::Prioritized;
///
/// struct Task {
///     title: String,
///     urgency: u8,
/// }
///
/// impl Prioritized for Task {
///     fn priority(&self) -> i64 {
///         self.urgency as i64
///     }
///
///     fn name(&self) -> &str {
///         &self.title
///     }
/// }
/// ```
pub trait Prioritized {
    /// Primary ascending sort key.
    fn priority(&self) -> i64;

    /// Secondary key, only used by [`crate::config::TieBreak::Name`].
    fn name(&self) -> &str {
        ""
    }
}

impl Prioritized for Item {
    fn priority(&self) -> i64 {
        self.priority
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Prioritized + ?Sized> Prioritized for &T {
    fn priority(&self) -> i64 {
        (**self).priority()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// Bare integers sort by their own value.
macro_rules! impl_prioritized_int {
    ($($t:ty),*) => {
        $(
            impl Prioritized for $t {
                fn priority(&self) -> i64 {
                    *self as i64
                }
            }
        )*
    };
}

impl_prioritized_int!(u8, u16, u32, i8, i16, i32, i64);

// Pairs of (label, priority), handy for fixtures.
impl<S: AsRef<str>> Prioritized for (S, i64) {
    fn priority(&self) -> i64 {
        self.1
    }

    fn name(&self) -> &str {
        self.0.as_ref()
    }
}
