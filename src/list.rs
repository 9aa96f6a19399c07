//! The working collection behind the app's list screen.
//!
//! [`ItemList`] validates new entries against [`PriorityRules`], deletes by
//! position or id, filters by category and hands snapshots to a
//! [`SortingBenchmark`].

use crate::bench::{Comparison, SortingBenchmark, Timings};
use crate::core::{Category, Item, ItemId};
use crate::error::{Result, SortError};
use crate::generator::ItemGenerator;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::debug;

/// Accepted priority ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityRules {
    /// Uncategorized items, priority 1–5.
    #[default]
    Basic,
    /// Categorized items, priority 1–20 (Food 1–10).
    Categorized,
}

impl PriorityRules {
    pub fn range_for(&self, category: Option<Category>) -> RangeInclusive<i64> {
        match (self, category) {
            (PriorityRules::Basic, _) => 1..=5,
            (PriorityRules::Categorized, Some(Category::Food)) => 1..=10,
            (PriorityRules::Categorized, _) => 1..=20,
        }
    }

    pub fn uses_categories(&self) -> bool {
        matches!(self, PriorityRules::Categorized)
    }

    pub fn validate(&self, priority: i64, category: Option<Category>) -> Result<()> {
        let range = self.range_for(category);
        if range.contains(&priority) {
            Ok(())
        } else {
            Err(SortError::PriorityOutOfRange {
                priority,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ItemList {
    items: Vec<Item>,
    rules: PriorityRules,
    last_timings: Option<Timings>,
}

impl ItemList {
    pub fn new(rules: PriorityRules) -> Self {
        Self {
            items: Vec::new(),
            rules,
            last_timings: None,
        }
    }

    pub fn rules(&self) -> PriorityRules {
        self.rules
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Timings from the most recent [`ItemList::sort_with`].
    pub fn last_timings(&self) -> Option<&Timings> {
        self.last_timings.as_ref()
    }

    /// Validates and appends a new item. Returns its id.
    ///
    /// Under [`PriorityRules::Basic`] the category is dropped.
    pub fn add(
        &mut self,
        name: &str,
        priority: i64,
        category: Option<Category>,
    ) -> Result<ItemId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SortError::EmptyName);
        }
        let category = category.filter(|_| self.rules.uses_categories());
        self.rules.validate(priority, category)?;

        let mut item = Item::new(name, priority);
        item.category = category;
        let id = item.id;
        self.items.push(item);
        debug!(%id, priority, "Item added");
        Ok(id)
    }

    /// [`ItemList::add`] with the priority still in its text form.
    pub fn add_parsed(
        &mut self,
        name: &str,
        priority: &str,
        category: Option<Category>,
    ) -> Result<ItemId> {
        let parsed = priority
            .trim()
            .parse::<i64>()
            .map_err(|_| SortError::UnparsablePriority(priority.to_string()))?;
        self.add(name, parsed, category)
    }

    /// Removes the items at `offsets`. Out-of-range and repeated offsets are ignored.
    pub fn remove_at(&mut self, offsets: &[usize]) -> Vec<Item> {
        let mut offsets: Vec<usize> = offsets
            .iter()
            .copied()
            .filter(|&i| i < self.items.len())
            .collect();
        offsets.sort_unstable();
        offsets.dedup();

        // Highest index first so the remaining offsets stay valid.
        let mut removed: Vec<Item> = offsets
            .iter()
            .rev()
            .map(|&i| self.items.remove(i))
            .collect();
        removed.reverse();
        removed
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Items in `category`, or every item when `category` is `None`.
    pub fn filtered(&self, category: Option<Category>) -> impl Iterator<Item = &Item> + '_ {
        self.items
            .iter()
            .filter(move |item| category.is_none() || item.category == category)
    }

    /// Appends `count` random items that satisfy this list's rules.
    pub fn extend_random<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        let generator = ItemGenerator::new(self.rules);
        self.items.extend(generator.generate(rng, count));
    }

    /// Runs every algorithm over the current items and replaces them with the
    /// kept result.
    pub fn sort_with(&mut self, benchmark: &SortingBenchmark) -> &Timings {
        let Comparison {
            sorted, timings, ..
        } = benchmark.compare_all(&self.items);
        self.items = sorted;
        self.last_timings.insert(timings)
    }
}
