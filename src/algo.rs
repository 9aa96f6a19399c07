//! The four textbook sorting algorithms.
//!
//! All of them sort a mutable slice in place, ascending by [`Prioritized::priority`]:
//! - **Bubble**: adjacent swaps until a pass makes no swap.
//! - **Quick**: Lomuto partition with the last element as pivot (`<=` goes left). Not stable.
//! - **Selection**: first strict minimum of the unsorted suffix swapped into place.
//! - **Merge**: midpoint split, left-biased merge. The only stable variant.
//!
//! The entry point is [`sort_by_kind`]; the timing harness lives in [`crate::bench`].

use crate::config::TieBreak;
use crate::core::Prioritized;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Selector among the four algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    #[default]
    Bubble,
    Quick,
    Selection,
    Merge,
}

impl AlgorithmKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Quick => "Quick Sort",
            AlgorithmKind::Selection => "Selection Sort",
            AlgorithmKind::Merge => "Merge Sort",
        }
    }

    /// Whether equal-priority elements keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(self, AlgorithmKind::Merge)
    }

    pub fn all() -> &'static [AlgorithmKind] {
        &[
            AlgorithmKind::Bubble,
            AlgorithmKind::Quick,
            AlgorithmKind::Selection,
            AlgorithmKind::Merge,
        ]
    }

    /// Position in [`AlgorithmKind::all`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sorts `data` in place with the selected algorithm.
///
/// `tie` only affects [`AlgorithmKind::Bubble`]; the others compare priority alone.
///
/// # Examples
///
/// ```
/// use grocery_sort::algo::{sort_by_kind, AlgorithmKind};
/// use grocery_sort::config::TieBreak;
///
/// let mut data = vec![3, 1, 2];
/// sort_by_kind(AlgorithmKind::Quick, &mut data, TieBreak::None);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn sort_by_kind<T: Prioritized + Clone>(kind: AlgorithmKind, data: &mut [T], tie: TieBreak) {
    match kind {
        AlgorithmKind::Bubble => bubble_sort(data, tie),
        AlgorithmKind::Quick => quick_sort(data),
        AlgorithmKind::Selection => selection_sort(data),
        AlgorithmKind::Merge => merge_sort(data),
    }
}

/// Orders two elements by priority, then by name when `tie` asks for it.
#[inline(always)]
pub fn compare_items<T: Prioritized + ?Sized>(a: &T, b: &T, tie: TieBreak) -> Ordering {
    match a.priority().cmp(&b.priority()) {
        Ordering::Equal if tie == TieBreak::Name => a.name().cmp(b.name()),
        other => other,
    }
}

#[inline(always)]
fn compare_priority<T: Prioritized + ?Sized>(a: &T, b: &T) -> Ordering {
    a.priority().cmp(&b.priority())
}

/// Bubble sort. Terminates after the first pass without a swap.
///
/// With [`TieBreak::Name`], equal priorities are swapped into name order.
pub fn bubble_sort<T: Prioritized>(data: &mut [T], tie: TieBreak) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut sorted = false;
    while !sorted {
        sorted = true;
        for i in 0..len - 1 {
            if compare_items(&data[i], &data[i + 1], tie) == Ordering::Greater {
                data.swap(i, i + 1);
                sorted = false;
            }
        }
    }
}

/// Lomuto quicksort over the whole slice.
pub fn quick_sort<T: Prioritized>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }

    let pivot = partition(data);
    let (left, right) = data.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition around the last element. Returns the pivot's final index.
///
/// Elements less than or equal to the pivot end up on its left, so a run that
/// is already in order is left untouched.
fn partition<T: Prioritized>(data: &mut [T]) -> usize {
    let high = data.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if compare_priority(&data[j], &data[high]) != Ordering::Greater {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

/// Selection sort. Picks the first minimum so already-placed ties are not disturbed.
pub fn selection_sort<T: Prioritized>(data: &mut [T]) {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if compare_priority(&data[j], &data[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
        }
    }
}

/// Top-down merge sort.
///
/// Ties are emitted from the left run first, which makes this sort stable.
pub fn merge_sort<T: Prioritized + Clone>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut data[..mid]);
    merge_sort(&mut data[mid..]);

    let merged = merge(&data[..mid], &data[mid..]);
    data.clone_from_slice(&merged);
}

fn merge<T: Prioritized + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut l, mut r) = (0, 0);

    while l < left.len() && r < right.len() {
        // Strictly-less from the right is the only way it wins.
        if compare_priority(&right[r], &left[l]) == Ordering::Less {
            result.push(right[r].clone());
            r += 1;
        } else {
            result.push(left[l].clone());
            l += 1;
        }
    }

    result.extend_from_slice(&left[l..]);
    result.extend_from_slice(&right[r..]);
    result
}
