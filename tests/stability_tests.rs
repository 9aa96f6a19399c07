use grocery_sort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn test_merge_three_element_case() {
    // mid = 1: left = [B/2], right = [A/1, C/1]. A and C both come from the
    // right half and keep their input order; B is emitted last.
    let input = vec![Item::new("B", 2), Item::new("A", 1), Item::new("C", 1)];

    let sorted = SortingBenchmark::default()
        .run(&input, AlgorithmKind::Merge)
        .sorted;

    assert_eq!(names(&sorted), vec!["A", "C", "B"]);
}

#[test]
fn test_merge_left_bias_across_halves() {
    // mid = 2: the tie between "first" (left half) and "second" (right half)
    // must resolve in favour of the left half.
    let input = vec![
        Item::new("first", 1),
        Item::new("z", 9),
        Item::new("second", 1),
        Item::new("y", 0),
    ];

    let sorted = SortingBenchmark::default()
        .run(&input, AlgorithmKind::Merge)
        .sorted;

    assert_eq!(names(&sorted), vec!["y", "first", "second", "z"]);
}

#[test]
fn test_merge_is_stable_on_random_duplicates() {
    let mut rng = StdRng::seed_from_u64(1234);
    let benchmark = SortingBenchmark::default();

    for _ in 0..50 {
        let count = rng.random_range(0..80);
        // Name carries the input position so stability can be checked.
        let input: Vec<Item> = (0..count)
            .map(|i| Item::new(format!("{:03}", i), rng.random_range(1..=3)))
            .collect();

        let sorted = benchmark.run(&input, AlgorithmKind::Merge).sorted;

        for pair in sorted.windows(2) {
            if pair[0].priority == pair[1].priority {
                assert!(pair[0].name < pair[1].name, "{} before {}", pair[0].name, pair[1].name);
            }
        }
    }
}

#[test]
fn test_quick_lomuto_is_not_stable() {
    // Pivot "z" is swapped with "x" at index 0, carrying "x" behind "y".
    let input = vec![Item::new("x", 1), Item::new("y", 1), Item::new("z", 0)];

    let sorted = SortingBenchmark::default()
        .run(&input, AlgorithmKind::Quick)
        .sorted;

    assert_eq!(names(&sorted), vec!["z", "y", "x"]);
    assert!(!AlgorithmKind::Quick.is_stable());
    assert!(AlgorithmKind::Merge.is_stable());
}

#[test]
fn test_bubble_tie_break_policy() {
    let input = vec![Item::new("Milk", 2), Item::new("Bread", 2), Item::new("Eggs", 1)];

    // Priority only: adjacent swaps never reorder equals.
    let plain = SortingBenchmark::default()
        .run(&input, AlgorithmKind::Bubble)
        .sorted;
    assert_eq!(names(&plain), vec!["Eggs", "Milk", "Bread"]);

    let by_name = SortingBenchmark::new(BenchmarkConfig::default().with_tie_break(TieBreak::Name))
        .run(&input, AlgorithmKind::Bubble)
        .sorted;
    assert_eq!(names(&by_name), vec!["Eggs", "Bread", "Milk"]);
}

#[test]
fn test_selection_picks_first_minimum() {
    let input = vec![Item::new("x", 2), Item::new("p", 1), Item::new("q", 1)];

    let sorted = SortingBenchmark::default()
        .run(&input, AlgorithmKind::Selection)
        .sorted;

    // i = 0 swaps in "p"; "x" moves to index 1, then "q" is swapped in front of it.
    assert_eq!(names(&sorted), vec!["p", "q", "x"]);
}

#[test]
fn test_merge_stays_left_biased_with_name_tie_break() {
    let input = vec![Item::new("z", 1), Item::new("a", 1), Item::new("m", 0)];
    let benchmark = SortingBenchmark::new(BenchmarkConfig::default().with_tie_break(TieBreak::Name));

    let merged = benchmark.run(&input, AlgorithmKind::Merge).sorted;
    assert_eq!(names(&merged), vec!["m", "z", "a"]);

    // Bubble is the only algorithm that consults names.
    let bubbled = benchmark.run(&input, AlgorithmKind::Bubble).sorted;
    assert_eq!(names(&bubbled), vec!["m", "a", "z"]);
}
