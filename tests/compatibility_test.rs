use grocery_sort::core::Prioritized;
use grocery_sort::prelude::*;

// A caller-defined record that is not an `Item`.
#[derive(Clone, Debug, PartialEq)]
struct Chore {
    title: &'static str,
    urgency: u8,
}

// Downstream crates can supply their own priority and name keys.
impl Prioritized for Chore {
    fn priority(&self) -> i64 {
        self.urgency as i64
    }

    fn name(&self) -> &str {
        self.title
    }
}

#[test]
fn test_external_struct_compatibility() {
    let chores = vec![
        Chore { title: "laundry", urgency: 3 },
        Chore { title: "dishes", urgency: 1 },
        Chore { title: "bins", urgency: 3 },
    ];

    let benchmark = SortingBenchmark::new(BenchmarkConfig::default().with_tie_break(TieBreak::Name));

    let sorted = benchmark.run(&chores, AlgorithmKind::Bubble).sorted;
    let titles: Vec<&str> = sorted.iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["dishes", "bins", "laundry"]);

    // Merge ignores the name and keeps "laundry" ahead of "bins".
    let sorted = benchmark.run(&chores, AlgorithmKind::Merge).sorted;
    let titles: Vec<&str> = sorted.iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["dishes", "laundry", "bins"]);
}

#[test]
fn test_sort_references() {
    let items = [Item::new("b", 2), Item::new("a", 1)];
    let refs: Vec<&Item> = items.iter().collect();

    let (sorted, _) = run(&refs, AlgorithmKind::Selection);
    assert_eq!(sorted[0].name, "a");
    assert_eq!(sorted[1].name, "b");
}
