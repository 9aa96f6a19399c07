use grocery_sort::SortError;
use grocery_sort::prelude::*;

#[test]
fn test_defaults() {
    let config = BenchmarkConfig::default();
    assert_eq!(config.tie_break, TieBreak::None);
    assert_eq!(config.keep, AlgorithmKind::Bubble);
    assert_eq!(config.max_items, 10_000);

    assert_eq!(BenchmarkConfig::from_json("{}").unwrap(), config);
}

#[test]
fn test_from_json() {
    let config = BenchmarkConfig::from_json(
        r#"{ "tie_break": "name", "keep": "merge", "max_items": 100 }"#,
    )
    .unwrap();

    assert_eq!(config.tie_break, TieBreak::Name);
    assert_eq!(config.keep, AlgorithmKind::Merge);
    assert_eq!(config.max_items, 100);
}

#[test]
fn test_invalid_json() {
    let err = BenchmarkConfig::from_json(r#"{ "keep": "bogo" }"#).unwrap_err();
    assert!(matches!(err, SortError::Config(_)));
    assert!(err.to_string().starts_with("Config error"));
}
