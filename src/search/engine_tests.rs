//! Tests for engine

use super::*;
use crate::test_utils::test_helpers::{sample_tabs, tab};
use proptest::prelude::*;

fn ids(outcome: &SearchOutcome<'_>) -> Vec<i64> {
    outcome.tabs.iter().map(|found| found.tab.id).collect()
}

#[test]
fn test_empty_query_returns_all_tabs() {
    let tabs = sample_tabs();
    let outcome = search(&tabs, "");

    assert!(outcome.empty_search);
    assert_eq!(ids(&outcome), vec![1, 2, 3, 4]);
    assert!(outcome.tabs.iter().all(|found| found.highlight.is_empty()));
}

#[test]
fn test_empty_needle_after_field_prefix_returns_all_tabs() {
    let tabs = sample_tabs();
    let outcome = search(&tabs, ":url:");

    assert!(outcome.empty_search);
    assert_eq!(outcome.tabs.len(), tabs.len());
}

#[test]
fn test_fuzzy_filters_and_preserves_order() {
    let tabs = sample_tabs();
    let outcome = search(&tabs, "rust");

    assert!(!outcome.empty_search);
    assert_eq!(ids(&outcome), vec![1, 3]);
}

#[test]
fn test_highlight_only_for_matched_fields() {
    let tabs = vec![tab(1, 1, 0, "Rust Programming", "https://example.com")];
    let outcome = search(&tabs, "'rust");

    assert_eq!(outcome.tabs.len(), 1);
    let highlight = &outcome.tabs[0].highlight;
    assert_eq!(highlight.title, Some(vec![Range::new(0, 4)]));
    assert_eq!(highlight.url, None);
}

#[test]
fn test_both_fields_highlighted() {
    let tabs = vec![tab(1, 1, 0, "GitHub", "https://github.com")];
    let outcome = search(&tabs, "'github");

    let highlight = &outcome.tabs[0].highlight;
    assert_eq!(highlight.title, Some(vec![Range::new(0, 6)]));
    assert_eq!(highlight.url, Some(vec![Range::new(8, 14)]));
}

#[test]
fn test_title_selector_skips_url() {
    let tabs = vec![tab(1, 1, 0, "Home", "https://github.com")];

    assert!(search(&tabs, ":title:github").tabs.is_empty());
    assert_eq!(search(&tabs, ":url:github").tabs.len(), 1);
}

#[test]
fn test_url_selector_skips_title() {
    let tabs = vec![tab(1, 1, 0, "GitHub", "about:blank")];

    assert!(search(&tabs, ":url:'github").tabs.is_empty());
    let outcome = search(&tabs, ":title:'github");
    assert_eq!(outcome.tabs[0].highlight.url, None);
}

#[test]
fn test_missing_and_empty_fields_are_not_checked() {
    let mut untitled = tab(1, 1, 0, "", "https://docs.rs");
    untitled.title = None;
    let blank = tab(2, 1, 1, "", "");
    let tabs = vec![untitled, blank];

    // A lone quote is an exact search for "", which matches any present text.
    let outcome = search(&tabs, "'");
    assert!(!outcome.empty_search);
    assert_eq!(ids(&outcome), vec![1]);
    assert_eq!(outcome.tabs[0].highlight.title, None);
    assert_eq!(outcome.tabs[0].highlight.url, Some(vec![]));
}

#[test]
fn test_regexp_query() {
    let tabs = sample_tabs();
    let outcome = search(&tabs, "/^https://(www\\.)?rust-lang");

    assert_eq!(ids(&outcome), vec![1]);
    assert_eq!(outcome.tabs[0].highlight.url, Some(vec![Range::new(0, 21)]));
}

#[test]
fn test_invalid_regexp_degrades_to_fuzzy() {
    let tabs = vec![
        tab(1, 1, 0, "/a(b", "https://a.example"),
        tab(2, 1, 1, "abc", "https://b.example"),
    ];
    let outcome = search(&tabs, "/a(b");

    assert_eq!(ids(&outcome), vec![1]);
}

#[test]
fn test_no_match_returns_empty() {
    let tabs = sample_tabs();
    let outcome = search(&tabs, "zzzzqqq");

    assert!(!outcome.empty_search);
    assert!(outcome.tabs.is_empty());
}

#[test]
fn test_outcome_serializes_with_camel_case() {
    let tabs = vec![tab(7, 2, 0, "Docs", "https://docs.rs")];
    let outcome = search(&tabs, ":title:do");
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["emptySearch"], false);
    assert_eq!(json["tabs"][0]["tab"]["id"], 7);
    assert_eq!(json["tabs"][0]["highlight"]["title"], serde_json::json!([[0, 2]]));
    assert!(json["tabs"][0]["highlight"].get("url").is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_empty_query_never_filters(titles in prop::collection::vec("[a-z ]{0,12}", 0..8)) {
        let tabs: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| tab(i as i64, 1, i, title, ""))
            .collect();

        let outcome = search(&tabs, "");
        prop_assert!(outcome.empty_search);
        prop_assert_eq!(outcome.tabs.len(), tabs.len());
    }

    #[test]
    fn prop_results_are_subsequence_of_input(
        titles in prop::collection::vec("[a-e]{1,8}", 0..10),
        query in "[a-e]{1,3}",
    ) {
        let tabs: Vec<_> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| tab(i as i64, 1, i, title, ""))
            .collect();

        let outcome = search(&tabs, &query);
        let found: Vec<i64> = outcome.tabs.iter().map(|f| f.tab.id).collect();
        let mut sorted = found.clone();
        sorted.sort();
        prop_assert_eq!(found, sorted);
    }
}
