use serde::Serialize;

use super::query::{FieldSelector, MatchAlgorithm, ParsedQuery};
use super::range::Range;
use crate::tabs::TabRecord;

/// Highlight ranges per field. A field is `None` when it was not checked or
/// did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<Range>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<Range>>,
}

impl Highlight {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none()
    }
}

/// A tab from the caller's snapshot together with what matched in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundTab<'a> {
    pub tab: &'a TabRecord,
    pub highlight: Highlight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome<'a> {
    pub tabs: Vec<FoundTab<'a>>,
    /// The query had no needle, so every tab was returned unfiltered.
    pub empty_search: bool,
}

/// Filters a tab snapshot by a raw query string.
///
/// Stateless; the engine never holds on to the tabs it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn search<'a>(&self, tabs: &'a [TabRecord], input: &str) -> SearchOutcome<'a> {
        let query = ParsedQuery::parse(input);

        if query.is_empty() {
            return SearchOutcome {
                tabs: tabs
                    .iter()
                    .map(|tab| FoundTab {
                        tab,
                        highlight: Highlight::default(),
                    })
                    .collect(),
                empty_search: true,
            };
        }

        let found = tabs
            .iter()
            .filter_map(|tab| match_tab(tab, &query.algorithm, query.selector))
            .collect();

        SearchOutcome {
            tabs: found,
            empty_search: false,
        }
    }
}

/// Shorthand for `SearchEngine::new().search(tabs, input)`.
pub fn search<'a>(tabs: &'a [TabRecord], input: &str) -> SearchOutcome<'a> {
    SearchEngine::new().search(tabs, input)
}

fn match_tab<'a>(
    tab: &'a TabRecord,
    algorithm: &MatchAlgorithm,
    selector: FieldSelector,
) -> Option<FoundTab<'a>> {
    let highlight = Highlight {
        title: match_field(algorithm, selector.title, tab.title.as_deref()),
        url: match_field(algorithm, selector.url, tab.url.as_deref()),
    };

    if highlight.is_empty() {
        return None;
    }

    Some(FoundTab { tab, highlight })
}

fn match_field(algorithm: &MatchAlgorithm, enabled: bool, field: Option<&str>) -> Option<Vec<Range>> {
    let haystack = field.filter(|text| enabled && !text.is_empty())?;
    let result = algorithm.matches(haystack);
    result.found.then_some(result.positions)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
