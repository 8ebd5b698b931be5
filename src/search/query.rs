use log::debug;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::matcher::{exact_search, fuzzy_search, regexp_search};
use super::range::MatchResult;

/// Which tab fields a query is allowed to match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSelector {
    pub title: bool,
    pub url: bool,
}

impl FieldSelector {
    pub const ALL: Self = Self {
        title: true,
        url: true,
    };

    const NONE: Self = Self {
        title: false,
        url: false,
    };
}

impl Default for FieldSelector {
    fn default() -> Self {
        Self::ALL
    }
}

/// Splits a `:title:url:` style prefix off the input.
///
/// Returns the remaining needle and the selected fields. Tokens are read up to
/// the first one that is not `title` or `url`; that token and everything after
/// it stay in the needle. With no recognized token both fields are selected.
pub fn detect_fields(input: &str) -> (&str, FieldSelector) {
    let Some(mut rest) = input.strip_prefix(':') else {
        return (input, FieldSelector::ALL);
    };

    let mut selector = FieldSelector::NONE;
    let mut recognized = false;

    while let Some((field, tail)) = rest.split_once(':') {
        match field {
            "title" => selector.title = true,
            "url" => selector.url = true,
            _ => break,
        }
        recognized = true;
        rest = tail;
    }

    if !recognized {
        return (rest, FieldSelector::ALL);
    }

    (rest, selector)
}

/// The match algorithm chosen for a needle, bound to its (stripped) needle.
#[derive(Debug, Clone)]
pub enum MatchAlgorithm {
    Exact(String),
    Regexp(Regex),
    Fuzzy(String),
}

impl MatchAlgorithm {
    /// Chooses the algorithm from the needle's leading character.
    ///
    /// `'` selects exact matching and `/` a case-insensitive regex. A regex
    /// that fails to compile is not an error: the whole needle, slash included,
    /// is fuzzy matched instead. A backslash before `\`, `'` or `/` escapes it.
    pub fn detect(needle: &str) -> Self {
        if let Some(rest) = needle.strip_prefix('\'') {
            return Self::Exact(rest.to_string());
        }

        if let Some(pattern) = needle.strip_prefix('/') {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(regex) => return Self::Regexp(regex),
                Err(err) => {
                    debug!("Regex {:?} did not compile, using fuzzy: {}", pattern, err);
                    return Self::Fuzzy(needle.to_string());
                }
            }
        }

        if let Some(rest) = needle.strip_prefix('\\') {
            if rest.starts_with(['\\', '\'', '/']) {
                return Self::Fuzzy(rest.to_string());
            }
        }

        Self::Fuzzy(needle.to_string())
    }

    pub fn matches(&self, haystack: &str) -> MatchResult {
        match self {
            Self::Exact(needle) => exact_search(needle, haystack),
            Self::Regexp(regex) => regexp_search(regex, haystack),
            Self::Fuzzy(needle) => fuzzy_search(needle, haystack),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exact(_) => "exact",
            Self::Regexp(_) => "regexp",
            Self::Fuzzy(_) => "fuzzy",
        }
    }
}

/// A raw query split into needle, field selector and algorithm.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    /// Needle after the field prefix, before the algorithm prefix is removed.
    pub needle: String,
    pub selector: FieldSelector,
    pub algorithm: MatchAlgorithm,
}

impl ParsedQuery {
    pub fn parse(input: &str) -> Self {
        let (needle, selector) = detect_fields(input);
        let algorithm = MatchAlgorithm::detect(needle);

        debug!(
            "Parsed query {:?}: needle={:?} algorithm={} title={} url={}",
            input,
            needle,
            algorithm.name(),
            selector.title,
            selector.url
        );

        Self {
            needle: needle.to_string(),
            selector,
            algorithm,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod query_tests;
