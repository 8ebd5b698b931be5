//! Match algorithms
//!
//! All three algorithms compare case-insensitively, one character at a time,
//! and report positions as character indices into the haystack.

use regex::Regex;

use super::range::{MatchResult, Range};

/// Case-insensitive comparison of two characters.
///
/// Folding is done per character so that a match position in the folded
/// text is always the same position in the original text.
fn chars_eq(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// First occurrence of `needle` in `haystack`.
///
/// An empty needle always matches, with no positions.
pub fn exact_search(needle: &str, haystack: &str) -> MatchResult {
    if needle.is_empty() {
        return MatchResult::hit(Vec::new());
    }

    let needle: Vec<char> = needle.chars().collect();
    let haystack: Vec<char> = haystack.chars().collect();

    if needle.len() > haystack.len() {
        return MatchResult::miss();
    }

    haystack
        .windows(needle.len())
        .position(|window| window.iter().zip(&needle).all(|(&h, &n)| chars_eq(h, n)))
        .map_or_else(MatchResult::miss, |pos| {
            MatchResult::hit(vec![Range::new(pos, pos + needle.len())])
        })
}

/// First match of a compiled pattern in `haystack`.
///
/// Case-insensitivity is a property of the compiled pattern. The regex engine
/// reports byte offsets; these are converted to character offsets.
pub fn regexp_search(pattern: &Regex, haystack: &str) -> MatchResult {
    let Some(found) = pattern.find(haystack) else {
        return MatchResult::miss();
    };

    let start = haystack[..found.start()].chars().count();
    let end = start + found.as_str().chars().count();

    MatchResult::hit(vec![Range::new(start, end)])
}

/// Greedy subsequence match.
///
/// Walks the haystack once, consuming the next pending needle character
/// whenever it matches. Runs of consecutive matched characters are reported
/// as one range each. There is no backtracking, so the segmentation is the
/// greedy one, not necessarily the one with the fewest runs.
pub fn fuzzy_search(needle: &str, haystack: &str) -> MatchResult {
    if needle.is_empty() {
        return MatchResult::hit(Vec::new());
    }

    let needle: Vec<char> = needle.chars().collect();
    let haystack: Vec<char> = haystack.chars().collect();

    if needle.len() > haystack.len() {
        return MatchResult::miss();
    }

    if needle.len() == haystack.len() && needle.iter().zip(&haystack).all(|(&n, &h)| chars_eq(n, h))
    {
        return MatchResult::hit(vec![Range::new(0, haystack.len())]);
    }

    let mut pending = needle.iter().peekable();
    let mut positions = Vec::new();
    let mut run: Option<Range> = None;

    for (pos, &hch) in haystack.iter().enumerate() {
        let Some(&&nch) = pending.peek() else {
            break;
        };

        if chars_eq(nch, hch) {
            pending.next();
            match run.as_mut() {
                Some(open) => open.end = pos + 1,
                None => run = Some(Range::new(pos, pos + 1)),
            }
        } else if let Some(closed) = run.take() {
            positions.push(closed);
        }
    }

    if pending.peek().is_some() {
        return MatchResult::miss();
    }

    positions.extend(run);
    MatchResult::hit(positions)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
