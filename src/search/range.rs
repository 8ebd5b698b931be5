use serde::{Deserialize, Serialize};

/// Half-open `[start, end)` span of characters within a haystack.
///
/// Serialized as a two element array, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "(usize, usize)", from = "(usize, usize)")]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} is past end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(usize, usize)> for Range {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

impl From<Range> for (usize, usize) {
    fn from(range: Range) -> Self {
        (range.start, range.end)
    }
}

/// Outcome of running one match algorithm over one haystack.
///
/// `positions` is always empty when `found` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub found: bool,
    pub positions: Vec<Range>,
}

impl MatchResult {
    pub fn hit(positions: Vec<Range>) -> Self {
        Self {
            found: true,
            positions,
        }
    }

    pub fn miss() -> Self {
        Self::default()
    }
}
