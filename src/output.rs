//! Printing search outcomes
//!
//! Plain output wraps highlighted ranges in configurable markers; JSON output
//! is the serialized [`SearchOutcome`].

use crate::config::HighlightConfig;
use crate::search::{Range, SearchOutcome};

/// Wraps each range of `text` in `open`/`close`.
///
/// Ranges are character ranges, expected sorted and non-overlapping. Ranges
/// past the end of `text` are clamped; empty or out-of-order ranges are
/// skipped.
pub fn render_highlighted(text: &str, ranges: &[Range], open: &str, close: &str) -> String {
    let len = text.chars().count();
    let mut pending = ranges
        .iter()
        .map(|r| (r.start.min(len), r.end.min(len)))
        .filter(|(start, end)| start < end)
        .peekable();

    let mut out = String::with_capacity(text.len());
    let mut open_until: Option<usize> = None;

    for (pos, ch) in text.chars().enumerate() {
        if open_until.is_none() {
            while pending.next_if(|&(start, _)| start < pos).is_some() {}

            if let Some((_, end)) = pending.next_if(|&(start, _)| start == pos) {
                out.push_str(open);
                open_until = Some(end);
            }
        }

        out.push(ch);

        if open_until == Some(pos + 1) {
            out.push_str(close);
            open_until = None;
        }
    }

    out
}

fn render_field(text: Option<&str>, ranges: Option<&[Range]>, markers: &HighlightConfig) -> String {
    let text = text.unwrap_or_default();
    match ranges {
        Some(ranges) => render_highlighted(text, ranges, &markers.open, &markers.close),
        None => text.to_string(),
    }
}

/// One line per found tab, then a summary line.
///
/// Active tabs get a `*` after their id.
pub fn format_plain(outcome: &SearchOutcome<'_>, total: usize, markers: &HighlightConfig) -> String {
    let mut out = String::new();

    for found in &outcome.tabs {
        let title = render_field(
            found.tab.title.as_deref(),
            found.highlight.title.as_deref(),
            markers,
        );
        let url = render_field(
            found.tab.url.as_deref(),
            found.highlight.url.as_deref(),
            markers,
        );
        let active = if found.tab.active { "*" } else { "" };

        out.push_str(&format!("#{}{} {}  {}\n", found.tab.id, active, title, url));
    }

    if outcome.empty_search {
        out.push_str(&format!("{} tabs\n", total));
    } else {
        out.push_str(&format!("{} of {} tabs\n", outcome.tabs.len(), total));
    }

    out
}

pub fn format_json(outcome: &SearchOutcome<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}
