//! tabsift library - find and highlight browser tabs
//!
//! Exposes the query interpreter and matching engine ([`search`]) and the
//! live tab registry ([`tabs`]) that keeps an ordered view of all tabs in
//! sync with host tab events.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod search;
pub mod tabs;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::TabsiftError;
pub use search::{
    FieldSelector, FoundTab, Highlight, MatchAlgorithm, MatchResult, ParsedQuery, Range,
    SearchEngine, SearchOutcome, search,
};
pub use tabs::{TabEvent, TabRecord, TabRegistry};
