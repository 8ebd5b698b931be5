//! Search module
//!
//! Interprets a raw query (field prefix plus algorithm prefix), runs the
//! chosen match algorithm against tab titles and URLs and reports the
//! character ranges to highlight.

mod engine;
pub mod matcher;
mod query;
mod range;

pub use engine::{FoundTab, Highlight, SearchEngine, SearchOutcome, search};
pub use query::{FieldSelector, MatchAlgorithm, ParsedQuery, detect_fields};
pub use range::{MatchResult, Range};
