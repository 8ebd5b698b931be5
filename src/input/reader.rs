use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::TabsiftError;
use crate::tabs::{JsonLinesSource, TabRecord};

/// Reads tab snapshots and recorded tab events
pub struct InputReader;

impl InputReader {
    /// Read a JSON array of tabs from stdin or a file
    ///
    /// # Arguments
    /// * `path` - Optional file path. If None, reads from stdin.
    pub fn read_tabs(path: Option<&Path>) -> Result<Vec<TabRecord>, TabsiftError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse_tabs(&json_str)
    }

    /// Parse a JSON array of tabs
    pub fn parse_tabs(json_str: &str) -> Result<Vec<TabRecord>, TabsiftError> {
        serde_json::from_str(json_str).map_err(|e| TabsiftError::InvalidJson(e.to_string()))
    }

    /// Open a JSON lines file of tab events for replay
    pub fn open_events(path: &Path) -> Result<JsonLinesSource<BufReader<File>>, TabsiftError> {
        let file = File::open(path)?;
        Ok(JsonLinesSource::new(BufReader::new(file)))
    }
}
