//! Tab events and the sources that deliver them.

use std::collections::VecDeque;
use std::io::BufRead;

use serde::{Deserialize, Serialize};

use super::tab::{TabChangeInfo, TabId, TabRecord, TabRemoveInfo};
use crate::error::TabsiftError;

/// One notification from the tab host.
///
/// Serialized with a `type` tag so recorded events can be replayed from a
/// JSON lines file:
///
/// ```json
/// {"type": "removed", "tabId": 3, "removeInfo": {"windowId": 1, "isWindowClosing": false}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TabEvent {
    Created {
        tab: TabRecord,
    },
    #[serde(rename_all = "camelCase")]
    Updated {
        tab_id: TabId,
        #[serde(default)]
        change_info: TabChangeInfo,
        tab: TabRecord,
    },
    #[serde(rename_all = "camelCase")]
    Removed {
        tab_id: TabId,
        #[serde(default)]
        remove_info: TabRemoveInfo,
    },
}

impl TabEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
            Self::Removed { .. } => "removed",
        }
    }
}

/// Anything that yields tab events one at a time.
///
/// `None` means the source is exhausted.
pub trait TabEventSource {
    fn next_event(&mut self) -> Option<Result<TabEvent, TabsiftError>>;
}

impl TabEventSource for VecDeque<TabEvent> {
    fn next_event(&mut self) -> Option<Result<TabEvent, TabsiftError>> {
        self.pop_front().map(Ok)
    }
}

/// Reads one JSON encoded [`TabEvent`] per line. Blank lines are skipped.
pub struct JsonLinesSource<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines read so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> TabEventSource for JsonLinesSource<R> {
    fn next_event(&mut self) -> Option<Result<TabEvent, TabsiftError>> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line += 1;

            let text = self.buffer.trim();
            if text.is_empty() {
                continue;
            }

            return Some(serde_json::from_str(text).map_err(|e| TabsiftError::InvalidEvent {
                line: self.line,
                message: e.to_string(),
            }));
        }
    }
}
