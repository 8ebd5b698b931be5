//! Shared test utilities for tabsift
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::tabs::{TabId, TabRecord, TabRegistry, WindowId};

    /// Helper to build a tab; empty strings still count as present fields
    pub fn tab(id: TabId, window_id: WindowId, index: usize, title: &str, url: &str) -> TabRecord {
        TabRecord::new(id, window_id, index)
            .with_title(title)
            .with_url(url)
    }

    /// A small window of tabs in index order
    pub fn sample_tabs() -> Vec<TabRecord> {
        vec![
            tab(1, 1, 0, "Rust Programming Language", "https://www.rust-lang.org/"),
            tab(2, 1, 1, "GitHub", "https://github.com/"),
            tab(3, 1, 2, "The Rust Book", "https://doc.rust-lang.org/book/"),
            tab(4, 1, 3, "Inbox - Mail", "https://mail.example.com/"),
        ]
    }

    /// Subscribes a recorder that keeps the tab ids of every snapshot it is sent
    pub fn record_notifications(registry: &mut TabRegistry) -> Rc<RefCell<Vec<Vec<TabId>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        registry.subscribe(move |tabs| {
            sink.borrow_mut()
                .push(tabs.iter().map(|t| t.id).collect());
        });
        seen
    }
}
