use std::fmt;

use log::{debug, trace};

use super::events::{TabEvent, TabEventSource};
use super::tab::{TabChangeInfo, TabId, TabRecord, TabRemoveInfo};
use crate::error::TabsiftError;

type Subscriber = Box<dyn FnMut(&[TabRecord])>;

/// Handle returned by [`TabRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered, observable collection of every known tab.
///
/// The sequence is kept sorted by `index` after every create and update (a
/// full sync is trusted to arrive ordered). Subscribers are called
/// synchronously, in registration order, with the full snapshot: once on
/// subscribe and once after every mutation that changed something.
///
/// Mutations finish before any subscriber runs, so a subscriber always sees a
/// consistent snapshot. Subscribers only get a shared slice and cannot call
/// back into the registry. A panicking subscriber is not caught: it unwinds
/// out of the mutating call, leaving the registry consistent but skipping the
/// subscribers registered after it for that one notification.
pub struct TabRegistry {
    tabs: Vec<TabRecord>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for TabRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRegistry")
            .field("tabs", &self.tabs)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current snapshot, sorted by index.
    pub fn tabs(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Registers `subscriber` and immediately calls it with the current snapshot.
    pub fn subscribe<F>(&mut self, mut subscriber: F) -> SubscriptionId
    where
        F: FnMut(&[TabRecord]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        subscriber(&self.tabs);
        self.subscribers.push((id, Box::new(subscriber)));

        debug!("Subscriber {:?} added ({} total)", id, self.subscribers.len());
        id
    }

    /// Removes a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(pos) = self.subscribers.iter().position(|(sub_id, _)| *sub_id == id) else {
            return false;
        };

        self.subscribers.remove(pos);
        debug!("Subscriber {:?} removed ({} left)", id, self.subscribers.len());
        true
    }

    /// Replaces the whole snapshot. The list is taken as given, without sorting.
    pub fn sync(&mut self, tabs: Vec<TabRecord>) {
        debug!("Sync: {} tabs", tabs.len());
        self.tabs = tabs;
        self.notify();
    }

    pub fn handle_created(&mut self, tab: TabRecord) {
        debug!("Created: tab {} at index {}", tab.id, tab.index);
        self.tabs.push(tab);
        self.sort_by_index();
        self.notify();
    }

    /// Applies a tab update. Returns whether subscribers were notified.
    ///
    /// An active tab deactivates the other active tabs of its window, even
    /// when `tab_id` itself is not tracked. The tracked record with `tab_id`,
    /// if any, is replaced by `tab` as a whole.
    pub fn handle_updated(
        &mut self,
        tab_id: TabId,
        change_info: &TabChangeInfo,
        tab: TabRecord,
    ) -> bool {
        let mut changed = false;

        if tab.active {
            for other in self
                .tabs
                .iter_mut()
                .filter(|t| t.window_id == tab.window_id && t.id != tab_id && t.active)
            {
                other.active = false;
                changed = true;
            }
        }

        if let Some(slot) = self.tabs.iter_mut().find(|t| t.id == tab_id) {
            *slot = tab;
            self.sort_by_index();
            changed = true;
        }

        debug!(
            "Updated: tab {} ({:?}) changed={}",
            tab_id, change_info.status, changed
        );

        if changed {
            self.notify();
        }
        changed
    }

    /// Removes the first tab with `tab_id`. Returns whether subscribers were notified.
    pub fn handle_removed(&mut self, tab_id: TabId, remove_info: &TabRemoveInfo) -> bool {
        let Some(pos) = self.tabs.iter().position(|t| t.id == tab_id) else {
            debug!("Removed: tab {} not tracked, ignoring", tab_id);
            return false;
        };

        self.tabs.remove(pos);
        debug!(
            "Removed: tab {} (window {}, closing={})",
            tab_id, remove_info.window_id, remove_info.is_window_closing
        );

        self.notify();
        true
    }

    /// Dispatches one host event. Returns whether subscribers were notified.
    pub fn apply(&mut self, event: TabEvent) -> bool {
        match event {
            TabEvent::Created { tab } => {
                self.handle_created(tab);
                true
            }
            TabEvent::Updated {
                tab_id,
                change_info,
                tab,
            } => self.handle_updated(tab_id, &change_info, tab),
            TabEvent::Removed {
                tab_id,
                remove_info,
            } => self.handle_removed(tab_id, &remove_info),
        }
    }

    /// Feeds every event from `source` into the registry.
    ///
    /// Returns the number of events applied. Stops at the first error from the
    /// source; events before it stay applied.
    pub fn attach<S>(&mut self, source: &mut S) -> Result<usize, TabsiftError>
    where
        S: TabEventSource + ?Sized,
    {
        let mut applied = 0;
        while let Some(event) = source.next_event() {
            self.apply(event?);
            applied += 1;
        }

        debug!("Event source exhausted after {} events", applied);
        Ok(applied)
    }

    fn sort_by_index(&mut self) {
        self.tabs.sort_by_key(|t| t.index);
    }

    fn notify(&mut self) {
        for (id, subscriber) in self.subscribers.iter_mut() {
            trace!("Notifying subscriber {:?}", id);
            subscriber(&self.tabs);
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
