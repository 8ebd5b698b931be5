//! Tabs module
//!
//! The live tab registry: an ordered view of every known tab that follows
//! host create/update/remove events and pushes each new snapshot to its
//! subscribers.

pub mod events;
mod registry;
mod tab;

pub use events::{JsonLinesSource, TabEvent, TabEventSource};
pub use registry::{SubscriptionId, TabRegistry};
pub use tab::{TabChangeInfo, TabId, TabRecord, TabRemoveInfo, WindowId};
