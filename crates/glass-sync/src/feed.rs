// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Status feed port: the seam where a transport hands snapshots to the
//! engine.
//!
//! The connection manager is an explicit object behind a trait rather than a
//! module-level singleton, so the sync adapter depends only on "current
//! status plus change notifications" and never on a concrete transport.

use std::collections::BTreeMap;

use tracing::debug;

use crate::status::StatusSnapshot;

/// Callback invoked with each published snapshot.
pub type StatusListener = Box<dyn FnMut(&StatusSnapshot)>;

/// Handle for removing a listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Read side of the status stream, as seen by the engine.
pub trait StatusFeed {
    /// The most recently delivered snapshot.
    fn current(&self) -> &StatusSnapshot;

    /// Registers a listener for future snapshots.
    fn subscribe(&mut self, listener: StatusListener) -> SubscriptionId;

    /// Removes a listener; unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// In-process connection manager: holds the latest snapshot and fans
/// published updates out to listeners.
///
/// A transport (WebSocket bridge, test harness, replay file) calls
/// [`publish`]; everything downstream subscribes. Single-threaded by design,
/// like the rest of the engine.
///
/// [`publish`]: SharedStatusFeed::publish
#[derive(Default)]
pub struct SharedStatusFeed {
    latest: StatusSnapshot,
    listeners: BTreeMap<u64, StatusListener>,
    next_id: u64,
}

impl SharedStatusFeed {
    /// Creates a feed holding the default (idle) snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current snapshot and notifies every listener.
    ///
    /// Delivery is fire-and-forget: there is no ordering guarantee beyond
    /// most-recent-wins, and re-publishing an identical snapshot notifies
    /// listeners again (downstream edge detection handles duplicates).
    pub fn publish(&mut self, snapshot: StatusSnapshot) {
        debug!(status = %snapshot.status, listeners = self.listeners.len(), "status publish");
        self.latest = snapshot;
        for listener in self.listeners.values_mut() {
            listener(&self.latest);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl StatusFeed for SharedStatusFeed {
    fn current(&self) -> &StatusSnapshot {
        &self.latest
    }

    fn subscribe(&mut self, listener: StatusListener) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.insert(id, listener);
        debug!(id, "status listener subscribed");
        SubscriptionId(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.listeners.remove(&id.0).is_some() {
            debug!(id = id.0, "status listener unsubscribed");
        }
    }
}

impl std::fmt::Debug for SharedStatusFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStatusFeed")
            .field("latest", &self.latest)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RemoteStatus;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn publish_updates_current_and_notifies() {
        let mut feed = SharedStatusFeed::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = feed.subscribe(Box::new(move |snap| {
            sink.borrow_mut().push(snap.status);
        }));

        feed.publish(StatusSnapshot {
            status: RemoteStatus::Sorting,
            ..StatusSnapshot::default()
        });
        assert_eq!(feed.current().status, RemoteStatus::Sorting);
        assert_eq!(*seen.borrow(), vec![RemoteStatus::Sorting]);

        feed.unsubscribe(id);
        feed.publish(StatusSnapshot::default());
        assert_eq!(seen.borrow().len(), 1, "unsubscribed listener was called");
        assert_eq!(feed.listener_count(), 0);
    }

    #[test]
    fn unsubscribing_twice_is_harmless() {
        let mut feed = SharedStatusFeed::new();
        let id = feed.subscribe(Box::new(|_| {}));
        feed.unsubscribe(id);
        feed.unsubscribe(id);
    }
}
