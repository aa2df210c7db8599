// SPDX-License-Identifier: MPL-2.0
//! Live notification collection.
//!
//! The `Store` keeps the ordered sequence of toasts currently on screen and
//! the only two operations allowed to change it: `enqueue` and `remove`.
//! Every effective change bumps a revision published on a `watch` channel so
//! subscribers know when to re-render.

use super::notification::{Notification, NotificationId, Payload};
use tokio::sync::watch;

/// Ordered collection of live notifications.
#[derive(Debug)]
pub struct Store {
    /// Live notifications in display (enqueue) order.
    entries: Vec<Notification>,
    /// Raw value of the next identity to hand out.
    next_id: u64,
    /// Revision counter, bumped on every effective mutation.
    revision: watch::Sender<u64>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            entries: Vec::new(),
            next_id: 0,
            revision,
        }
    }

    /// Appends a new notification and returns its identity.
    ///
    /// Identities come from a per-store counter, so they never collide with
    /// one that is still live.
    pub fn enqueue(&mut self, payload: Payload) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        tracing::debug!(%id, variant = ?payload.variant, "enqueue notification");
        self.entries.push(Notification::new(id, payload));
        self.bump();
        id
    }

    /// Removes the notification with the given identity.
    ///
    /// Returns `false` when nothing matched; the collection and the revision
    /// are left untouched in that case.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.entries.iter().position(|n| n.id() == id) else {
            tracing::trace!(%id, "remove ignored, notification already gone");
            return false;
        };

        // `Vec::remove` shifts the tail, keeping relative order.
        self.entries.remove(pos);
        tracing::debug!(%id, remaining = self.entries.len(), "remove notification");
        self.bump();
        true
    }

    /// Returns the live notifications in display order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.entries.iter().any(|n| n.id() == id)
    }

    /// Returns a receiver that observes every revision bump.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
