// SPDX-License-Identifier: MPL-2.0
//! Typed access to the mounted notification store.

use super::notification::{Notification, NotificationId, Payload};
use super::provider::{Context, SharedStore};
use crate::error::{Error, Result};
use std::cell::Ref;
use std::rc::Rc;
use tokio::sync::watch;

/// Accessor used by components to raise and retire toasts.
#[derive(Debug, Clone)]
pub struct Notifications {
    store: SharedStore,
}

impl Notifications {
    /// Enqueues a toast and returns its identity.
    pub fn enqueue(&self, payload: Payload) -> NotificationId {
        self.store.borrow_mut().enqueue(payload)
    }

    /// Removes a toast. Unknown identities are ignored and yield `false`.
    pub fn remove(&self, id: NotificationId) -> bool {
        self.store.borrow_mut().remove(id)
    }

    /// Read-only view of the live toasts in display order.
    ///
    /// Drop the guard before calling `enqueue` or `remove`.
    #[must_use]
    pub fn current(&self) -> Ref<'_, [Notification]> {
        Ref::map(self.store.borrow(), |store| store.notifications())
    }

    /// Owned copy of the live toasts.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.store.borrow().notifications().to_vec()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.store.borrow().contains(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.borrow().is_empty()
    }

    /// Returns a receiver that changes whenever the collection does.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.store.borrow().subscribe()
    }

    /// Returns whether both accessors point at the same store.
    #[must_use]
    pub fn same_store(&self, other: &Notifications) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

/// Looks up the notification store mounted in `ctx`.
///
/// # Panics
///
/// Panics when no [`Provider`](super::Provider) is mounted. This is a wiring
/// mistake in the component tree, not a runtime condition.
#[must_use]
pub fn use_notifications(ctx: &Context) -> Notifications {
    match try_use_notifications(ctx) {
        Ok(notifications) => notifications,
        Err(err) => panic!("use_notifications: {err}"),
    }
}

/// Fallible variant of [`use_notifications`].
///
/// # Errors
///
/// Returns [`Error::ProviderMissing`] when no provider is mounted.
pub fn try_use_notifications(ctx: &Context) -> Result<Notifications> {
    ctx.store()
        .map(|store| Notifications {
            store: Rc::clone(store),
        })
        .ok_or(Error::ProviderMissing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Provider;

    #[test]
    #[should_panic(expected = "no notification provider is mounted")]
    fn use_without_provider_panics() {
        let _ = use_notifications(&Context::default());
    }

    #[test]
    fn try_use_without_provider_returns_error() {
        let err = try_use_notifications(&Context::default()).unwrap_err();
        assert!(matches!(err, Error::ProviderMissing));
    }

    #[test]
    fn accessors_from_same_context_share_the_store() {
        let provider = Provider::new();
        let ctx = provider.context();
        let a = use_notifications(&ctx);
        let b = use_notifications(&ctx.clone());

        assert!(a.same_store(&b));
        let id = a.enqueue(Payload::success("Saved"));
        assert!(b.contains(id));
        assert_eq!(b.current().len(), 1);
    }

    #[test]
    fn enqueue_then_remove_round_trip_through_hook() {
        let provider = Provider::new();
        let notifications = use_notifications(&provider.context());

        let id = notifications.enqueue(Payload::new().with_title("Fetched"));
        assert_eq!(notifications.snapshot()[0].title(), Some("Fetched"));
        assert!(notifications.remove(id));
        assert!(notifications.is_empty());
        assert!(!notifications.remove(id));
    }

    #[test]
    fn subscribers_see_changes_from_other_accessors() {
        let provider = Provider::new();
        let ctx = provider.context();
        let writer = use_notifications(&ctx);
        let receiver = use_notifications(&ctx).subscribe();

        writer.enqueue(Payload::new());
        assert!(receiver.has_changed().unwrap());
    }
}
