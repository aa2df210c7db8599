// SPDX-License-Identifier: MPL-2.0
//! Ownership and distribution of the notification store.
//!
//! The composition root creates one [`Provider`] and mounts it into the
//! [`Context`] it hands down to screens and components. Components never see
//! the store directly: they go through [`use_notifications`](super::use_notifications).

use super::store::Store;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to the store. The UI loop is single-threaded.
pub(crate) type SharedStore = Rc<RefCell<Store>>;

/// Owner of the application's notification store.
#[derive(Debug, Default)]
pub struct Provider {
    store: SharedStore,
}

impl Provider {
    /// Creates a provider owning a fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a context with this provider mounted.
    #[must_use]
    pub fn context(&self) -> Context {
        Context {
            notifications: Some(Rc::clone(&self.store)),
        }
    }
}

/// Environment handed down the component tree.
///
/// `Context::default()` has no provider mounted.
#[derive(Debug, Clone, Default)]
pub struct Context {
    notifications: Option<SharedStore>,
}

impl Context {
    /// Mounts `provider` into this context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ProviderAlreadyMounted`] if a provider is already
    /// mounted; the existing one stays in place.
    pub fn mount(&mut self, provider: &Provider) -> Result<()> {
        if self.notifications.is_some() {
            return Err(Error::ProviderAlreadyMounted);
        }
        self.notifications = Some(Rc::clone(&provider.store));
        Ok(())
    }

    /// Returns whether a provider is mounted.
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.notifications.is_some()
    }

    pub(crate) fn store(&self) -> Option<&SharedStore> {
        self.notifications.as_ref()
    }
}
