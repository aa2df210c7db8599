// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Any component that finishes an action (a save, a delete, a failed fetch)
//! raises a toast through the mounted store; the toast surface shows it and
//! retires it after [`DISMISS_DELAY`] or when the user closes it.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Payload` and `Variant`
//! - [`store`] - `Store` holding the live, ordered collection
//! - [`provider`] - `Provider` owning the store and the `Context` exposing it
//! - [`hook`] - `use_notifications` accessor for components
//! - [`toast`] - `Surface` rendering toasts and running their timers
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{use_notifications, Payload, Provider, Surface};
//!
//! // Composition root: one provider for the whole shell
//! let provider = Provider::new();
//! let ctx = provider.context();
//! let mut surface = Surface::new(&use_notifications(&ctx));
//!
//! // Anywhere below it
//! use_notifications(&ctx).enqueue(Payload::success("Agency saved"));
//!
//! // After every update, arm timers for new toasts
//! let task = surface.sync(&use_notifications(&ctx)).map(Message::Toast);
//! ```

mod hook;
mod notification;
mod provider;
mod store;
mod toast;

pub use hook::{try_use_notifications, use_notifications, Notifications};
pub use notification::{Notification, NotificationId, Payload, Variant};
pub use provider::{Context, Provider};
pub use store::Store;
pub use toast::{expire_after, Message as ToastMessage, Surface, Transition, DISMISS_DELAY};
