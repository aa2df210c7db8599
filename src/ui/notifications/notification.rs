// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, the `Payload` callers hand
//! to the store, and the `Variant` enum selecting the toast's look.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a live notification.
///
/// Identifiers are minted by the [`Store`](super::Store) at enqueue time and
/// are only meaningful for a later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Presentation style of a toast. Carries no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Neutral information.
    #[default]
    Default,
    /// An upstream failure (save, delete or fetch went wrong).
    Destructive,
    /// Operation completed successfully.
    Success,
}

impl Variant {
    /// Returns the accent color for this variant.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Variant::Default => palette::INFO_500,
            Variant::Destructive => palette::ERROR_500,
            Variant::Success => palette::SUCCESS_500,
        }
    }

    /// Returns the glyph shown next to the toast text.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Variant::Default => "i",
            Variant::Destructive => "!",
            Variant::Success => "\u{2713}",
        }
    }
}

/// Everything a caller provides when enqueueing a toast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Variant,
    /// Kept on the record but never consulted by the dismissal timer.
    pub duration_override: Option<Duration>,
}

impl Payload {
    /// Creates an empty payload with the default variant.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a success payload with the given title.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self::new().with_title(title).with_variant(Variant::Success)
    }

    /// Creates a destructive payload with the given title.
    #[must_use]
    pub fn destructive(title: impl Into<String>) -> Self {
        Self::new().with_title(title).with_variant(Variant::Destructive)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_duration_override(mut self, duration: Duration) -> Self {
        self.duration_override = Some(duration);
        self
    }
}

/// A live toast. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    duration_override: Option<Duration>,
}

impl Notification {
    pub(crate) fn new(id: NotificationId, payload: Payload) -> Self {
        let Payload {
            title,
            description,
            variant,
            duration_override,
        } = payload;

        Self {
            id,
            title,
            description,
            variant,
            duration_override,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn duration_override(&self) -> Option<Duration> {
        self.duration_override
    }
}
