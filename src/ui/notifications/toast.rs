// SPDX-License-Identifier: MPL-2.0
//! Toast surface: renders live notifications and retires them.
//!
//! Every toast gets its own abortable delay task as soon as the surface sees
//! it. The toast leaves the store either when that task fires or when the
//! user clicks its close button, whichever comes first; the other path is
//! cancelled.

use super::hook::Notifications;
use super::notification::{Notification, NotificationId};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::task::{self, Task};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;

/// How long a toast stays on screen without user interaction.
pub const DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Messages produced by the toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The auto-dismiss delay of a toast elapsed.
    Expired(NotificationId),
    /// The user clicked the close button of a toast.
    Dismiss(NotificationId),
}

/// How a toast left the `Pending` phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    TimerExpired,
    UserDismissed,
}

/// Scheduled auto-dismissal of one toast.
struct Timer {
    handle: task::Handle,
}

impl Timer {
    fn cancel(self) {
        self.handle.abort();
    }
}

/// Sleeps for `delay` then reports that `id` expired.
pub fn expire_after(id: NotificationId, delay: Duration) -> impl Future<Output = Message> {
    async move {
        tokio::time::sleep(delay).await;
        Message::Expired(id)
    }
}

/// Presentation state of the toast stack.
pub struct Surface {
    /// One timer per toast still in the `Pending` phase.
    timers: HashMap<NotificationId, Timer>,
    revision: watch::Receiver<u64>,
}

impl Surface {
    /// Creates a surface observing `notifications`.
    ///
    /// Toasts already in the store are picked up by the first [`sync`](Self::sync).
    #[must_use]
    pub fn new(notifications: &Notifications) -> Self {
        let mut revision = notifications.subscribe();
        revision.mark_changed();
        Self {
            timers: HashMap::new(),
            revision,
        }
    }

    /// Reconciles timers with the store.
    ///
    /// Arms a timer for every toast that has none and cancels timers whose
    /// toast is gone. Returns the newly armed timer tasks.
    pub fn sync(&mut self, notifications: &Notifications) -> Task<Message> {
        if !self.revision.has_changed().unwrap_or(true) {
            return Task::none();
        }
        self.revision.borrow_and_update();

        let live: Vec<NotificationId> = notifications
            .current()
            .iter()
            .map(Notification::id)
            .collect();

        let orphaned: Vec<NotificationId> = self
            .timers
            .keys()
            .filter(|id| !live.contains(*id))
            .copied()
            .collect();
        for id in orphaned {
            if let Some(timer) = self.timers.remove(&id) {
                tracing::trace!(%id, "cancel timer of removed toast");
                timer.cancel();
            }
        }

        let mut armed = Vec::new();
        for id in live {
            if self.timers.contains_key(&id) {
                continue;
            }
            let (task, handle) =
                Task::perform(expire_after(id, DISMISS_DELAY), std::convert::identity).abortable();
            self.timers.insert(id, Timer { handle });
            armed.push(task);
        }

        Task::batch(armed)
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message, notifications: &Notifications) -> Task<Message> {
        match message {
            Message::Expired(id) => self.retire(id, Transition::TimerExpired, notifications),
            Message::Dismiss(id) => self.retire(id, Transition::UserDismissed, notifications),
        }
        self.sync(notifications)
    }

    fn retire(&mut self, id: NotificationId, transition: Transition, notifications: &Notifications) {
        if let Some(timer) = self.timers.remove(&id) {
            timer.cancel();
        }
        let removed = notifications.remove(id);
        tracing::debug!(%id, ?transition, removed, "toast dismissed");
    }

    /// Number of toasts with a running timer.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn has_timer(&self, id: NotificationId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Renders a single toast.
    fn view_toast<'a>(notification: &Notification) -> Element<'a, Message> {
        let variant = notification.variant();
        let accent_color = variant.color();

        let glyph = Text::new(variant.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title.to_owned())
                    .size(typography::BODY_LG)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(description) = notification.description() {
            body = body.push(
                Text::new(description.to_owned())
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            );
        }

        let dismiss_button = button(Text::new("\u{00d7}").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [glyph] [title/description] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay, stacked in the bottom-right corner in
    /// display order.
    pub fn view<'a>(notifications: &[Notification]) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> =
            notifications.iter().map(Self::view_toast).collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.cancel();
        }
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{use_notifications, Payload, Provider, Variant};
    use futures_util::stream::BoxStream;
    use futures_util::StreamExt;
    use iced_runtime::Action;

    fn setup() -> (Provider, Notifications) {
        let provider = Provider::new();
        let notifications = use_notifications(&provider.context());
        (provider, notifications)
    }

    fn ids(notifications: &Notifications) -> Vec<NotificationId> {
        notifications.current().iter().map(Notification::id).collect()
    }

    fn run(task: Task<Message>) -> BoxStream<'static, Action<Message>> {
        iced_runtime::task::into_stream(task).expect("timer task should produce a stream")
    }

    async fn next_message(stream: &mut BoxStream<'static, Action<Message>>) -> Option<Message> {
        while let Some(action) = stream.next().await {
            if let Action::Output(message) = action {
                return Some(message);
            }
        }
        None
    }

    #[test]
    fn sync_arms_one_timer_per_toast() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);

        let a = notifications.enqueue(Payload::success("Saved"));
        let b = notifications.enqueue(Payload::destructive("Delete failed"));
        let _ = surface.sync(&notifications);

        assert_eq!(surface.pending_timers(), 2);
        assert!(surface.has_timer(a));
        assert!(surface.has_timer(b));

        let _ = surface.sync(&notifications);
        assert_eq!(surface.pending_timers(), 2);
    }

    #[test]
    fn toasts_present_at_mount_get_timers() {
        let (_provider, notifications) = setup();
        let id = notifications.enqueue(Payload::new());

        let mut surface = Surface::new(&notifications);
        let _ = surface.sync(&notifications);

        assert!(surface.has_timer(id));
    }

    #[test]
    fn expiry_removes_the_toast() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let id = notifications.enqueue(Payload::success("Saved"));
        let _ = surface.sync(&notifications);

        let _ = surface.update(Message::Expired(id), &notifications);

        assert!(notifications.is_empty());
        assert_eq!(surface.pending_timers(), 0);
    }

    #[test]
    fn manual_dismiss_cancels_only_that_timer() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let a = notifications.enqueue(Payload::new().with_title("A"));
        let b = notifications.enqueue(Payload::new().with_title("B"));
        let _ = surface.sync(&notifications);

        let _ = surface.update(Message::Dismiss(a), &notifications);

        assert_eq!(ids(&notifications), vec![b]);
        assert!(!surface.has_timer(a));
        assert!(surface.has_timer(b));
    }

    #[test]
    fn late_expiry_after_dismiss_is_harmless() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let a = notifications.enqueue(Payload::new());
        let b = notifications.enqueue(Payload::new());
        let _ = surface.sync(&notifications);

        let _ = surface.update(Message::Dismiss(a), &notifications);
        let _ = surface.update(Message::Expired(a), &notifications);

        assert_eq!(ids(&notifications), vec![b]);
        assert!(surface.has_timer(b));
    }

    #[test]
    fn removal_outside_the_surface_cancels_the_timer() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let id = notifications.enqueue(Payload::new());
        let _ = surface.sync(&notifications);

        notifications.remove(id);
        let _ = surface.sync(&notifications);

        assert_eq!(surface.pending_timers(), 0);
    }

    #[test]
    fn toasts_enqueued_during_update_are_armed() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let a = notifications.enqueue(Payload::new());
        let _ = surface.sync(&notifications);

        let b = notifications.enqueue(Payload::new());
        let _ = surface.update(Message::Dismiss(a), &notifications);

        assert!(surface.has_timer(b));
        assert_eq!(surface.pending_timers(), 1);
    }

    #[test]
    fn dropping_the_surface_leaves_the_store_alone() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let a = notifications.enqueue(Payload::new());
        let _ = surface.sync(&notifications);

        drop(surface);

        assert_eq!(ids(&notifications), vec![a]);
    }

    #[tokio::test(start_paused = true)]
    async fn armed_timer_delivers_expiry_after_the_delay() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let id = notifications.enqueue(Payload::success("Saved"));
        let started = tokio::time::Instant::now();

        let mut timers = run(surface.sync(&notifications));
        let message = next_message(&mut timers).await;

        assert_eq!(message, Some(Message::Expired(id)));
        assert!(started.elapsed() >= DISMISS_DELAY);
        assert!(started.elapsed() < DISMISS_DELAY * 2);

        let _ = surface.update(Message::Expired(id), &notifications);
        assert!(notifications.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dismissed_toast_timer_never_fires() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let id = notifications.enqueue(Payload::new());

        let mut timers = run(surface.sync(&notifications));
        let _ = surface.update(Message::Dismiss(id), &notifications);

        let outcome = tokio::time::timeout(DISMISS_DELAY * 3, next_message(&mut timers)).await;
        assert!(matches!(outcome, Ok(None)));
    }

    #[tokio::test(start_paused = true)]
    async fn dismissing_one_toast_keeps_the_other_timer_running() {
        let (_provider, notifications) = setup();
        let mut surface = Surface::new(&notifications);
        let a = notifications.enqueue(Payload::new().with_title("A"));
        let b = notifications.enqueue(Payload::new().with_title("B"));

        let mut timers = run(surface.sync(&notifications));
        let _ = surface.update(Message::Dismiss(a), &notifications);

        assert_eq!(next_message(&mut timers).await, Some(Message::Expired(b)));
        assert_eq!(next_message(&mut timers).await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn expire_after_waits_for_the_fixed_delay() {
        let (_provider, notifications) = setup();
        let id = notifications.enqueue(Payload::success("Saved"));
        let started = tokio::time::Instant::now();

        let message = expire_after(id, DISMISS_DELAY).await;

        assert_eq!(message, Message::Expired(id));
        assert!(started.elapsed() >= DISMISS_DELAY);
    }

    #[test]
    fn overlay_renders_from_the_store_alone() {
        let (_provider, notifications) = setup();
        notifications.enqueue(Payload::success("Saved").with_description("Agency updated"));
        notifications.enqueue(Payload::new());

        let _overlay: Element<'_, Message> = Surface::view(&notifications.current());
        let _empty: Element<'_, Message> = Surface::view(&[]);
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = Variant::Success.color();
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
