// SPDX-License-Identifier: MPL-2.0
//! Sidebar navigation between record sections and settings.

use crate::app::{Screen, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::{
    widget::{button, container, Column, Container, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    SwitchScreen(Screen),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Open(screen) if screen == current => Event::None,
        Message::Open(screen) => Event::SwitchScreen(screen),
    }
}

/// Render the sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let mut entries = Column::new().spacing(spacing::XXS).push(title);

    for section in Section::ALL {
        entries = entries.push(nav_button(
            ctx.i18n.tr(section.i18n_key()),
            Screen::Section(section),
            ctx.screen,
        ));
    }

    entries = entries.push(nav_button(
        ctx.i18n.tr("nav-settings"),
        Screen::Settings,
        ctx.screen,
    ));

    Container::new(entries)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(sidebar_style)
        .into()
}

fn nav_button<'a>(label: String, target: Screen, current: Screen) -> Element<'a, Message> {
    let style = if target == current {
        button::primary
    } else {
        button::text
    };

    button(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(style)
        .on_press(Message::Open(target))
        .into()
}

fn sidebar_style(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;

    container::Style {
        background: Some(iced::Background::Color(weak.color)),
        text_color: Some(weak.text),
        border: iced::Border {
            color: palette::GRAY_400,
            width: 0.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
