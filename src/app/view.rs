// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current screen sits next to the sidebar; the toast overlay is stacked
//! on top of both.

use super::{App, Message, Screen, Section};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::Surface;
use crate::ui::settings::ViewContext as SettingsViewContext;
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let current_view: Element<'_, Message> = match self.screen {
            Screen::Section(section) => view_section(section, &self.i18n),
            Screen::Settings => self
                .settings
                .view(SettingsViewContext { i18n: &self.i18n })
                .map(Message::Settings),
        };

        let sidebar = navbar::view(NavbarViewContext {
            i18n: &self.i18n,
            screen: self.screen,
        })
        .map(Message::Navbar);

        let shell = Row::new()
            .push(sidebar)
            .push(
                Container::new(current_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill);

        let overlay = Surface::view(&self.notifications().current()).map(Message::Toast);

        Stack::new()
            .push(shell)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Section pages are provided by the record services; the shell only titles them.
fn view_section(section: Section, i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr(section.i18n_key())).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("section-placeholder")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .into()
}
