// SPDX-License-Identifier: MPL-2.0
//! Settings screen: theme mode and interface language.

use crate::config::{Config, GeneralConfig};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, pick_list, radio, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Editable settings, applied live and persisted on save.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    theme_mode: ThemeMode,
    language: String,
    languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ThemeModeSelected(ThemeMode),
    LanguageSelected(String),
    Save,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ThemeModeChanged(ThemeMode),
    LanguageChanged(String),
    SaveRequested(Config),
}

impl State {
    #[must_use]
    pub fn new(theme_mode: ThemeMode, i18n: &I18n) -> Self {
        Self {
            theme_mode,
            language: i18n.current_locale().to_string(),
            languages: i18n
                .available_locales
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Builds the configuration to persist from the current selection.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            general: GeneralConfig {
                language: Some(self.language.clone()),
                theme_mode: self.theme_mode,
            },
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ThemeModeSelected(mode) if mode != self.theme_mode => {
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
            Message::LanguageSelected(language) if language != self.language => {
                self.language = language.clone();
                Event::LanguageChanged(language)
            }
            Message::ThemeModeSelected(_) | Message::LanguageSelected(_) => Event::None,
            Message::Save => Event::SaveRequested(self.to_config()),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let title = Text::new(i18n.tr("settings-title")).size(typography::TITLE_LG);

        let theme_options = ThemeMode::ALL.iter().fold(
            Row::new().spacing(spacing::MD),
            |row, mode| {
                row.push(radio(
                    i18n.tr(mode.i18n_key()),
                    *mode,
                    Some(self.theme_mode),
                    Message::ThemeModeSelected,
                ))
            },
        );

        let language_picker = pick_list(
            self.languages.as_slice(),
            Some(self.language.clone()),
            Message::LanguageSelected,
        )
        .width(Length::Fixed(sizing::PICKER_WIDTH));

        let content = Column::new()
            .spacing(spacing::LG)
            .push(title)
            .push(labeled(i18n.tr("settings-theme-label"), theme_options.into()))
            .push(labeled(
                i18n.tr("settings-language-label"),
                language_picker.into(),
            ))
            .push(
                button(Text::new(i18n.tr("settings-save")))
                    .padding(spacing::XS)
                    .on_press(Message::Save),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Left)
            .into()
    }
}

fn labeled<'a>(label: String, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::TITLE_SM))
        .push(control)
        .into()
}
