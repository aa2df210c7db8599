// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct is the composition root: it owns the one notification
//! `Provider`, hands its `Context` to components, and keeps the toast
//! `Surface` in step with the store after every update.

mod message;
mod screen;
mod view;

pub use message::{Flags, Message};
pub use screen::{Screen, Section};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::notifications::{
    use_notifications, Context, Notifications, Payload, Provider, Surface, Variant,
};
use crate::ui::settings::{self, State as SettingsState};
use iced::{window, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config_dir: Option<PathBuf>,
    /// Resolved once per mode change; `System` queries the OS.
    theme: Theme,
    settings: SettingsState,
    /// Owner of the notification store. Never re-created while the app runs.
    provider: Provider,
    /// Environment handed to components; has `provider` mounted.
    context: Context,
    toasts: Surface,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme", &self.theme)
            .field("provider", &self.provider)
            .field("pending_toasts", &self.toasts.pending_timers())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Builds the application state and arms timers for startup toasts.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.general.theme_mode;

        let provider = Provider::new();
        let context = provider.context();
        let toasts = Surface::new(&use_notifications(&context));
        let settings = SettingsState::new(theme_mode, &i18n);

        let mut app = App {
            i18n,
            screen: Screen::default(),
            config_dir,
            theme: theme_mode.iced_theme(),
            settings,
            provider,
            context,
            toasts,
        };

        if let Some(key) = config_warning {
            app.notifications().enqueue(
                Payload::destructive(app.i18n.tr(&key))
                    .with_description(app.i18n.tr(&format!("{key}-description"))),
            );
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = %theme_mode,
            "application started"
        );
        let task = app.sync_toasts();
        (app, task)
    }

    /// Accessor onto the mounted notification store.
    #[must_use]
    pub fn notifications(&self) -> Notifications {
        use_notifications(&self.context)
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn toasts(&self) -> &Surface {
        &self.toasts
    }

    pub fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                let notifications = self.notifications();
                return self
                    .toasts
                    .update(toast_message, &notifications)
                    .map(Message::Toast);
            }
            Message::Navbar(navbar_message) => {
                if let navbar::Event::SwitchScreen(screen) =
                    navbar::update(navbar_message, self.screen)
                {
                    tracing::debug!(?screen, "switch screen");
                    self.screen = screen;
                }
            }
            Message::Settings(settings_message) => {
                let event = self.settings.update(settings_message);
                self.handle_settings_event(event);
            }
        }

        self.sync_toasts()
    }

    fn handle_settings_event(&mut self, event: settings::Event) {
        match event {
            settings::Event::None => {}
            settings::Event::ThemeModeChanged(mode) => {
                self.theme = mode.iced_theme();
            }
            settings::Event::LanguageChanged(language) => {
                match language.parse() {
                    Ok(locale) => self.i18n.set_locale(locale),
                    Err(err) => {
                        tracing::warn!(%language, %err, "ignoring unparsable locale");
                        return;
                    }
                }
                let title = self.i18n.tr_with_args(
                    "notification-language-changed",
                    &[("language", language.as_str())],
                );
                self.notifications().enqueue(
                    Payload::new()
                        .with_title(title)
                        .with_variant(Variant::Default),
                );
            }
            settings::Event::SaveRequested(config) => self.save_settings(&config),
        }
    }

    fn save_settings(&mut self, config: &Config) {
        let payload = match config::save_with_override(config, self.config_dir.clone()) {
            Ok(()) => Payload::success(self.i18n.tr("notification-settings-saved")),
            Err(err) => {
                tracing::error!(%err, "failed to save settings");
                self.save_failure(&err)
            }
        };
        self.notifications().enqueue(payload);
    }

    fn save_failure(&self, err: &Error) -> Payload {
        Payload::destructive(self.i18n.tr("notification-settings-save-failed"))
            .with_description(self.i18n.tr(err.i18n_key()))
    }

    /// Arms timers for toasts raised since the last sync.
    fn sync_toasts(&mut self) -> Task<Message> {
        let notifications = self.notifications();
        self.toasts.sync(&notifications).map(Message::Toast)
    }
}
