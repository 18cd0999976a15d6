//! # Folio GUI Application
//!
//! Single-page portfolio viewer built with Iced for desktop and WASM.
//!
//! The page is a header with navigation, one content panel for the active
//! section and a footer. Below the compact breakpoint the inline navigation
//! collapses into a menu button that opens an overlay.

mod links;
mod ui;

use folio_core::{Content, NavigationState, Section, SiteConfig};
use iced::{window, Element, Size, Subscription, Task, Theme};

/// Initial window size for native builds
const INITIAL_WINDOW_SIZE: Size = Size::new(1100.0, 800.0);

#[derive(Debug, Clone)]
pub enum Message {
    /// A navigation button was pressed (desktop bar or mobile menu)
    SelectSection(Section),
    /// The hamburger / close button was pressed
    ToggleMobileMenu,
    /// A contact link was pressed; carries the href
    OpenLink(String),
    WindowResized(Size),
}

pub struct App {
    pub content: Content,
    pub nav: NavigationState,
    pub config: SiteConfig,
    pub window_width: f32,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = SiteConfig::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unusable, using defaults");
            SiteConfig::default()
        });

        let content = config.load_content().or_else(|e| {
            tracing::warn!(error = %e, "content file unusable, falling back to built-in content");
            Content::builtin()
        });

        let content = match content {
            Ok(content) => content,
            Err(e) => {
                // Built-in content is checked by tests; reaching this is a packaging bug
                tracing::error!(error = %e, "built-in content is invalid");
                std::process::exit(1);
            }
        };

        (App::with(config, content), Task::none())
    }

    /// Build the app from already-loaded config and content
    pub fn with(config: SiteConfig, content: Content) -> Self {
        App {
            nav: NavigationState::new(config.initial_section),
            content,
            config,
            window_width: INITIAL_WINDOW_SIZE.width,
        }
    }

    /// Narrow layout: menu button instead of inline navigation
    pub fn is_compact(&self) -> bool {
        self.window_width < self.config.compact_breakpoint
    }

    /// The overlay menu only exists in the compact layout
    pub fn shows_mobile_menu(&self) -> bool {
        self.is_compact() && self.nav.is_mobile_menu_open()
    }

    fn title(&self) -> String {
        format!("{} - {}", self.content.profile.name, self.nav.active_section().label())
    }

    fn theme(&self) -> Theme {
        if self.config.dark_mode {
            Theme::Dracula
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectSection(section) => {
                self.nav.select_section(section);
            }
            Message::ToggleMobileMenu => {
                self.nav.toggle_mobile_menu();
            }
            Message::OpenLink(href) => {
                tracing::info!(%href, "opening link");
                if let Err(e) = links::open_url(&href) {
                    tracing::warn!(%href, error = %e, "failed to open link");
                }
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        ui::page::view_page(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> iced::Result {
    init_tracing();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(INITIAL_WINDOW_SIZE)
        .run()
}

#[cfg(target_arch = "wasm32")]
fn main() -> iced::Result {
    console_error_panic_hook::set_once();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with(SiteConfig::default(), Content::builtin().unwrap())
    }

    fn compact_app() -> App {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(400.0, 800.0)));
        app
    }

    #[test]
    fn test_starts_on_configured_section() {
        let config = SiteConfig {
            initial_section: Section::Education,
            ..SiteConfig::default()
        };
        let app = App::with(config, Content::builtin().unwrap());
        assert_eq!(app.nav.active_section(), Section::Education);
    }

    #[test]
    fn test_select_section_message() {
        let mut app = app();
        for section in Section::ALL {
            let _ = app.update(Message::SelectSection(section));
            assert_eq!(app.nav.active_section(), section);
        }
    }

    #[test]
    fn test_selecting_from_mobile_menu_closes_it() {
        let mut app = compact_app();
        let _ = app.update(Message::ToggleMobileMenu);
        assert!(app.shows_mobile_menu());

        let _ = app.update(Message::SelectSection(Section::Projects));
        assert!(!app.shows_mobile_menu());
        assert_eq!(app.nav.active_section(), Section::Projects);
    }

    #[test]
    fn test_breakpoint_switches_layout() {
        let mut app = app();
        assert!(!app.is_compact());

        let _ = app.update(Message::WindowResized(Size::new(767.0, 600.0)));
        assert!(app.is_compact());

        let _ = app.update(Message::WindowResized(Size::new(768.0, 600.0)));
        assert!(!app.is_compact());
    }

    #[test]
    fn test_overlay_hidden_in_wide_layout() {
        let mut app = compact_app();
        let _ = app.update(Message::ToggleMobileMenu);
        assert!(app.shows_mobile_menu());

        let _ = app.update(Message::WindowResized(Size::new(1200.0, 800.0)));
        assert!(app.nav.is_mobile_menu_open());
        assert!(!app.shows_mobile_menu());
    }

    #[test]
    fn test_title_tracks_section() {
        let mut app = app();
        let _ = app.update(Message::SelectSection(Section::Skills));
        assert_eq!(app.title(), "Adnan Habib - Skills");
    }
}
