//! Page Layout
//!
//! ```text
//! ┌ header ───────────────────────────────┐
//! ├───────────────────────────────────────┤
//! │ mobile menu overlay (compact + open)  │
//! │ active panel                          │
//! │ footer                                │
//! └───────────────────────────────────────┘
//! ```

use iced::widget::{column, container, rule, scrollable, Space, Stack};
use iced::{Element, Length, Padding};

use folio_core::{Footer, Panel};

use crate::{App, Message};
use super::{content_panel, footer, header, mobile_menu};

/// Render the whole page for the current state
pub fn view_page(app: &App) -> Element<'_, Message> {
    let compact = app.is_compact();
    let profile = &app.content.profile;

    let header = container(header::view_header(profile, &app.nav, compact))
        .padding(Padding::from([12, 24]))
        .width(Length::Fill);

    let panel = Panel::for_section(app.nav.active_section(), &app.content);
    let side_padding: u16 = if compact { 12 } else { 48 };

    let body = column![
        content_panel::view_content_panel(panel, compact),
        Space::new().height(32),
        footer::view_footer(Footer::current(profile)),
    ]
    .padding(Padding::from([24, side_padding]));

    let main = scrollable(body).width(Length::Fill).height(Length::Fill);

    let mut layers = Stack::new()
        .push(main)
        .width(Length::Fill)
        .height(Length::Fill);

    if app.shows_mobile_menu() {
        layers = layers.push(mobile_menu::view_mobile_menu(&app.nav));
    }

    column![header, rule::horizontal(1), layers].into()
}
