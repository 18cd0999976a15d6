//! Header
//!
//! Name and job title on the left. On the right either the inline section
//! buttons (wide layout) or the menu toggle (compact layout).

use iced::widget::{button, column, row, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use folio_core::{NavigationState, Profile, Section};

use crate::Message;
use super::shared::style::{ACCENT, MUTED};

/// Render the page header
pub fn view_header<'a>(profile: &'a Profile, nav: &NavigationState, compact: bool) -> Element<'a, Message> {
    let title = column![
        text(&profile.name).size(30).color(ACCENT),
        text(&profile.title).size(12).color(MUTED),
    ]
    .spacing(2);

    let controls = if compact {
        view_menu_toggle(nav.is_mobile_menu_open())
    } else {
        view_nav_bar(nav)
    };

    row![title, Space::new().width(Length::Fill), controls]
        .align_y(Alignment::Center)
        .into()
}

/// Inline navigation, one button per section
fn view_nav_bar(nav: &NavigationState) -> Element<'static, Message> {
    let buttons = Section::ALL.into_iter().map(|section| {
        button(text(section.label()).size(13))
            .on_press(Message::SelectSection(section))
            .padding(Padding::from([6, 14]))
            .style(if nav.is_active(section) { button::primary } else { button::secondary })
            .into()
    });

    Row::with_children(buttons).spacing(8).into()
}

/// Hamburger button; shows a close mark while the menu is open
fn view_menu_toggle(open: bool) -> Element<'static, Message> {
    let glyph = if open { "×" } else { "≡" };

    button(text(glyph).size(22).color(ACCENT))
        .on_press(Message::ToggleMobileMenu)
        .padding(Padding::from([2, 10]))
        .style(button::text)
        .into()
}
