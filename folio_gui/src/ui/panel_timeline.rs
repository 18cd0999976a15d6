//! Timeline panel, shared by experience and education
//!
//! Each entry shows the role or qualification, an "organization | period"
//! line and a bullet list of highlights.

use iced::widget::{column, container, text, Column};
use iced::{Element, Padding};

use folio_core::TimelineEntry;

use crate::Message;
use super::shared::style::{card, heading, ACCENT_LIGHT, MUTED};

/// Render a timeline under `title`
pub fn view<'a>(title: &'a str, entries: &'a [TimelineEntry]) -> Element<'a, Message> {
    let items = entries.iter().map(view_entry);

    card(
        column![
            heading(title),
            Column::with_children(items).spacing(28),
        ]
        .spacing(20),
    )
    .into()
}

fn view_entry(entry: &TimelineEntry) -> Element<'_, Message> {
    let bullets = entry
        .highlights
        .iter()
        .map(|highlight| text(format!("•  {}", highlight)).size(13).into());

    container(
        column![
            text(&entry.heading).size(18).color(ACCENT_LIGHT),
            text(entry.subtitle()).size(12).color(MUTED),
            Column::with_children(bullets).spacing(6),
        ]
        .spacing(6),
    )
    .padding(Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 16.0,
    })
    .into()
}
