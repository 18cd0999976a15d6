//! About panel: headline, summary, email link and location

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};

use folio_core::{ContactLink, Profile};

use crate::Message;
use super::shared::style::{card, heading, ACCENT_LIGHT, MUTED};

/// Render the about panel
pub fn view(profile: &Profile) -> Element<'_, Message> {
    let email = ContactLink::email(&profile.email);

    let contact = row![
        button(text(&profile.email).size(13).color(ACCENT_LIGHT))
            .on_press(Message::OpenLink(email.href))
            .padding(0)
            .style(button::text),
        text("|").size(13).color(MUTED),
        text(&profile.location).size(13).color(ACCENT_LIGHT),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    card(
        column![
            heading(&profile.headline),
            text(&profile.summary).size(15).line_height(1.5),
            contact,
        ]
        .spacing(20),
    )
    .into()
}
