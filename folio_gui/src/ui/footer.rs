//! Footer
//!
//! Displays:
//! - LinkedIn and email links
//! - Copyright notice stamped with the current year

use iced::widget::{button, column, text, Row};
use iced::{Alignment, Element, Length, Padding};

use folio_core::Footer;

use crate::Message;
use super::shared::style::MUTED;

/// Render the footer
pub fn view_footer(footer: Footer) -> Element<'static, Message> {
    let notice = footer.notice();

    let links = footer.links.into_iter().map(|link| {
        button(text(link.label).size(13).color(MUTED))
            .on_press(Message::OpenLink(link.href))
            .padding(Padding::from([4, 8]))
            .style(button::text)
            .into()
    });

    column![
        Row::with_children(links).spacing(24),
        text(notice).size(11).color(MUTED),
    ]
    .spacing(8)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}
