//! Colours and small building blocks shared by every panel

use iced::widget::{container, text, Container, Text};
use iced::{Element, Length, Padding};

use crate::Message;

/// Headings and names
pub const ACCENT: [f32; 3] = [0.75, 0.52, 0.98];
/// Sub-headings and tag text
pub const ACCENT_LIGHT: [f32; 3] = [0.85, 0.71, 0.99];
/// Secondary text (periods, job title, footer)
pub const MUTED: [f32; 3] = [0.6, 0.6, 0.65];

/// Panel heading
pub fn heading<'a>(label: impl text::IntoFragment<'a>) -> Text<'a> {
    text(label).size(26).color(ACCENT)
}

/// Bordered box wrapping a whole panel
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fill)
        .style(container::bordered_box)
}

/// Rounded chip used for technology tags
pub fn tag<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(11).color(ACCENT_LIGHT))
        .padding(Padding::from([3, 10]))
        .style(container::rounded_box)
        .into()
}
