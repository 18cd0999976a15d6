//! Projects panel
//!
//! One card per project: title, description and a chip for every
//! technology. Cards wrap into a grid; in the compact layout each card takes
//! the full width.

use iced::widget::{column, container, text, Row};
use iced::{Element, Length};

use folio_core::Project;

use crate::Message;
use super::shared::style::{tag, ACCENT};

/// Card width in the wide layout
const CARD_WIDTH: f32 = 340.0;

/// Render the project cards
pub fn view(projects: &[Project], compact: bool) -> Element<'_, Message> {
    let cards = projects.iter().map(|project| view_card(project, compact));

    Row::with_children(cards)
        .spacing(20)
        .wrap()
        .vertical_spacing(20)
        .into()
}

fn view_card(project: &Project, compact: bool) -> Element<'_, Message> {
    let tags = Row::with_children(project.technologies.iter().map(|tech| tag(tech)))
        .spacing(6)
        .wrap()
        .vertical_spacing(6);

    let width = if compact { Length::Fill } else { Length::Fixed(CARD_WIDTH) };

    container(
        column![
            text(&project.title).size(18).color(ACCENT),
            text(&project.description).size(13),
            tags,
        ]
        .spacing(12),
    )
    .padding(20)
    .width(width)
    .style(container::bordered_box)
    .into()
}
