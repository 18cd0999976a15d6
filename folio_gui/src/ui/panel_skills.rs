//! Skills panel: a tile per skill with its icon and proficiency

use iced::widget::{column, container, row, text, Row};
use iced::{Alignment, Element, Length};

use folio_core::panel::SKILLS_HEADING;
use folio_core::Skill;

use crate::Message;
use super::shared::style::{card, heading, ACCENT, ACCENT_LIGHT, MUTED};

const TILE_WIDTH: f32 = 250.0;

/// Render the skills panel
pub fn view(skills: &[Skill], compact: bool) -> Element<'_, Message> {
    let tiles = skills.iter().map(|skill| view_tile(skill, compact));

    card(
        column![
            heading(SKILLS_HEADING),
            Row::with_children(tiles).spacing(16).wrap().vertical_spacing(16),
        ]
        .spacing(20),
    )
    .into()
}

fn view_tile(skill: &Skill, compact: bool) -> Element<'_, Message> {
    let width = if compact { Length::Fill } else { Length::Fixed(TILE_WIDTH) };

    container(
        row![
            text(skill.icon.symbol()).size(18).color(ACCENT).width(Length::Fixed(40.0)),
            text(&skill.name).size(14).color(ACCENT_LIGHT).width(Length::Fill),
            text(format!("{}%", skill.proficiency)).size(11).color(MUTED),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .padding(14)
    .width(width)
    .style(container::rounded_box)
    .into()
}
