//! Mobile menu overlay
//!
//! Full-width section buttons drawn over the top of the page body. Picking a
//! section closes the overlay (see `NavigationState::select_section`).

use iced::widget::{button, container, text, Column};
use iced::{Element, Length, Padding};

use folio_core::{NavigationState, Section};

use crate::Message;

/// Render the overlay menu
pub fn view_mobile_menu(nav: &NavigationState) -> Element<'static, Message> {
    let entries = Section::ALL.into_iter().map(|section| {
        button(text(section.label()).size(15).center().width(Length::Fill))
            .on_press(Message::SelectSection(section))
            .padding(Padding::from([10, 0]))
            .width(Length::Fill)
            .style(if nav.is_active(section) { button::primary } else { button::text })
            .into()
    });

    container(Column::with_children(entries).spacing(4))
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
