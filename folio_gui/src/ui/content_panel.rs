//! Content Panel (Center)
//!
//! Dispatches the active panel to its view:
//! - About -> panel_about
//! - Projects -> panel_projects
//! - Skills -> panel_skills
//! - Experience, Education -> panel_timeline

use iced::Element;

use folio_core::panel::{EDUCATION_HEADING, EXPERIENCE_HEADING};
use folio_core::Panel;

use crate::Message;
use super::{panel_about, panel_projects, panel_skills, panel_timeline};

/// Render exactly one panel
pub fn view_content_panel(panel: Panel<'_>, compact: bool) -> Element<'_, Message> {
    match panel {
        Panel::About(profile) => panel_about::view(profile),
        Panel::Projects(projects) => panel_projects::view(projects, compact),
        Panel::Experience(entries) => panel_timeline::view(EXPERIENCE_HEADING, entries),
        Panel::Skills(skills) => panel_skills::view(skills, compact),
        Panel::Education(entries) => panel_timeline::view(EDUCATION_HEADING, entries),
    }
}
