//! # Panel Render Model
//!
//! A [`Panel`] is what a frontend draws for the active section: a tagged
//! variant borrowing exactly the content that section needs. Adding or
//! removing a section is a compile error in every frontend's `match`.
//!
//! The [`Footer`] and [`ContactLink`]s are shared by every panel.

use chrono::{Datelike, Local};
use serde::Serialize;

use crate::content::{Content, Profile, Project, Skill, TimelineEntry};
use crate::section::Section;

/// Heading of the skills panel
pub const SKILLS_HEADING: &str = "Technical Expertise";
/// Heading of the experience panel
pub const EXPERIENCE_HEADING: &str = "Professional Journey";
/// Heading of the education panel
pub const EDUCATION_HEADING: &str = "Educational Journey";

/// The content block for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "section", content = "data", rename_all = "lowercase")]
pub enum Panel<'a> {
    About(&'a Profile),
    Projects(&'a [Project]),
    Experience(&'a [TimelineEntry]),
    Skills(&'a [Skill]),
    Education(&'a [TimelineEntry]),
}

impl<'a> Panel<'a> {
    /// Select the panel for `section`
    pub fn for_section(section: Section, content: &'a Content) -> Panel<'a> {
        match section {
            Section::About => Panel::About(&content.profile),
            Section::Projects => Panel::Projects(&content.projects),
            Section::Experience => Panel::Experience(&content.experience),
            Section::Skills => Panel::Skills(&content.skills),
            Section::Education => Panel::Education(&content.education),
        }
    }

    /// The section this panel belongs to
    pub fn section(&self) -> Section {
        match self {
            Panel::About(_) => Section::About,
            Panel::Projects(_) => Section::Projects,
            Panel::Experience(_) => Section::Experience,
            Panel::Skills(_) => Section::Skills,
            Panel::Education(_) => Section::Education,
        }
    }

    /// Heading drawn above the panel body. The projects grid has none.
    pub fn heading(&self) -> Option<&'a str> {
        match *self {
            Panel::About(profile) => Some(profile.headline.as_str()),
            Panel::Projects(_) => None,
            Panel::Experience(_) => Some(EXPERIENCE_HEADING),
            Panel::Skills(_) => Some(SKILLS_HEADING),
            Panel::Education(_) => Some(EDUCATION_HEADING),
        }
    }
}

/// An outbound link in the footer or about panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

impl ContactLink {
    /// `mailto:` link for an address
    pub fn email(address: &str) -> Self {
        ContactLink {
            label: "Email".to_string(),
            href: format!("mailto:{}", address),
        }
    }

    pub fn linkedin(url: &str) -> Self {
        ContactLink {
            label: "LinkedIn".to_string(),
            href: url.to_string(),
        }
    }

    /// The two contact links of a profile: LinkedIn, then email
    pub fn for_profile(profile: &Profile) -> [ContactLink; 2] {
        [
            ContactLink::linkedin(&profile.linkedin_url),
            ContactLink::email(&profile.email),
        ]
    }
}

/// Page footer: contact links and copyright notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub owner: String,
    pub year: i32,
    pub links: [ContactLink; 2],
}

impl Footer {
    pub fn new(profile: &Profile, year: i32) -> Self {
        Footer {
            owner: profile.name.clone(),
            year,
            links: ContactLink::for_profile(profile),
        }
    }

    /// Footer stamped with the current local calendar year
    pub fn current(profile: &Profile) -> Self {
        Footer::new(profile, current_year())
    }

    pub fn notice(&self) -> String {
        format!("© {} {}. All rights reserved.", self.year, self.owner)
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> Content {
        Content::builtin().unwrap()
    }

    #[test]
    fn test_panel_borrows_its_sections_content() {
        let content = content();
        for active in Section::ALL {
            let panel = Panel::for_section(active, &content);
            assert_eq!(panel.section(), active);

            let borrows_own_data = match panel {
                Panel::About(profile) => std::ptr::eq(profile, &content.profile),
                Panel::Projects(projects) => std::ptr::eq(projects, content.projects.as_slice()),
                Panel::Experience(entries) => std::ptr::eq(entries, content.experience.as_slice()),
                Panel::Skills(skills) => std::ptr::eq(skills, content.skills.as_slice()),
                Panel::Education(entries) => std::ptr::eq(entries, content.education.as_slice()),
            };
            assert!(borrows_own_data, "{} panel points at the wrong data", active);
        }
    }

    #[test]
    fn test_projects_panel_carries_every_project() {
        let content = content();
        match Panel::for_section(Section::Projects, &content) {
            Panel::Projects(projects) => {
                assert_eq!(projects.len(), 3);
                assert_eq!(projects[0].title, "NHS Trust Integration System");
                assert_eq!(
                    projects[0].technologies,
                    vec!["Python", "Java", "Healthcare APIs", "Integration"]
                );
            }
            other => panic!("unexpected panel: {:?}", other.section()),
        }
    }

    #[test]
    fn test_skills_panel_carries_every_skill() {
        let content = content();
        match Panel::for_section(Section::Skills, &content) {
            Panel::Skills(skills) => assert_eq!(skills.len(), 11),
            other => panic!("unexpected panel: {:?}", other.section()),
        }
    }

    #[test]
    fn test_headings() {
        let content = content();
        assert_eq!(
            Panel::for_section(Section::About, &content).heading(),
            Some("Building Tomorrow's Healthcare Integration")
        );
        assert_eq!(Panel::for_section(Section::Projects, &content).heading(), None);
        assert_eq!(
            Panel::for_section(Section::Skills, &content).heading(),
            Some(SKILLS_HEADING)
        );
    }

    #[test]
    fn test_contact_links() {
        let content = content();
        let [linkedin, email] = ContactLink::for_profile(&content.profile);
        assert_eq!(linkedin.label, "LinkedIn");
        assert_eq!(linkedin.href, "https://www.linkedin.com/in/adnanhabib03");
        assert_eq!(email.href, "mailto:hello@adnanhabib.co.uk");
    }

    #[test]
    fn test_footer_uses_current_year() {
        let content = content();
        let footer = Footer::current(&content.profile);
        assert_eq!(footer.year, Local::now().year());
    }

    #[test]
    fn test_footer_notice() {
        let content = content();
        let footer = Footer::new(&content.profile, 2025);
        assert_eq!(footer.notice(), "© 2025 Adnan Habib. All rights reserved.");
    }

    #[test]
    fn test_panel_json_is_tagged_by_section() {
        let content = content();
        let json = serde_json::to_value(Panel::for_section(Section::Skills, &content)).unwrap();
        assert_eq!(json["section"], "skills");
        assert_eq!(json["data"].as_array().unwrap().len(), 11);
    }
}
