//! # Portfolio Content
//!
//! The biographical data rendered by the page. Nothing here knows about
//! layout; a frontend receives these values through [`crate::panel::Panel`].
//!
//! ## Structure
//!
//! ```text
//! Content
//! ├── version: schema version of the content file
//! ├── profile: Profile (name, title, summary, contact details)
//! ├── projects: Vec<Project>
//! ├── skills: Vec<Skill>
//! ├── experience: Vec<TimelineEntry>
//! └── education: Vec<TimelineEntry>
//! ```
//!
//! Built-in content ships in `content/portfolio.json`; see
//! [`crate::content_io`] for loading a replacement file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{FolioError, FolioResult};

/// Current schema version for content files
pub const CONTENT_SCHEMA_VERSION: &str = "0.1.0";

/// Highest allowed skill proficiency
pub const MAX_PROFICIENCY: u8 = 100;

/// Root content container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Schema version of the file this content came from
    pub version: String,
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
}

/// Who the portfolio is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Job title shown under the name in the header
    pub title: String,
    /// Heading of the about panel
    pub headline: String,
    pub summary: String,
    pub email: String,
    pub location: String,
    pub linkedin_url: String,
}

/// A showcased project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags, in display order
    pub technologies: Vec<String>,
}

/// A skill with its proficiency and icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed level, 0-100
    pub proficiency: u8,
    pub icon: SkillIcon,
}

/// Icon reference for a skill category.
///
/// Frontends decide how to draw these; [`SkillIcon::symbol`] is a plain-text
/// fallback usable by any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    Code,
    Server,
    Box,
    GitBranch,
    Cloud,
    Database,
    Globe,
    Terminal,
    Layout,
    FileText,
}

impl SkillIcon {
    /// Short text symbol for the icon
    pub fn symbol(&self) -> &'static str {
        match self {
            SkillIcon::Code => "</>",
            SkillIcon::Server => "[=]",
            SkillIcon::Box => "[#]",
            SkillIcon::GitBranch => "-<",
            SkillIcon::Cloud => "(~)",
            SkillIcon::Database => "(=)",
            SkillIcon::Globe => "(@)",
            SkillIcon::Terminal => ">_",
            SkillIcon::Layout => "[|]",
            SkillIcon::FileText => "[.]",
        }
    }
}

/// One entry of the experience or education timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Role or qualification
    pub heading: String,
    /// Employer or institution
    pub organization: String,
    /// Free-form date range, e.g. "June 2022 - November 2024"
    pub period: String,
    pub highlights: Vec<String>,
}

impl TimelineEntry {
    /// "Organization | Period" line shown under the heading
    pub fn subtitle(&self) -> String {
        format!("{} | {}", self.organization, self.period)
    }
}

impl Content {
    /// Check the content rules that serde cannot express.
    ///
    /// Returns the first violation found, naming the offending field.
    pub fn validate(&self) -> FolioResult<()> {
        let profile = &self.profile;

        if profile.name.trim().is_empty() {
            return Err(FolioError::invalid_content("profile.name", "Name must not be empty"));
        }

        if profile.email.trim().is_empty() {
            return Err(FolioError::invalid_content("profile.email", "Email must not be empty"));
        }
        if !profile.email.contains('@') {
            return Err(FolioError::invalid_content(
                "profile.email",
                format!("'{}' is not an email address", profile.email),
            ));
        }

        if !(profile.linkedin_url.starts_with("https://") || profile.linkedin_url.starts_with("http://")) {
            return Err(FolioError::invalid_content(
                "profile.linkedin_url",
                format!("'{}' must be an http(s) URL", profile.linkedin_url),
            ));
        }

        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(FolioError::invalid_content(
                    format!("projects[{}].title", i),
                    "Project title must not be empty",
                ));
            }
        }

        let mut seen = HashSet::new();
        for (i, skill) in self.skills.iter().enumerate() {
            if skill.proficiency > MAX_PROFICIENCY {
                return Err(FolioError::invalid_content(
                    format!("skills[{}].proficiency", i),
                    format!(
                        "Proficiency {} for '{}' is above {}",
                        skill.proficiency, skill.name, MAX_PROFICIENCY
                    ),
                ));
            }
            if !seen.insert(skill.name.as_str()) {
                return Err(FolioError::invalid_content(
                    format!("skills[{}].name", i),
                    format!("Duplicate skill '{}'", skill.name),
                ));
            }
        }

        Ok(())
    }
}
