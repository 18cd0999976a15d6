//! # Page Sections
//!
//! The portfolio has exactly five sections. Navigation order, slugs and
//! labels all come from here so no frontend ever compares section strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FolioError;

/// One of the five content categories the page can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Section {
    #[default]
    About,
    Projects,
    Experience,
    Skills,
    Education,
}

impl Section {
    /// All sections in navigation order
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Education,
    ];

    /// Lowercase identifier, also the serialized form
    pub fn slug(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Education => "education",
        }
    }

    /// Navigation label: the slug with its first letter capitalized
    pub fn label(&self) -> String {
        let slug = self.slug();
        let mut chars = slug.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = FolioError;

    /// Parse a slug, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == wanted)
            .ok_or_else(|| FolioError::unknown_section(s))
    }
}

impl TryFrom<String> for Section {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
