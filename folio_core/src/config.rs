//! # Site Configuration
//!
//! Optional TOML file at `<config_dir>/folio/config.toml`:
//!
//! ```toml
//! content_path = "/home/me/portfolio.json"
//! initial_section = "projects"
//! compact_breakpoint = 768.0
//! dark_mode = true
//! ```
//!
//! Every key is optional. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::content_io::load_content;
use crate::errors::{FolioError, FolioResult};
use crate::section::Section;

/// Width below which frontends switch to the compact (mobile) header
pub const DEFAULT_COMPACT_BREAKPOINT: f32 = 768.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Content file replacing the built-in content
    pub content_path: Option<PathBuf>,
    /// Section shown when the page opens
    pub initial_section: Section,
    /// Logical pixel width of the compact layout breakpoint
    pub compact_breakpoint: f32,
    pub dark_mode: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content_path: None,
            initial_section: Section::About,
            compact_breakpoint: DEFAULT_COMPACT_BREAKPOINT,
            dark_mode: true,
        }
    }
}

impl SiteConfig {
    /// Default config file location, if the platform has a config directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn default_path() -> Option<PathBuf> {
        None
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> FolioResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(SiteConfig::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> FolioResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(SiteConfig::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| FolioError::config_error(path.display().to_string(), e.to_string()))?;

        let config = Self::from_toml_str(&text)
            .map_err(|e| FolioError::config_error(path.display().to_string(), e.to_string()))?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> FolioResult<Self> {
        let table: toml::Table = toml::from_str(text).map_err(|e| FolioError::SerializationError {
            reason: e.to_string(),
        })?;

        // Section slugs go through Section::from_str so a typo reports UnknownSection
        if let Some(slug) = table.get("initial_section").and_then(toml::Value::as_str) {
            slug.parse::<Section>()?;
        }

        let config: SiteConfig = toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| FolioError::SerializationError {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FolioResult<()> {
        if !self.compact_breakpoint.is_finite() || self.compact_breakpoint <= 0.0 {
            return Err(FolioError::invalid_content(
                "compact_breakpoint",
                format!("Breakpoint must be a positive width, got {}", self.compact_breakpoint),
            ));
        }
        Ok(())
    }

    /// Content named by `content_path`, or the built-in content
    pub fn load_content(&self) -> FolioResult<Content> {
        match &self.content_path {
            Some(path) => load_content(path),
            None => Content::builtin(),
        }
    }
}
