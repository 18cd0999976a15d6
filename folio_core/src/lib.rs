//! # folio_core - Portfolio Content and Navigation
//!
//! `folio_core` holds everything about the portfolio page that is not pixels:
//! the biographical content, the navigation state and the panel render model
//! that frontends draw. All content types are JSON-serializable, so the page
//! can be re-skinned with a different content file without touching any
//! rendering code.
//!
//! ## Design Philosophy
//!
//! - **Data, not markup**: projects, skills and timelines live in [`content`]
//! - **Closed sections**: [`Section`] is an enum, panel selection is an exhaustive match
//! - **Frontend agnostic**: the GUI and CLI both render [`Panel`] values
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_core::{Content, NavigationState, Panel, Section};
//!
//! let content = Content::builtin().unwrap();
//! let mut nav = NavigationState::default();
//!
//! nav.select_section(Section::Skills);
//! let panel = Panel::for_section(nav.active_section(), &content);
//! assert_eq!(panel.section(), Section::Skills);
//! ```
//!
//! ## Modules
//!
//! - [`section`] - The five page sections and their labels
//! - [`content`] - Profile, projects, skills and timeline entries
//! - [`navigation`] - Active section and mobile menu state
//! - [`panel`] - Per-section render model, footer and contact links
//! - [`content_io`] - Loading and atomically saving content files
//! - [`config`] - TOML site configuration
//! - [`errors`] - Structured error types

pub mod config;
pub mod content;
pub mod content_io;
pub mod errors;
pub mod navigation;
pub mod panel;
pub mod section;

// Re-export commonly used types at crate root for convenience
pub use config::SiteConfig;
pub use content::{Content, Profile, Project, Skill, SkillIcon, TimelineEntry};
pub use content_io::{load_content, save_content};
pub use errors::{FolioError, FolioResult};
pub use navigation::NavigationState;
pub use panel::{ContactLink, Footer, Panel};
pub use section::Section;
