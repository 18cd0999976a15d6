//! UI module for the Folio GUI
//!
//! # Layout
//! - `page` - Header, navigation overlay, scrollable body, footer
//! - `header` - Name/title plus inline navigation or menu button
//! - `mobile_menu` - Overlay navigation for the compact layout
//! - `content_panel` - Dispatches the active [`folio_core::Panel`] to a panel view
//! - `footer` - Contact links and copyright notice
//!
//! # Panels
//! - `panel_about` - Headline, summary, email and location
//! - `panel_projects` - Project cards with technology tags
//! - `panel_skills` - Skill tiles with icons
//! - `panel_timeline` - Experience and education timelines
//!
//! # Shared Components
//! - `shared::style` - Colours, headings, cards and tags

pub mod page;
pub mod header;
pub mod mobile_menu;
pub mod content_panel;
pub mod footer;

pub mod panel_about;
pub mod panel_projects;
pub mod panel_skills;
pub mod panel_timeline;

pub mod shared;
