//! Shared UI components reusable across panels
//!
//! Contains:
//! - `style` - Accent colours, headings, cards and tag chips

pub mod style;
