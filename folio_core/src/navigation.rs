//! # Navigation State
//!
//! Which section is on screen and whether the mobile menu overlay is open.
//! This is the only mutable state of the page and it lives for one page
//! view; nothing here is persisted.

use crate::section::Section;

/// Selection state of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active_section: Section,
    mobile_menu_open: bool,
}

impl NavigationState {
    /// Start on `initial` with the mobile menu closed
    pub fn new(initial: Section) -> Self {
        NavigationState {
            active_section: initial,
            mobile_menu_open: false,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    /// Show `section`. Always closes the mobile menu.
    pub fn select_section(&mut self, section: Section) {
        tracing::debug!(from = %self.active_section, to = %section, "select section");
        self.active_section = section;
        self.mobile_menu_open = false;
    }

    /// Open or close the mobile menu overlay
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        tracing::debug!(open = self.mobile_menu_open, "toggle mobile menu");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let nav = NavigationState::default();
        assert_eq!(nav.active_section(), Section::About);
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_select_section_sets_active() {
        for section in Section::ALL {
            let mut nav = NavigationState::default();
            nav.select_section(section);
            assert_eq!(nav.active_section(), section);
            let active: Vec<Section> = Section::ALL.into_iter().filter(|s| nav.is_active(*s)).collect();
            assert_eq!(active, vec![section]);
        }
    }

    #[test]
    fn test_select_section_closes_mobile_menu() {
        for section in Section::ALL {
            let mut nav = NavigationState::new(Section::Projects);
            nav.toggle_mobile_menu();
            assert!(nav.is_mobile_menu_open());

            nav.select_section(section);
            assert!(!nav.is_mobile_menu_open());
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut nav = NavigationState::default();
        nav.toggle_mobile_menu();
        nav.toggle_mobile_menu();
        assert!(!nav.is_mobile_menu_open());

        let mut open = NavigationState::default();
        open.toggle_mobile_menu();
        open.toggle_mobile_menu();
        open.toggle_mobile_menu();
        assert!(open.is_mobile_menu_open());
    }

    #[test]
    fn test_toggle_keeps_section() {
        let mut nav = NavigationState::new(Section::Skills);
        nav.toggle_mobile_menu();
        assert_eq!(nav.active_section(), Section::Skills);
    }
}
