use crate::content::SectionId;

/// Open/closed state of the slide-out navigation menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!("Menu toggled, open = {}", self.open);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Leave the menu closed and hand back the section to scroll to.
    ///
    /// Always closes, whether navigation started from the menu or from
    /// elsewhere on the page while the menu was already closed.
    pub fn navigate(&mut self, target: SectionId) -> SectionId {
        self.close();
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_from_open_menu_closes_it() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert_eq!(menu.navigate(SectionId::Gallery), SectionId::Gallery);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_while_closed_keeps_it_closed() {
        let mut menu = MenuState::default();
        assert_eq!(menu.navigate(SectionId::About), SectionId::About);
        assert!(!menu.is_open());
    }
}
