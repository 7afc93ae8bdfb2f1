//! Mobile (hamburger) menu state.

/// Glyph shown in the hamburger trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGlyph {
    Bars,
    Close,
}

/// Open/closed state of the mobile menu.
///
/// Only the hamburger trigger changes this state; there is no outside-click
/// or key dismissal, unlike the overflow dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    is_open: bool,
}

impl MobileMenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn glyph(&self) -> MenuGlyph {
        if self.is_open {
            MenuGlyph::Close
        } else {
            MenuGlyph::Bars
        }
    }
}

/// ARIA boolean attribute value.
#[inline]
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let state = MobileMenuState::default();
        assert!(!state.is_open());
        assert_eq!(state.glyph(), MenuGlyph::Bars);
    }

    #[test]
    fn test_toggle_swaps_glyph() {
        let mut state = MobileMenuState::default();
        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.glyph(), MenuGlyph::Close);

        state.toggle();
        assert!(!state.is_open());
        assert_eq!(state.glyph(), MenuGlyph::Bars);
    }

    #[test]
    fn test_aria_bool() {
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }
}
