//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::MenuGlyph;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{LuChevronDown as ChevronDown, LuMenu as Menu, LuX as Close};
}

mod bootstrap {
    pub use icondata::{BsChevronDown as ChevronDown, BsList as Menu, BsXLg as Close};
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);

/// Icon for the hamburger trigger.
pub fn menu_glyph(glyph: MenuGlyph) -> Icon {
    match glyph {
        MenuGlyph::Bars => MENU,
        MenuGlyph::Close => CLOSE,
    }
}
