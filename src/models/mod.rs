//! Data models for the site header.
//!
//! - [`NavLink`], [`NavEntry`], [`NavBar`] - Navigation entries and their inline/overflow partition
//! - [`OverflowSlot`], [`DropdownEvent`] - The "More" dropdown
//! - [`MobileMenuState`], [`MenuGlyph`] - The hamburger menu

mod menu;
mod nav;
mod overflow;

pub use menu::{MenuGlyph, MobileMenuState, aria_bool};
pub use nav::{NavBar, NavEntry, NavLink, PageAlias};
pub use overflow::{DropdownEvent, OverflowSlot, is_dismiss_key};
