//! DOM-facing components.
//!
//! - [`fragment`] - Header/footer loading
//! - [`navbar`] - Navigation bar rendering (Leptos)
//! - [`surface`] - Live-document measurement and entry moves
//! - [`overflow`] - Settle and resize triggers for redistribution
//! - [`menu`] - Dropdown dismissal and the hamburger toggle
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod fragment;
pub mod icons;
pub mod menu;
pub mod navbar;
pub mod overflow;
pub mod surface;
