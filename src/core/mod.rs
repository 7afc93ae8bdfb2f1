//! Core navigation logic, independent of the DOM.
//!
//! This module provides:
//! - [`build_nav_bar`] and [`page_id_from_path`] for the navigation builder
//! - [`redistribute`] and the [`NavSurface`] seam for overflow handling

pub mod builder;
pub mod error;
pub mod overflow;

pub use builder::{build_nav_bar, page_id_from_path};
pub use overflow::{Measurements, NavSurface, PassOutcome, redistribute};
