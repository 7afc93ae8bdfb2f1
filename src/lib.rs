//! Shared header, footer and responsive navigation for the static site.
//!
//! Every page carries two placeholders. At startup the shared header and
//! footer fragments are fetched into them, the navigation bar is built into
//! the header, and a redistribution pass moves trailing entries into the
//! "More" dropdown whenever the bar would not fit on one line.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
