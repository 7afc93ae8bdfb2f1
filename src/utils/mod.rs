//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Element lookup and measurement helpers
//! - [`fetch_text`] - Network fetching with timeout
//! - [`Debouncer`] - Single-slot timer debouncing

mod debounce;
pub mod dom;
mod fetch;

pub use debounce::Debouncer;
pub use fetch::fetch_text;
