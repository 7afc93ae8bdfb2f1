//! Site configuration.
//!
//! Centralizes the constants used by the header, footer and navigation
//! code. The link list, selectors and layout tunables are loaded at compile
//! time from `assets/site.toml` using `include_str!`.

use std::sync::OnceLock;

use leptos::logging::warn;
use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::models::{NavLink, PageAlias};

// =============================================================================
// Embedded Assets
// =============================================================================

/// Site configuration source.
const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// DOM Contract
// =============================================================================

/// Structural class names shared with the site stylesheet.
pub mod classes {
    pub const MORE: &str = "more";
    pub const MORE_LIST: &str = "more-list";
    pub const MORE_TOGGLE: &str = "more-toggle";
    pub const MORE_COUNT: &str = "more-count";
    pub const DONATE_LI: &str = "donate-li";
    pub const ACTIVE: &str = "active";
    pub const OPEN: &str = "open";
    pub const LONG_MENU: &str = "long-menu";
    pub const CURRENT_YEAR: &str = "current-year";
}

/// Attribute carrying an entry's position in the link list.
pub const NAV_INDEX_ATTR: &str = "data-nav-index";

/// Page identifier used when the location path names a directory.
pub const DEFAULT_PAGE: &str = "index.html";

/// `KeyboardEvent.key` values that close the overflow dropdown.
pub const DISMISS_KEYS: &[&str] = &["Escape", "Esc"];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used by the header controls.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Site Configuration
// =============================================================================

/// Parsed `site.toml`. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub nav: NavSection,
    pub selectors: Selectors,
    pub layout: LayoutConfig,
}

/// Fragment locations and fetch behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub header_url: String,
    pub footer_url: String,
    /// Fetch request timeout in milliseconds.
    pub fetch_timeout_ms: i32,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            header_url: "header.html".to_string(),
            footer_url: "footer.html".to_string(),
            fetch_timeout_ms: 10_000,
        }
    }
}

/// Navigation content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavSection {
    pub links: Vec<NavLink>,
    /// Absent from a `[nav]` table means no alias.
    #[serde(default)]
    pub alias: Option<PageAlias>,
    pub cta: NavLink,
}

impl Default for NavSection {
    fn default() -> Self {
        Self {
            links: vec![
                NavLink::new("Home", "index.html"),
                NavLink::new("About", "about.html"),
                NavLink::new("Programs", "programs.html"),
                NavLink::new("Events", "events.html"),
                NavLink::new("Volunteer", "volunteer.html"),
                NavLink::new("Contact", "contact.html"),
                NavLink::new("Admin", "admin.html"),
            ],
            alias: Some(PageAlias {
                page: "gallery.html".to_string(),
                target: "events.html".to_string(),
            }),
            cta: NavLink::new("Donate", "donate.html"),
        }
    }
}

/// CSS selectors for the elements the header code looks up.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header_placeholder: String,
    pub footer_placeholder: String,
    /// The full-width bar holding logo, links and call-to-action.
    pub bar: String,
    pub nav_links: String,
    pub menu_toggle: String,
    pub logo: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header_placeholder: "#header-placeholder".to_string(),
            footer_placeholder: "#footer-placeholder".to_string(),
            bar: "nav".to_string(),
            nav_links: ".nav-links".to_string(),
            menu_toggle: ".menu-toggle".to_string(),
            logo: ".logo".to_string(),
        }
    }
}

/// Overflow layout tunables. Widths are CSS pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// At or below this viewport width the mobile dropdown is used.
    pub narrow_breakpoint: f64,
    /// At or above this viewport width the link list gets a max width.
    pub wide_breakpoint: f64,
    /// Padding and gaps not captured by element measurement.
    pub fixed_buffer: f64,
    /// Space kept between the link list and the call-to-action.
    pub fixed_margin: f64,
    /// Gap between entries when the live layout doesn't report one.
    pub default_gap: f64,
    /// Delay before the first pass, to let fonts and images settle.
    pub settle_delay_ms: u32,
    /// Quiet window before a resize triggers a pass.
    pub debounce_ms: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: 900.0,
            wide_breakpoint: 1200.0,
            fixed_buffer: 40.0,
            fixed_margin: 24.0,
            default_gap: 18.0,
            settle_delay_ms: 120,
            debounce_ms: 150,
        }
    }
}

impl SiteConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

/// Get the site configuration, parsing the embedded file on first use.
///
/// A malformed file is logged and replaced by the defaults.
pub fn site_config() -> &'static SiteConfig {
    static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        SiteConfig::parse(SITE_TOML).unwrap_or_else(|e| {
            warn!("config: {}; using defaults", e);
            SiteConfig::default()
        })
    })
}
