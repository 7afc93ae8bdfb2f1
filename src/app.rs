//! Page assembly.
//!
//! Loads the shared header and footer, then builds the navigation bar into
//! the header once it exists. Header and footer load independently; neither
//! waits on the other.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::fragment::{Fragment, spawn_fragment};
use crate::components::menu::{bind_dropdown_dismissal, bind_mobile_toggle};
use crate::components::navbar::mount_nav_bar;
use crate::components::overflow::schedule_redistribution;
use crate::components::surface::DomSurface;
use crate::config::{SiteConfig, classes, site_config};
use crate::core::{build_nav_bar, page_id_from_path};
use crate::models::{DropdownEvent, MobileMenuState, NavBar};
use crate::utils::dom;

// ============================================================================
// NavContext
// ============================================================================

/// Reactive navigation state shared by the header controls.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Entries, their inline/overflow partition and the dropdown state.
    pub bar: RwSignal<NavBar>,
    /// Hamburger menu state.
    pub mobile: RwSignal<MobileMenuState>,
}

impl NavContext {
    pub fn new(bar: NavBar) -> Self {
        Self {
            bar: RwSignal::new(bar),
            mobile: RwSignal::new(MobileMenuState::default()),
        }
    }

    /// Feed an event to the overflow dropdown. Subscribers are only
    /// notified when the open state actually changes.
    pub fn dropdown(&self, event: DropdownEvent) {
        self.bar.maybe_update(|bar| bar.overflow_mut().handle(event));
    }

    pub fn toggle_mobile(&self) {
        self.mobile.update(|menu| menu.toggle());
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Start page assembly.
pub fn start() {
    let config = site_config();
    spawn_fragment(Fragment::Header, config, move || on_header_ready(config));
    spawn_fragment(Fragment::Footer, config, on_footer_ready);
}

/// Build the navigation into the freshly inserted header.
///
/// Missing elements make the corresponding step a no-op.
fn on_header_ready(config: &'static SiteConfig) {
    let Some(links) = dom::query_html(&config.selectors.nav_links) else {
        log!("nav: no `{}` in header", config.selectors.nav_links);
        return;
    };

    let page = page_id_from_path(&dom::location_path());
    let bar = build_nav_bar(
        &config.nav.links,
        &config.nav.cta,
        &page,
        config.nav.alias.as_ref(),
    );
    let ctx = NavContext::new(bar);

    mount_nav_bar(links.clone(), ctx, config.layout.clone());

    if let Some(toggle) = dom::query_html(&config.selectors.menu_toggle) {
        bind_mobile_toggle(ctx, toggle, links.clone());
    }

    let Some(surface) = DomSurface::locate(&links, &config.selectors) else {
        return;
    };
    bind_dropdown_dismissal(ctx, surface.more().clone());
    schedule_redistribution(ctx, surface, config.layout.clone());
}

/// Fill in the footer's dynamic bits.
fn on_footer_ready() {
    let Some(document) = dom::document() else {
        return;
    };
    let Ok(targets) = document.query_selector_all(&format!(".{}", classes::CURRENT_YEAR)) else {
        return;
    };

    let year = js_sys::Date::new_0().get_full_year().to_string();
    for i in 0..targets.length() {
        if let Some(node) = targets.item(i) {
            node.set_text_content(Some(&year));
        }
    }
}
