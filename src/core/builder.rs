//! Navigation builder.
//!
//! Turns the static link list into a [`NavBar`] with the active entry
//! resolved for the current page.

use crate::config::DEFAULT_PAGE;
use crate::models::{NavBar, NavEntry, NavLink, PageAlias};

/// Derive the page identifier from a location path.
///
/// The identifier is the last path segment (`/about.html` -> `about.html`).
/// Directory paths (`/`, `/events/`) resolve to [`DEFAULT_PAGE`].
pub fn page_id_from_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() || path.ends_with('/') {
        return DEFAULT_PAGE.to_string();
    }
    path.rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_PAGE)
        .to_string()
}

/// Whether `href` is the entry to highlight on `page`.
pub fn is_active_href(href: &str, page: &str, alias: Option<&PageAlias>) -> bool {
    href == page || alias.is_some_and(|a| a.page == page && a.target == href)
}

/// Build the bar for `page`.
///
/// At most one entry is marked active: if the list repeats an href, the
/// first occurrence wins. The call-to-action is never marked active.
pub fn build_nav_bar(
    links: &[NavLink],
    cta: &NavLink,
    page: &str,
    alias: Option<&PageAlias>,
) -> NavBar {
    let mut found = false;
    let entries = links
        .iter()
        .map(|link| {
            let is_active = !found && is_active_href(&link.href, page, alias);
            found |= is_active;
            NavEntry::new(link, is_active)
        })
        .collect();

    NavBar::new(entries, NavEntry::new(cta, false))
}
