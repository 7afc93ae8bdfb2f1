//! Header/footer fragment loading.
//!
//! Each page carries empty placeholders that are replaced by the shared
//! markup. A failed load leaves the placeholder in place; there is no retry.

use std::fmt;

use leptos::logging::{error, warn};
use wasm_bindgen_futures::spawn_local;

use crate::config::SiteConfig;
use crate::core::error::FragmentError;
use crate::utils::{dom, fetch_text};

/// A shared page fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Header,
    Footer,
}

impl Fragment {
    pub fn url(self, config: &SiteConfig) -> &str {
        match self {
            Self::Header => &config.site.header_url,
            Self::Footer => &config.site.footer_url,
        }
    }

    pub fn placeholder(self, config: &SiteConfig) -> &str {
        match self {
            Self::Header => &config.selectors.header_placeholder,
            Self::Footer => &config.selectors.footer_placeholder,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// Fetch a fragment and splice it over its placeholder.
///
/// The placeholder is checked before fetching so pages without one don't
/// make a request.
pub async fn load_fragment(fragment: Fragment, config: &SiteConfig) -> Result<(), FragmentError> {
    let selector = fragment.placeholder(config);
    let missing = || FragmentError::MissingPlaceholder(selector.to_string());

    dom::query(selector).ok_or_else(missing)?;
    let markup = fetch_text(fragment.url(config), config.site.fetch_timeout_ms).await?;

    // Look up again: the page may have changed while the request was in flight
    let placeholder = dom::query(selector).ok_or_else(missing)?;
    placeholder.set_outer_html(&markup);
    Ok(())
}

/// Load a fragment in the background and run `on_ready` once it is in the
/// document. Failures are logged and `on_ready` is not called.
pub fn spawn_fragment(
    fragment: Fragment,
    config: &'static SiteConfig,
    on_ready: impl FnOnce() + 'static,
) {
    spawn_local(async move {
        match load_fragment(fragment, config).await {
            Ok(()) => on_ready(),
            Err(e @ FragmentError::MissingPlaceholder(_)) => {
                warn!("fragment: {} skipped: {}", fragment, e);
            }
            Err(e) => error!("fragment: failed to load {}: {}", fragment, e),
        }
    });
}
