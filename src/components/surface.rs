//! Live-document [`NavSurface`].
//!
//! Thin adapter: measurements come from `getBoundingClientRect` and computed
//! style, and applying a partition moves the rendered entry `li`s between
//! the link list and the "More" list.

use web_sys::{Element, HtmlElement, Node};

use crate::config::{NAV_INDEX_ATTR, Selectors, classes};
use crate::core::{Measurements, NavSurface};
use crate::models::NavBar;
use crate::utils::dom;

/// Gap properties, most specific first.
const GAP_PROPERTIES: &[&str] = &["column-gap", "gap"];

#[derive(Clone)]
pub struct DomSurface {
    bar: Element,
    links: HtmlElement,
    more: Element,
    more_list: Element,
    logo: Option<Element>,
    cta: Option<Element>,
}

impl DomSurface {
    /// Locate the rendered bar around `links`.
    ///
    /// Returns `None` until the bar has been mounted. A missing logo is
    /// measured as zero width.
    pub fn locate(links: &HtmlElement, selectors: &Selectors) -> Option<Self> {
        let more = dom::query_within(links, &format!(".{}", classes::MORE))?;
        let more_list = dom::query_within(&more, &format!(".{}", classes::MORE_LIST))?;
        let bar = links
            .closest(&selectors.bar)
            .ok()
            .flatten()
            .or_else(|| links.parent_element())?;

        Some(Self {
            bar,
            links: links.clone(),
            more,
            more_list,
            logo: dom::query(&selectors.logo),
            cta: dom::query_within(links, &format!(".{}", classes::DONATE_LI)),
        })
    }

    /// The overflow slot's `li`.
    pub fn more(&self) -> &Element {
        &self.more
    }

    fn item(&self, index: usize) -> Option<Element> {
        dom::query_within(&self.links, &format!("li[{}=\"{}\"]", NAV_INDEX_ATTR, index))
    }
}

impl NavSurface for DomSurface {
    fn viewport_width(&self) -> f64 {
        dom::viewport_width().unwrap_or_default()
    }

    fn apply(&mut self, bar: &NavBar) {
        let anchor: &Node = &self.more;
        for &index in bar.visible_indices() {
            if let Some(item) = self.item(index) {
                let _ = self.links.insert_before(&item, Some(anchor));
            }
        }
        for &index in bar.overflow().contained() {
            if let Some(item) = self.item(index) {
                let _ = self.more_list.append_child(&item);
            }
        }
    }

    fn measure(&self, bar: &NavBar) -> Measurements {
        Measurements {
            bar_width: dom::element_width(Some(&self.bar)),
            logo_width: dom::element_width(self.logo.as_ref()),
            cta_width: dom::element_width(self.cta.as_ref()),
            entry_widths: bar
                .visible_indices()
                .iter()
                .map(|&index| dom::element_width(self.item(index).as_ref()))
                .collect(),
            gap: dom::computed_px(&self.links, GAP_PROPERTIES),
        }
    }

    fn set_max_width(&mut self, max_width: Option<f64>) {
        let style = self.links.style();
        // Rendering hint only; a failure leaves the previous value
        let _ = match max_width {
            Some(px) => style.set_property("max-width", &format!("{}px", px.max(0.0))),
            None => style.remove_property("max-width").map(|_| ()),
        };
    }
}
