//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return
//! `Option` so callers can short-circuit when the page lacks an element.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find the first element matching a CSS selector.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Find the first HTML element matching a CSS selector.
pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

/// Find the first descendant of `parent` matching a CSS selector.
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Rendered width of an element, `0.0` when absent.
pub fn element_width(element: Option<&Element>) -> f64 {
    element.map_or(0.0, |e| e.get_bounding_client_rect().width())
}

/// Read the first of `properties` that resolves to a pixel length.
///
/// Computed style can be unavailable (detached nodes, some embedded
/// browsers); that yields `None` rather than an error.
pub fn computed_px(element: &Element, properties: &[&str]) -> Option<f64> {
    let style = window()?.get_computed_style(element).ok().flatten()?;
    properties
        .iter()
        .filter_map(|p| style.get_property_value(p).ok())
        .find_map(|value| parse_px(&value))
}

/// Parse a CSS pixel length such as `"18px"`.
///
/// Keywords (`normal`), other units and negative values yield `None`.
pub fn parse_px(value: &str) -> Option<f64> {
    let number = value.trim().strip_suffix("px")?.trim_end();
    number
        .parse::<f64>()
        .ok()
        .filter(|px| px.is_finite() && *px >= 0.0)
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Current location path (e.g. `/about.html`).
pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}
