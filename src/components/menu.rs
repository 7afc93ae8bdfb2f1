//! Menu state controller bindings.
//!
//! The overflow dropdown is opened by its trigger (see `navbar.rs`) and
//! closed by the trigger, a click outside it, or the dismiss key. The mobile
//! menu only responds to the hamburger trigger.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, Node};

use crate::app::NavContext;
use crate::components::icons as ic;
use crate::config::classes;
use crate::models::{DropdownEvent, aria_bool, is_dismiss_key};
use crate::utils::dom;

/// Whether an event target lies outside `container`.
///
/// Targets that aren't nodes (e.g. the window) count as outside.
pub fn is_outside(container: &Element, target: Option<EventTarget>) -> bool {
    match target.and_then(|t| t.dyn_into::<Node>().ok()) {
        Some(node) => !container.contains(Some(&node)),
        None => true,
    }
}

/// Close the dropdown on outside clicks and on the dismiss key.
///
/// # Note
/// The closures are intentionally leaked using `forget()`: the listeners
/// live as long as the page.
pub fn bind_dropdown_dismissal(ctx: NavContext, more: Element) {
    let Some(window) = dom::window() else {
        return;
    };

    let on_click = Closure::wrap(Box::new(move |event: MouseEvent| {
        let is_open = ctx.bar.with_untracked(|bar| bar.overflow().is_open());
        if is_open && is_outside(&more, event.target()) {
            ctx.dropdown(DropdownEvent::ClickOutside);
        }
    }) as Box<dyn Fn(MouseEvent)>);
    let _ = window.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let on_keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if is_dismiss_key(&event.key()) {
            ctx.dropdown(DropdownEvent::DismissKey);
        }
    }) as Box<dyn Fn(KeyboardEvent)>);
    let _ = window.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}

/// Wire the hamburger trigger.
///
/// The trigger's existing content is replaced by a themed icon that follows
/// the menu state. `aria-expanded` on the trigger and the `open` class on
/// the link list track the same state.
pub fn bind_mobile_toggle(ctx: NavContext, toggle: HtmlElement, links: HtmlElement) {
    let on_click = Closure::wrap(Box::new(move || ctx.toggle_mobile()) as Box<dyn Fn()>);
    let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    toggle.set_inner_html("");
    let trigger = toggle.clone();
    mount_to(toggle, move || {
        Effect::new(move |_| {
            let is_open = ctx.mobile.get().is_open();
            let _ = trigger.set_attribute("aria-expanded", aria_bool(is_open));
            dom::set_class(&links, classes::OPEN, is_open);
        });

        move || view! { <Icon icon=ic::menu_glyph(ctx.mobile.get().glyph()) /> }
    })
    .forget();
}
