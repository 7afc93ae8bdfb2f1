//! Navigation bar rendering.
//!
//! Renders the entries, the "More" overflow slot and the call-to-action into
//! the header's link container. Entry `li`s carry `data-nav-index` so the
//! DOM surface can move them between the bar and the dropdown list.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;
use web_sys::HtmlElement;

use crate::app::NavContext;
use crate::components::icons as ic;
use crate::config::{LayoutConfig, classes};
use crate::models::{DropdownEvent, aria_bool};
use crate::utils::dom;

/// Append the bar to `container`.
///
/// Runs once per page load: existing children are kept and nothing is
/// reordered.
pub fn mount_nav_bar(container: HtmlElement, ctx: NavContext, layout: LayoutConfig) {
    let links = container.clone();
    mount_to(container, move || view! { <NavItems ctx=ctx links=links layout=layout /> })
        .forget();
}

/// Entries in list order, then the overflow slot, then the call-to-action.
#[component]
pub fn NavItems(ctx: NavContext, links: HtmlElement, layout: LayoutConfig) -> impl IntoView {
    // Full-height dropdown presentation below the breakpoint
    let narrow = use_media_query(format!("(max-width: {}px)", layout.narrow_breakpoint));
    Effect::new(move |_| dom::set_class(&links, classes::LONG_MENU, narrow.get()));

    let entries = ctx.bar.with_untracked(|bar| {
        bar.entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let active = entry.is_active();
                view! {
                    <li data-nav-index=index.to_string()>
                        <a
                            href=entry.href().to_string()
                            class:active=active
                            aria-current=active.then_some("page")
                        >
                            {entry.label().to_string()}
                        </a>
                    </li>
                }
            })
            .collect_view()
    });
    let cta = ctx.bar.with_untracked(|bar| bar.cta().clone());

    view! {
        {entries}
        <MoreMenu ctx=ctx />
        <li class=classes::DONATE_LI>
            <a href=cta.href().to_string()>{cta.label().to_string()}</a>
        </li>
    }
}

/// The "More" dropdown. Its list starts empty; entries are moved in by the
/// redistribution pass.
#[component]
fn MoreMenu(ctx: NavContext) -> impl IntoView {
    let is_open = Memo::new(move |_| ctx.bar.with(|bar| bar.overflow().is_open()));
    let is_hidden = Memo::new(move |_| ctx.bar.with(|bar| bar.overflow().is_hidden()));
    let count_label = Memo::new(move |_| ctx.bar.with(|bar| bar.overflow().count_label()));

    let on_trigger = move |_: leptos::ev::MouseEvent| ctx.dropdown(DropdownEvent::Trigger);

    view! {
        <li class=classes::MORE class:open=move || is_open.get() hidden=move || is_hidden.get()>
            <button
                type="button"
                class=classes::MORE_TOGGLE
                aria-haspopup="true"
                aria-expanded=move || aria_bool(is_open.get())
                on:click=on_trigger
            >
                "More "
                <span class=classes::MORE_COUNT>{move || count_label.get()}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
            <ul class=classes::MORE_LIST aria-hidden=move || aria_bool(!is_open.get())></ul>
        </li>
    }
}
