//! Redistribution triggers.
//!
//! A pass runs once after the initial render has had time to settle, then
//! once per burst of resize events.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::app::NavContext;
use crate::components::surface::DomSurface;
use crate::config::LayoutConfig;
use crate::core::{PassOutcome, redistribute};
use crate::utils::{Debouncer, dom};

/// Run one pass against the live document.
///
/// Subscribers are only notified when the partition or open state changed.
pub fn run_pass(ctx: NavContext, surface: &mut DomSurface, layout: &LayoutConfig) {
    let mut outcome = PassOutcome::Skipped;
    let mut changed = false;
    ctx.bar.maybe_update(|bar| {
        let before = bar.clone();
        outcome = redistribute(bar, surface, layout);
        changed = *bar != before;
        changed
    });

    if changed && let PassOutcome::Fitted { visible, overflowed } = outcome {
        log!("overflow: {} inline, {} in more", visible, overflowed);
    }
}

/// Schedule the settle pass and install the debounced resize listener.
pub fn schedule_redistribution(ctx: NavContext, surface: DomSurface, layout: LayoutConfig) {
    let layout = Rc::new(layout);

    {
        let mut surface = surface.clone();
        let layout = Rc::clone(&layout);
        spawn_local(async move {
            TimeoutFuture::new(layout.settle_delay_ms).await;
            run_pass(ctx, &mut surface, &layout);
        });
    }

    let Some(window) = dom::window() else {
        return;
    };
    let debouncer = Debouncer::new(layout.debounce_ms);

    let on_resize = Closure::wrap(Box::new(move || {
        let mut surface = surface.clone();
        let layout = Rc::clone(&layout);
        debouncer.call(move || run_pass(ctx, &mut surface, &layout));
    }) as Box<dyn Fn()>);
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}
