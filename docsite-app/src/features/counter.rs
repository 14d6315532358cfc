//! Count-up animation for statistics.

use std::rc::Rc;

use docsite_core::{CounterAnimation, ElementId, ObserveRole};
use web_sys::Element;

use crate::dom::{self, AppResult};
use crate::features::reveal::{observe_once, Watch};
use crate::site::SiteHandle;

/// Start each counter the first time it becomes visible.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    observe_once(
        site,
        &Watch {
            selector: &site.config.selectors.counter,
            threshold: site.config.counter.threshold,
            root_margin: None,
            role: ObserveRole::Counter,
        },
        |site, element| {
            if let Err(e) = start(site, element) {
                tracing::warn!("Counter not started: {e}");
            }
        },
    )?;
    Ok(())
}

/// Animate `element` from zero to the number in its text.
///
/// Restarting an element that is already counting cancels the earlier run
/// and counts again from the text it originally held.
pub fn start(site: &SiteHandle, element: &Element) -> AppResult<()> {
    let id = site.ids.id_of(element);
    let text = site
        .counter_sources
        .borrow_mut()
        .entry(id)
        .or_insert_with(|| element.text_content().unwrap_or_default())
        .clone();
    let animation = CounterAnimation::for_text(&text, &site.config.counter);
    tracing::debug!(
        "Counter {id}: target={} steps={}",
        animation.format().target(),
        animation.steps()
    );

    if let Some(stale) = site.counters.borrow_mut().cancel(&id) {
        dom::clear_timeout(stale);
    }
    if animation.steps() <= 1 {
        element.set_text_content(Some(&animation.final_text()));
        return Ok(());
    }
    schedule(site, element.clone(), id, animation)
}

fn schedule(
    site: &SiteHandle,
    element: Element,
    id: ElementId,
    mut animation: CounterAnimation,
) -> AppResult<()> {
    let handle = Rc::clone(site);
    let timer = dom::set_timeout_keyed(site.config.counter.tick_ms, move |timer| {
        if !handle.counters.borrow_mut().fire(&id, timer) {
            return;
        }
        if let Some(frame) = animation.next() {
            element.set_text_content(Some(&frame));
        }
        if animation.is_finished() {
            return;
        }
        if let Err(e) = schedule(&handle, element, id, animation) {
            tracing::warn!("Counter {id} stopped: {e}");
        }
    })?;
    if let Some(stale) = site.counters.borrow_mut().restart(id, timer) {
        dom::clear_timeout(stale);
    }
    Ok(())
}
