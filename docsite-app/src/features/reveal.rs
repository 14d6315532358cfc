//! One-shot viewport animations: reveals, metric card entrances, lazy images.

use std::rc::Rc;

use docsite_core::{ObserveRole, SiteEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::{self, AppResult};
use crate::site::SiteHandle;

/// Observer options.
pub struct Watch<'a> {
    /// Elements to observe.
    pub selector: &'a str,
    /// Intersection ratio that counts as entering.
    pub threshold: f64,
    /// Optional root margin.
    pub root_margin: Option<&'a str>,
    /// Why the elements are observed.
    pub role: ObserveRole,
}

/// Observe matching elements and call `on_enter` the first time each one
/// intersects. The element is unobserved afterwards.
///
/// Returns how many elements are observed.
pub fn observe_once(
    site: &SiteHandle,
    watch: &Watch<'_>,
    on_enter: impl Fn(&SiteHandle, &Element) + 'static,
) -> AppResult<usize> {
    let document = dom::document()?;
    let elements = dom::query_all(&document, watch.selector);
    if elements.is_empty() {
        tracing::debug!("Nothing to observe for {:?}", watch.role);
        return Ok(0);
    }

    let role = watch.role;
    let handle = Rc::clone(site);
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let element = handle.ids.id_of(&target);
                if handle
                    .dispatch(&SiteEvent::Intersect { element, role })
                    .is_empty()
                {
                    continue;
                }
                observer.unobserve(&target);
                on_enter(&handle, &target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(watch.threshold));
    if let Some(margin) = watch.root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        site.view.borrow_mut().observe(site.ids.id_of(element), role);
        observer.observe(element);
    }
    tracing::debug!("Observing {} elements for {role:?}", elements.len());
    Ok(elements.len())
}

/// Fade/slide elements in on first intersection.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let config = &site.config;
    observe_once(
        site,
        &Watch {
            selector: &config.selectors.animatable,
            threshold: config.reveal.threshold,
            root_margin: Some(&config.reveal.root_margin),
            role: ObserveRole::Reveal,
        },
        |site, element| {
            let _ = element
                .class_list()
                .add_1(&site.config.selectors.visible_class);
        },
    )?;
    Ok(())
}

/// Metric cards rise into place once.
pub fn install_metric_cards(site: &SiteHandle) -> AppResult<()> {
    let config = &site.config;
    observe_once(
        site,
        &Watch {
            selector: &config.selectors.metric_card,
            threshold: config.reveal.metric_threshold,
            root_margin: None,
            role: ObserveRole::Metric,
        },
        |site, element| {
            let Some(card) = element.dyn_ref::<HtmlElement>() else {
                return;
            };
            dom::set_style(card, "opacity", "0");
            dom::set_style(card, "transform", "translateY(20px)");
            let card = card.clone();
            let delay = site.config.reveal.metric_delay_ms;
            if let Err(e) = dom::set_timeout(delay, move || {
                dom::set_style(&card, "transition", "opacity 0.6s ease, transform 0.6s ease");
                dom::set_style(&card, "opacity", "1");
                dom::set_style(&card, "transform", "translateY(0)");
            }) {
                tracing::warn!("Metric card entrance not scheduled: {e}");
            }
        },
    )?;
    Ok(())
}

/// Swap `data-src` into `src` when an image nears the viewport.
pub fn install_lazy_images(site: &SiteHandle) -> AppResult<()> {
    observe_once(
        site,
        &Watch {
            selector: &site.config.selectors.lazy_image,
            threshold: 0.0,
            root_margin: None,
            role: ObserveRole::LazyImage,
        },
        |_, image| {
            if let Some(src) = image.get_attribute("data-src") {
                let _ = image.set_attribute("src", &src);
                let _ = image.remove_attribute("data-src");
                let _ = image.class_list().remove_1("lazy");
            }
        },
    )?;
    Ok(())
}
