//! Page load lifecycle and global error reporting.

use std::rc::Rc;

use docsite_core::ToastKind;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, Event, PromiseRejectionEvent};

use crate::dom::{self, describe, AppResult};
use crate::features::toast;
use crate::site::SiteHandle;

/// Once the page has loaded, swap any `loading` class on the body for
/// `loaded`, log the load time and show the welcome toast if configured.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let window = dom::window()?;

    let handle = Rc::clone(site);
    let loaded = move || on_load(&handle);
    if dom::document()?.ready_state() == "complete" {
        loaded();
    } else {
        let mut loaded = Some(loaded);
        dom::listen(&window, "load", move |_| {
            if let Some(loaded) = loaded.take() {
                loaded();
            }
        })?;
    }
    Ok(())
}

fn on_load(site: &SiteHandle) {
    if let Ok(body) = dom::body() {
        let _ = body.class_list().remove_1("loading");
        let _ = body.class_list().add_1("loaded");
    }

    if let Some(elapsed) = dom::window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now() - site.started_at)
    {
        tracing::info!("Page ready in {elapsed:.0}ms");
    }

    let Some(message) = site.config.welcome_message.clone() else {
        return;
    };
    let handle = Rc::clone(site);
    if let Err(e) = dom::set_timeout(site.config.welcome_delay_ms, move || {
        if let Err(e) = toast::show(&handle, &message, ToastKind::Info) {
            tracing::warn!("Welcome toast failed: {e}");
        }
    }) {
        tracing::warn!("Welcome toast not scheduled: {e}");
    }
}

/// Log uncaught errors, failed resource loads and unhandled rejections.
pub fn install_error_reporting(_site: &SiteHandle) -> AppResult<()> {
    let window = dom::window()?;

    dom::listen(&window, "error", |event: Event| {
        if let Some(error) = event.dyn_ref::<ErrorEvent>() {
            tracing::error!(
                "Uncaught error: {} ({}:{}:{})",
                error.message(),
                error.filename(),
                error.lineno(),
                error.colno()
            );
        }
    })?;

    // Resource errors do not bubble, so they are only seen while capturing.
    dom::listen_capture(&window, "error", |event: Event| {
        if event.is_instance_of::<ErrorEvent>() {
            return;
        }
        let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let source = element
            .get_attribute("src")
            .or_else(|| element.get_attribute("href"))
            .unwrap_or_default();
        tracing::warn!(
            "Failed to load {} {source}",
            element.tag_name().to_lowercase()
        );
    })?;

    dom::listen(&window, "unhandledrejection", |event: Event| {
        if let Some(rejection) = event.dyn_ref::<PromiseRejectionEvent>() {
            tracing::error!("Unhandled promise rejection: {}", describe(&rejection.reason()));
        }
    })?;
    Ok(())
}
