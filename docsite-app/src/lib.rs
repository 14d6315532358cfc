//! # Docsite WASM Application
//!
//! Binds the view-state logic in `docsite-core` to the DOM of the
//! documentation site: navigation, scroll effects, reveal animations,
//! counters, copy buttons, toasts, search and theming.
//!
//! ## Usage
//!
//! Build for WASM:
//! ```bash
//! wasm-pack build --target web docsite-app
//! ```
//!
//! Then load it from the page. Behaviors mount on `DOMContentLoaded`:
//! ```javascript
//! import init, { showNotification, toggleTheme } from './pkg/docsite_app.js';
//!
//! await init();
//! showNotification('Saved', 'success');
//! ```
//!
//! Any subset of the configuration can be overridden inline:
//! ```html
//! <script type="application/json" id="docsite-config">
//!   { "nav": { "header_offset": 64 }, "log_filter": "debug" }
//! </script>
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dom;
pub mod features;
pub mod logging;
pub mod site;

use std::cell::RefCell;
use std::rc::Rc;

use docsite_core::config::CONFIG_ELEMENT_ID;
use docsite_core::{SiteConfig, ToastKind};
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub use dom::{AppError, AppResult};
pub use site::{Site, SiteHandle};

thread_local! {
    static SITE: RefCell<Option<SiteHandle>> = const { RefCell::new(None) };
}

/// Initialize the WASM module and mount once the DOM is ready.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    console_error_panic_hook::set_once();

    let started_at = dom::window()
        .ok()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now());

    let ready = dom::document().map(|d| d.ready_state() != "loading");
    match ready {
        Ok(true) => mount_logged(started_at),
        Ok(false) => {
            let mut pending = Some(started_at);
            let listened = dom::document().and_then(|document| {
                dom::listen(&document, "DOMContentLoaded", move |_| {
                    if let Some(started_at) = pending.take() {
                        mount_logged(started_at);
                    }
                })
            });
            if let Err(e) = listened {
                web_sys::console::error_1(&format!("Docsite not mounted: {e}").into());
            }
        }
        Err(e) => web_sys::console::error_1(&format!("Docsite not mounted: {e}").into()),
    }
}

fn mount_logged(started_at: f64) {
    if let Err(e) = mount(load_config(), started_at) {
        tracing::error!("Docsite mount failed: {e}");
    }
}

/// Read the inline configuration override, falling back to defaults.
///
/// Logging is not up yet, so problems go straight to the console.
pub fn load_config() -> SiteConfig {
    let Some(raw) = dom::document()
        .ok()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&raw).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Ignoring #{CONFIG_ELEMENT_ID}: {e}").into());
        SiteConfig::default()
    })
}

/// Mount every behavior on the current document.
///
/// Behaviors install independently; failures are logged and skipped.
///
/// # Errors
///
/// Returns an error if there is no window or document.
pub fn mount(config: SiteConfig, started_at: f64) -> AppResult<SiteHandle> {
    logging::init(&config.log_filter);
    let site = Site::new(config, started_at)?;
    let failed = features::install_all(&site);
    let elapsed = dom::window()
        .ok()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now() - started_at);
    if failed > 0 {
        tracing::warn!("Docsite mounted in {elapsed:.0}ms with {failed} behaviors disabled");
    } else {
        tracing::info!("Docsite v{} mounted in {elapsed:.0}ms", docsite_core::VERSION);
    }
    SITE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&site)));
    Ok(site)
}

fn with_site<T>(f: impl FnOnce(&SiteHandle) -> AppResult<T>) -> AppResult<T> {
    let site = SITE
        .with(|slot| slot.borrow().clone())
        .ok_or(AppError::NotMounted)?;
    f(&site)
}

/// Show a toast. Unknown kinds are shown as `info`.
///
/// # Errors
///
/// Returns an error if the page is not mounted.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let kind = kind.as_deref().map_or(ToastKind::Info, ToastKind::parse_lenient);
    with_site(|site| features::toast::show(site, message, kind).map(|_| ()))?;
    Ok(())
}

/// Count an element up from zero to the number in its text.
///
/// # Errors
///
/// Returns an error if the page is not mounted.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(element: &Element) -> Result<(), JsValue> {
    with_site(|site| features::counter::start(site, element))?;
    Ok(())
}

/// Flip between light and dark. Returns the new theme name.
///
/// # Errors
///
/// Returns an error if the page is not mounted.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    let theme = with_site(features::theme::toggle)?;
    Ok(theme.as_str().to_string())
}

/// The active theme name, or `undefined` before mount.
#[wasm_bindgen(js_name = currentTheme)]
#[must_use]
pub fn current_theme() -> Option<String> {
    SITE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(features::theme::current)
            .map(|theme| theme.as_str().to_string())
    })
}

/// The active configuration as JSON.
///
/// # Errors
///
/// Returns an error if the page is not mounted.
#[wasm_bindgen(js_name = siteConfig)]
pub fn site_config() -> Result<String, JsValue> {
    let json = with_site(|site| {
        serde_json::to_string(&site.config)
            .map_err(|e| AppError::Site(docsite_core::SiteError::Config(e)))
    })?;
    Ok(json)
}
