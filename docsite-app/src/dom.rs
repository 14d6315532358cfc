//! Thin helpers over `web-sys`: lookups, listeners, timers, element ids.

use std::cell::Cell;
use std::rc::Rc;

use docsite_core::{ElementId, SiteError};
use js_sys::{Object, WeakMap};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

/// Errors raised by the binding layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No global `window` (not running in a browser).
    #[error("No window object")]
    NoWindow,
    /// The window has no document.
    #[error("No document object")]
    NoDocument,
    /// The document has no body yet.
    #[error("No body element")]
    NoBody,
    /// The page has not been mounted.
    #[error("Site not mounted")]
    NotMounted,
    /// A JS call threw.
    #[error("JS error: {0}")]
    Js(String),
    /// Core logic rejected an operation.
    #[error(transparent)]
    Site(#[from] SiteError),
}

/// Result type for binding operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Human-readable form of a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

/// The global window.
pub fn window() -> AppResult<Window> {
    web_sys::window().ok_or(AppError::NoWindow)
}

/// The window's document.
pub fn document() -> AppResult<Document> {
    window()?.document().ok_or(AppError::NoDocument)
}

/// The document body.
pub fn body() -> AppResult<HtmlElement> {
    document()?.body().ok_or(AppError::NoBody)
}

/// First element matching `selector`, if any. Invalid selectors match nothing.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`. Invalid selectors match nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            tracing::warn!("Invalid selector '{selector}': {}", describe(&e));
            Vec::new()
        }
    }
}

/// All elements matching `selector` that are `HtmlElement`s.
pub fn query_all_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Register a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> AppResult<()> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Register a capture-phase listener for the lifetime of the page.
pub fn listen_capture(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> AppResult<()> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_bool(
        event,
        callback.as_ref().unchecked_ref(),
        true,
    )?;
    callback.forget();
    Ok(())
}

/// Run `f` once after `ms` milliseconds. Returns the timer handle.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> AppResult<i32> {
    let callback = Closure::once_into_js(f);
    let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        i32::try_from(ms).unwrap_or(i32::MAX),
    )?;
    Ok(handle)
}

/// Like [`set_timeout`], but `f` receives its own handle so it can tell
/// whether it is still the current timer for its key.
pub fn set_timeout_keyed(ms: u32, f: impl FnOnce(i32) + 'static) -> AppResult<i32> {
    let slot = Rc::new(Cell::new(0));
    let inner = Rc::clone(&slot);
    let handle = set_timeout(ms, move || f(inner.get()))?;
    slot.set(handle);
    Ok(handle)
}

/// Cancel a pending timer.
pub fn clear_timeout(handle: i32) {
    if let Ok(window) = window() {
        window.clear_timeout_with_handle(handle);
    }
}

/// Set an inline style property, ignoring rejected values.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        tracing::debug!("Style {property}={value} rejected: {}", describe(&e));
    }
}

/// Remove an inline style property.
pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

/// Identity map from DOM nodes to [`ElementId`]s.
///
/// Backed by a JS `WeakMap`, so nodes are neither annotated nor kept alive.
pub struct ElementIds {
    map: WeakMap,
}

impl ElementIds {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            map: WeakMap::new(),
        }
    }

    /// The id of `element`, assigning one on first sight.
    pub fn id_of(&self, element: &Element) -> ElementId {
        let key: &Object = element;
        if let Some(id) = self
            .map
            .get(key)
            .as_string()
            .and_then(|raw| ElementId::parse(&raw))
        {
            return id;
        }
        let id = ElementId::new();
        self.map.set(key, &JsValue::from_str(&id.to_string()));
        id
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self::new()
    }
}
