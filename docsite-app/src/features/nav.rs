//! Mobile menu, in-page anchors, path highlighting and dropdowns.

use std::rc::Rc;

use docsite_core::SiteEvent;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, Node};

use crate::dom::{self, AppError, AppResult};
use crate::site::SiteHandle;

/// Menu toggle, outside-click and Escape handling, plus path highlighting.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    if let Some(toggle) = &site.chrome.menu_toggle {
        let handle = Rc::clone(site);
        dom::listen(toggle, "click", move |_| {
            handle.dispatch(&SiteEvent::MenuToggle);
        })?;

        let handle = Rc::clone(site);
        dom::listen(&document, "click", move |event: Event| {
            let inside_menu = click_inside_menu(&handle, &event);
            handle.dispatch(&SiteEvent::Click { inside_menu });
        })?;
    }

    let handle = Rc::clone(site);
    dom::listen(&document, "keydown", move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        handle.dispatch(&SiteEvent::Key { key: key.key() });
    })?;

    highlight_path(site);
    let handle = Rc::clone(site);
    dom::listen(&window, "popstate", move |_| highlight_path(&handle))?;

    Ok(())
}

fn click_inside_menu(site: &SiteHandle, event: &Event) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return false;
    };
    [&site.chrome.menu_toggle, &site.chrome.nav_menu]
        .into_iter()
        .flatten()
        .any(|el| el.contains(Some(&target)))
}

fn highlight_path(site: &SiteHandle) {
    let path = match dom::window().and_then(|w| w.location().pathname().map_err(AppError::from)) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("No pathname: {e}");
            return;
        }
    };
    site.dispatch(&SiteEvent::PathChanged { path });
}

/// Smooth scrolling for in-page anchors.
pub fn install_anchors(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let anchors = dom::query_all(&document, &site.config.selectors.anchor);
    for anchor in &anchors {
        let handle = Rc::clone(site);
        let link = anchor.clone();
        dom::listen(anchor, "click", move |event: Event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            event.prevent_default();
            let target_top = target_offset(&href);
            handle.dispatch(&SiteEvent::AnchorClick { href, target_top });
        })?;
    }
    tracing::debug!("Smooth scrolling on {} anchors", anchors.len());
    Ok(())
}

fn target_offset(href: &str) -> Option<f64> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let target = dom::document().ok()?.get_element_by_id(id)?;
    let target: HtmlElement = target.dyn_into().ok()?;
    Some(f64::from(target.offset_top()))
}

/// Dropdown toggles open their parent item.
pub fn install_dropdowns(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    for toggle in dom::query_all(&document, &site.config.selectors.dropdown_toggle) {
        let item = toggle.clone();
        dom::listen(&toggle, "click", move |event: Event| {
            event.prevent_default();
            if let Some(parent) = item.parent_element() {
                let _ = parent.class_list().toggle("open");
            }
        })?;
    }
    Ok(())
}
