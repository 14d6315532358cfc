//! Copy-to-clipboard buttons on code blocks.

use std::rc::Rc;

use docsite_core::copy::ICON_COPY;
use docsite_core::{ElementId, SiteError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Element, Event, Node};

use crate::dom::{self, describe, AppResult};
use crate::features::toast;
use crate::site::SiteHandle;

/// Wrap each code block and attach a copy button.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let blocks = dom::query_all(&document, &site.config.selectors.code_block);
    for block in &blocks {
        attach(site, block)?;
    }
    tracing::debug!("Copy buttons on {} code blocks", blocks.len());
    Ok(())
}

fn attach(site: &SiteHandle, block: &Element) -> AppResult<()> {
    let Some(parent) = block.parent_node() else {
        return Ok(());
    };
    let document = dom::document()?;

    let wrapper = document.create_element("div")?;
    wrapper.set_class_name("code-wrapper");
    wrapper.set_attribute("style", "position: relative;")?;

    let button = document.create_element("button")?;
    button.set_class_name("copy-btn");
    button.set_attribute("title", "Copy to clipboard")?;
    button.set_attribute("aria-label", "Copy to clipboard")?;
    let icon = document.create_element("i")?;
    icon.set_class_name(ICON_COPY);
    button.append_child(&icon)?;

    let before: &Node = block;
    parent.insert_before(&wrapper, Some(before))?;
    wrapper.append_child(block)?;
    wrapper.append_child(&button)?;

    let id = site.ids.id_of(&button);
    site.copy.borrow_mut().register(id);

    let handle = Rc::clone(site);
    let source = block.clone();
    dom::listen(&button, "click", move |_: Event| {
        let text = source.text_content().unwrap_or_default();
        let site = Rc::clone(&handle);
        let icon = icon.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match write_clipboard(&text).await {
                Ok(()) => copied(&site, id, &icon),
                Err(e) => failed(&site, id, &e),
            }
        });
    })?;
    Ok(())
}

async fn write_clipboard(text: &str) -> Result<(), SiteError> {
    let navigator = dom::window()
        .map_err(|e| SiteError::Clipboard(e.to_string()))?
        .navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or_else(|| SiteError::Clipboard("clipboard API unavailable".to_string()))?
        .unchecked_into::<Clipboard>();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|e| SiteError::Clipboard(describe(&e)))?;
    Ok(())
}

fn copied(site: &SiteHandle, id: ElementId, icon: &Element) {
    let handle = Rc::clone(site);
    let target = icon.clone();
    let timer = dom::set_timeout_keyed(site.config.copy.revert_ms, move |timer| {
        if let Some(restore) = handle.copy.borrow_mut().revert(id, timer) {
            target.set_class_name(restore);
        }
    });
    let timer = match timer {
        Ok(timer) => timer,
        Err(e) => {
            tracing::warn!("Copy revert not scheduled: {e}");
            return;
        }
    };

    let success = site.copy.borrow_mut().copied(id, timer);
    icon.set_class_name(success.icon);
    if let Some(stale) = success.cancel {
        dom::clear_timeout(stale);
    }
}

fn failed(site: &SiteHandle, id: ElementId, error: &SiteError) {
    tracing::warn!("{error}");
    let (message, kind) = site.copy.borrow().failed(id);
    if let Err(e) = toast::show(site, &message, kind) {
        tracing::warn!("Copy failure toast not shown: {e}");
    }
}
