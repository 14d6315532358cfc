//! Toast notifications and the contact form that raises them.

use std::rc::Rc;

use docsite_core::{ToastId, ToastKind};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

use crate::dom::{self, AppResult};
use crate::site::SiteHandle;

/// Shown after the contact form is submitted.
const CONTACT_THANKS: &str = "Thank you for your message! We'll get back to you soon.";

/// Show a toast. The message is inserted as text, never parsed as markup.
///
/// # Errors
///
/// Returns an error if the toast cannot be added to the page.
pub fn show(site: &SiteHandle, message: &str, kind: ToastKind) -> AppResult<ToastId> {
    let toast = site.toasts.borrow_mut().show(message, kind);
    let id = toast.id;

    let document = dom::document()?;
    let container = document.create_element("div")?;
    container.set_class_name(&kind.container_class());
    container.set_id(&id.to_string());
    container.set_attribute("role", "status")?;

    let content = document.create_element("div")?;
    content.set_class_name("notification-content");
    let icon = document.create_element("i")?;
    icon.set_class_name(kind.icon_class());
    let text = document.create_element("span")?;
    text.set_text_content(Some(&toast.message));
    content.append_child(&icon)?;
    content.append_child(&text)?;

    let close = document.create_element("button")?;
    close.set_class_name("notification-close");
    close.set_attribute("aria-label", "Close notification")?;
    let close_icon = document.create_element("i")?;
    close_icon.set_class_name("fas fa-times");
    close.append_child(&close_icon)?;

    container.append_child(&content)?;
    container.append_child(&close)?;
    dom::body()?.append_child(&container)?;

    let timing = &site.config.toast;

    let handle = Rc::clone(site);
    let node = container.clone();
    dom::set_timeout(timing.enter_delay_ms, move || {
        if handle.toasts.borrow_mut().entered(id) {
            let _ = node.class_list().add_1("show");
        }
    })?;

    let handle = Rc::clone(site);
    let node = container.clone();
    dom::set_timeout(timing.auto_dismiss_ms, move || dismiss(&handle, id, &node))?;

    let handle = Rc::clone(site);
    let node = container.clone();
    dom::listen(&close, "click", move |_| dismiss(&handle, id, &node))?;

    Ok(id)
}

/// Slide a toast out and remove it. Repeated calls are ignored.
fn dismiss(site: &SiteHandle, id: ToastId, node: &Element) {
    if !site.toasts.borrow_mut().dismiss(id) {
        return;
    }
    let _ = node.class_list().remove_1("show");

    let handle = Rc::clone(site);
    let node = node.clone();
    if let Err(e) = dom::set_timeout(site.config.toast.exit_ms, move || {
        if handle.toasts.borrow_mut().removed(id) {
            node.remove();
        }
    }) {
        tracing::warn!("Toast {id} not removed: {e}");
    }
}

/// Acknowledge contact form submissions with a toast.
pub fn install_contact_form(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let Some(form) = dom::query(&document, &site.config.selectors.contact_form)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        tracing::debug!("No contact form");
        return Ok(());
    };

    let handle = Rc::clone(site);
    let target = form.clone();
    dom::listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        if let Err(e) = show(&handle, CONTACT_THANKS, ToastKind::Success) {
            tracing::warn!("Contact toast failed: {e}");
        }
        target.reset();
    })?;
    Ok(())
}
