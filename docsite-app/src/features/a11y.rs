//! Accessibility helpers: button labels, skip link, focus outlines.

use docsite_core::a11y::{
    aria_label, FOCUS_OUTLINE, FOCUS_OUTLINE_OFFSET, SKIP_LINK_CLASS, SKIP_LINK_TARGET,
    SKIP_LINK_TEXT,
};

use crate::dom::{self, AppResult};
use crate::site::SiteHandle;

/// Label unlabeled buttons, add a skip link and show focus outlines.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;

    for button in dom::query_all(&document, &site.config.selectors.button) {
        if button.has_attribute("aria-label") {
            continue;
        }
        let text = button.text_content().unwrap_or_default();
        if let Some(label) = aria_label(&text) {
            button.set_attribute("aria-label", &label)?;
        }
    }

    if dom::query(&document, &format!(".{SKIP_LINK_CLASS}")).is_none() {
        let link = document.create_element("a")?;
        link.set_class_name(SKIP_LINK_CLASS);
        link.set_attribute("href", SKIP_LINK_TARGET)?;
        link.set_text_content(Some(SKIP_LINK_TEXT));
        let body = dom::body()?;
        body.insert_before(&link, body.first_child().as_ref())?;
    }

    for element in dom::query_all_html(&document, &site.config.selectors.focusable) {
        let target = element.clone();
        dom::listen(&element, "focus", move |_| {
            dom::set_style(&target, "outline", FOCUS_OUTLINE);
            dom::set_style(&target, "outline-offset", FOCUS_OUTLINE_OFFSET);
        })?;
        let target = element.clone();
        dom::listen(&element, "blur", move |_| {
            dom::clear_style(&target, "outline");
            dom::clear_style(&target, "outline-offset");
        })?;
    }
    Ok(())
}
