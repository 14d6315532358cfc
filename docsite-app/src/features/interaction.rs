//! Pointer micro-interactions: button ripples, card tilt, floating cards.

use docsite_core::interaction::float_delay;
use docsite_core::{Rect, Ripple, Tilt};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, MouseEvent};

use crate::dom::{self, AppResult};
use crate::site::SiteHandle;

fn bounds(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn pointer(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

/// Expanding ripple on button clicks.
pub fn install_ripple(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let lifetime = site.config.interaction.ripple_ms;
    for button in dom::query_all_html(&document, &site.config.selectors.button) {
        let host = button.clone();
        dom::listen(&button, "click", move |event: Event| {
            let Some((x, y)) = pointer(&event) else {
                return;
            };
            if let Err(e) = ripple(&host, x, y, lifetime) {
                tracing::debug!("Ripple skipped: {e}");
            }
        })?;
    }
    Ok(())
}

fn ripple(host: &HtmlElement, x: f64, y: f64, lifetime: u32) -> AppResult<()> {
    let ripple = Ripple::at(&bounds(host), x, y);
    let span: HtmlElement = dom::document()?.create_element("span")?.unchecked_into();
    span.set_class_name("ripple");
    span.style().set_css_text(&ripple.css());
    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");
    host.append_child(&span)?;
    dom::set_timeout(lifetime, move || span.remove())?;
    Ok(())
}

/// Cards lean toward the pointer and settle when it leaves.
pub fn install_tilt(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let interaction = &site.config.interaction;
    for card in dom::query_all_html(&document, &site.config.selectors.tilt_card) {
        let (divisor, scale) = (interaction.tilt_divisor, interaction.tilt_scale);
        let target = card.clone();
        dom::listen(&card, "mousemove", move |event: Event| {
            let Some((x, y)) = pointer(&event) else {
                return;
            };
            let tilt = Tilt::toward(&bounds(&target), x, y, divisor, scale);
            dom::set_style(&target, "transform", &tilt.css());
        })?;

        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&target, "transform", &Tilt::neutral().css());
        })?;
    }
    Ok(())
}

/// Staggered floating animation that pauses under the pointer.
pub fn install_floating(site: &SiteHandle) -> AppResult<()> {
    let document = dom::document()?;
    let stagger = site.config.interaction.float_stagger_s;
    for (index, card) in dom::query_all_html(&document, &site.config.selectors.floating_card)
        .into_iter()
        .enumerate()
    {
        dom::set_style(&card, "animation-delay", &float_delay(index, stagger));

        let target = card.clone();
        dom::listen(&card, "mouseenter", move |_| {
            dom::set_style(&target, "animation-play-state", "paused");
        })?;
        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_| {
            dom::set_style(&target, "animation-play-state", "running");
        })?;
    }
    Ok(())
}
