//! Scroll listener: navbar, progress bar, scroll-spy and parallax.

use std::rc::Rc;

use docsite_core::scroll::{parallax_offset, parallax_transform};
use docsite_core::{ScrollMetrics, SiteEvent};
use web_sys::HtmlElement;

use crate::dom::{self, AppResult};
use crate::site::SiteHandle;

/// Run the scroll effects on every scroll event and once at install.
pub fn install(site: &SiteHandle) -> AppResult<()> {
    let window = dom::window()?;
    let document = dom::document()?;
    let cards = dom::query_all_html(&document, &site.config.selectors.parallax_card);

    on_scroll(site, &cards);

    let handle = Rc::clone(site);
    dom::listen(&window, "scroll", move |_| on_scroll(&handle, &cards))?;
    Ok(())
}

fn on_scroll(site: &SiteHandle, cards: &[HtmlElement]) {
    let metrics = match measure(site) {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::warn!("Scroll measurement failed: {e}");
            return;
        }
    };

    let scroll_top = metrics.scroll_top;
    site.dispatch(&SiteEvent::Scroll(metrics));

    for card in cards {
        let rate = card
            .get_attribute("data-parallax-rate")
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(site.config.scroll.parallax_rate);
        dom::set_style(
            card,
            "transform",
            &parallax_transform(parallax_offset(scroll_top, rate)),
        );
    }
}

fn measure(site: &SiteHandle) -> AppResult<ScrollMetrics> {
    let window = dom::window()?;
    let document = dom::document()?;
    let scroll_top = window.scroll_y()?;
    let scroll_height = document
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let section_tops = site
        .chrome
        .sections
        .iter()
        .map(|section| f64::from(section.offset_top()))
        .collect();

    Ok(ScrollMetrics::new(scroll_top, scroll_height, viewport_height).with_sections(section_tops))
}
