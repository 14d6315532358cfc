//! Browser Tests
//!
//! Run with `wasm-pack test --headless --firefox docsite-app`.
//! - Element identity
//! - Menu and active-link updates reaching the DOM
//! - Toasts, search highlighting, page lifecycle and theme switching

#![cfg(target_arch = "wasm32")]

use docsite_app::features::{lifecycle, search, theme, toast};
use docsite_app::{dom, Site, SiteHandle};
use docsite_core::{NavbarStyle, SiteConfig, SiteEvent, Theme, ToastKind};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Append `html` inside a fresh container and return the container.
fn fixture(html: &str) -> Element {
    let document = dom::document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(html);
    dom::body().unwrap().append_child(&container).unwrap();
    container
}

fn site(config: SiteConfig) -> SiteHandle {
    Site::new(config, 0.0).unwrap()
}

fn by_id(id: &str) -> Element {
    dom::document().unwrap().get_element_by_id(id).unwrap()
}

// ============================================================================
// Identity
// ============================================================================

#[wasm_bindgen_test]
fn test_element_ids_are_stable_per_node() {
    let container = fixture(r#"<p id="ids-a"></p><p id="ids-b"></p>"#);
    let ids = dom::ElementIds::new();

    let a = by_id("ids-a");
    assert_eq!(ids.id_of(&a), ids.id_of(&by_id("ids-a")));
    assert_ne!(ids.id_of(&a), ids.id_of(&by_id("ids-b")));
    assert!(!a.has_attribute("data-element-id"));

    container.remove();
}

// ============================================================================
// View updates
// ============================================================================

#[wasm_bindgen_test]
fn test_menu_toggle_updates_classes_and_icon() {
    let container = fixture(
        r##"<button id="menu-btn"><i class="fas fa-bars"></i></button>
           <ul id="menu-list"><li><a class="t-link" href="#a">A</a></li></ul>"##,
    );
    let mut config = SiteConfig::default();
    config.selectors.menu_toggle = "#menu-btn".to_string();
    config.selectors.nav_menu = "#menu-list".to_string();
    let site = site(config);

    site.dispatch(&SiteEvent::MenuToggle);
    let menu = by_id("menu-list");
    let button = by_id("menu-btn");
    assert!(menu.class_list().contains("mobile-active"));
    assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
    let icon = button.query_selector("i").unwrap().unwrap();
    assert_eq!(icon.class_name(), "fas fa-times");

    site.dispatch(&SiteEvent::key("Escape"));
    assert!(!menu.class_list().contains("mobile-active"));
    assert_eq!(icon.class_name(), "fas fa-bars");

    container.remove();
}

#[wasm_bindgen_test]
fn test_anchor_click_marks_single_active_link() {
    let container = fixture(
        r##"<a class="spy-link" href="#one">One</a><a class="spy-link" href="#two">Two</a>"##,
    );
    let mut config = SiteConfig::default();
    config.selectors.nav_link = ".spy-link".to_string();
    let site = site(config);

    site.dispatch(&SiteEvent::AnchorClick {
        href: "#two".to_string(),
        target_top: Some(0.0),
    });

    let active = dom::query_all(&dom::document().unwrap(), ".spy-link.active");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].get_attribute("href").as_deref(), Some("#two"));

    container.remove();
}

#[wasm_bindgen_test]
fn test_unlinked_path_clears_active_link() {
    let container = fixture(
        r#"<a class="path-link" href="/a/">A</a><a class="path-link" href="/b/">B</a>"#,
    );
    let mut config = SiteConfig::default();
    config.selectors.nav_link = ".path-link".to_string();
    let site = site(config);
    let document = dom::document().unwrap();

    site.dispatch(&SiteEvent::PathChanged {
        path: "/a/".to_string(),
    });
    assert_eq!(dom::query_all(&document, ".path-link.active").len(), 1);

    site.dispatch(&SiteEvent::PathChanged {
        path: "/zzz/".to_string(),
    });
    assert!(dom::query_all(&document, ".path-link.active").is_empty());

    container.remove();
}

#[wasm_bindgen_test]
fn test_scroll_update_styles_navbar() {
    let container = fixture(r#"<nav id="t-navbar"></nav>"#);
    let mut config = SiteConfig::default();
    config.selectors.navbar = "#t-navbar".to_string();
    let site = site(config);

    site.dispatch(&SiteEvent::Scroll(docsite_core::ScrollMetrics::new(
        500.0, 3000.0, 800.0,
    )));

    let navbar: HtmlElement = by_id("t-navbar").unchecked_into();
    let elevated = NavbarStyle {
        elevated: true,
        hidden: true,
    };
    let style = navbar.style();
    assert_eq!(
        style.get_property_value("transform").unwrap(),
        elevated.transform()
    );
    assert!(dom::query(&dom::document().unwrap(), ".scroll-progress").is_some());

    container.remove();
}

// ============================================================================
// Toasts
// ============================================================================

#[wasm_bindgen_test]
fn test_toast_message_is_plain_text() {
    let site = site(SiteConfig::default());
    let id = toast::show(&site, "<b>bold</b> move", ToastKind::Warning).unwrap();

    let node = by_id(&id.to_string());
    assert!(node.class_list().contains("notification-warning"));
    let text = node.query_selector("span").unwrap().unwrap();
    assert_eq!(text.text_content().as_deref(), Some("<b>bold</b> move"));
    assert!(node.query_selector("b").unwrap().is_none());
    assert_eq!(site.toasts.borrow().live_count(), 1);

    node.remove();
}

// ============================================================================
// Search
// ============================================================================

#[wasm_bindgen_test]
fn test_search_highlights_and_restores() {
    let container = fixture(
        r#"<input id="t-search">
           <h3 class="t-item">Setup Wizard</h3>
           <h3 class="t-item">Quick Start</h3>"#,
    );
    let mut config = SiteConfig::default();
    config.search.input = "#t-search".to_string();
    config.search.targets = ".t-item".to_string();
    let site = site(config);
    search::install(&site).unwrap();

    let input: HtmlInputElement = by_id("t-search").unchecked_into();
    let items = dom::query_all_html(&dom::document().unwrap(), ".t-item");

    input.set_value("wiz");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    let mark = items[0].query_selector("mark").unwrap().unwrap();
    assert_eq!(mark.text_content().as_deref(), Some("Wiz"));
    assert_eq!(items[1].style().get_property_value("display").unwrap(), "none");

    input.set_value("");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert_eq!(items[0].inner_html(), "Setup Wizard");
    assert_eq!(items[1].style().get_property_value("display").unwrap(), "");

    container.remove();
}

#[wasm_bindgen_test]
fn test_search_keeps_nested_markup() {
    let container = fixture(
        r#"<input id="t-rich-search">
           <h3 class="t-rich"><i class="fas fa-book"></i> Guide</h3>
           <h3 class="t-rich"><a href="/api/">API</a> Reference</h3>"#,
    );
    let mut config = SiteConfig::default();
    config.search.input = "#t-rich-search".to_string();
    config.search.targets = ".t-rich".to_string();
    let site = site(config);
    search::install(&site).unwrap();

    let input: HtmlInputElement = by_id("t-rich-search").unchecked_into();
    let items = dom::query_all_html(&dom::document().unwrap(), ".t-rich");
    let before: Vec<String> = items.iter().map(HtmlElement::inner_html).collect();

    input.set_value("gu");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    assert!(items[0].query_selector("mark").unwrap().is_some());
    assert_eq!(items[1].inner_html(), before[1]);

    input.set_value("");
    input.dispatch_event(&Event::new("input").unwrap()).unwrap();
    let after: Vec<String> = items.iter().map(HtmlElement::inner_html).collect();
    assert_eq!(after, before);
    assert!(items[0].query_selector("i.fa-book").unwrap().is_some());

    container.remove();
}

// ============================================================================
// Lifecycle
// ============================================================================

#[wasm_bindgen_test]
fn test_lifecycle_never_adds_loading_class() {
    let body = dom::body().unwrap();
    body.class_list().remove_1("loading").unwrap();

    let site = site(SiteConfig::default());
    lifecycle::install(&site).unwrap();
    assert!(!body.class_list().contains("loading"));
}

// ============================================================================
// Theme
// ============================================================================

#[wasm_bindgen_test]
fn test_theme_toggle_sets_root_attribute() {
    let storage = dom::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item("t-theme").unwrap();

    let mut config = SiteConfig::default();
    config.theme.storage_key = "t-theme".to_string();
    config.theme.legacy_keys.clear();
    let site = site(config);
    theme::install(&site).unwrap();
    assert_eq!(theme::current(&site), Some(Theme::Light));

    assert_eq!(theme::toggle(&site).unwrap(), Theme::Dark);
    let root = dom::document().unwrap().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(storage.get_item("t-theme").unwrap().as_deref(), Some("dark"));

    storage.remove_item("t-theme").unwrap();
}
