//! The mounted page: configuration, shared state and cached DOM handles.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use docsite_core::scroll::percent_css;
use docsite_core::{
    CopyButtons, ElementId, MenuState, NavState, NavbarStyle, SiteConfig, SiteEvent,
    ThemeController, TimerSlots, ToastCenter, ViewState, ViewUpdate,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, AppResult, ElementIds};
use crate::features::theme::LocalStore;

/// Shared handle to the mounted page.
pub type SiteHandle = Rc<Site>;

/// Inline style of the reading progress bar.
const PROGRESS_STYLE: &str = "position: fixed; top: 0; left: 0; height: 3px; width: 0%; \
     background: linear-gradient(90deg, #2563eb, #7c3aed); z-index: 10001; \
     transition: width 0.1s ease;";

/// Elements looked up once at mount.
pub struct Chrome {
    /// Fixed header.
    pub navbar: Option<HtmlElement>,
    /// Mobile drawer toggle.
    pub menu_toggle: Option<Element>,
    /// Navigation menu.
    pub nav_menu: Option<Element>,
    /// Navigation links, in document order.
    pub links: Vec<Element>,
    /// Sections tracked by scroll-spy, in document order.
    pub sections: Vec<HtmlElement>,
    progress: RefCell<Option<HtmlElement>>,
}

impl Chrome {
    fn query(document: &Document, config: &SiteConfig) -> Self {
        let selectors = &config.selectors;
        Self {
            navbar: dom::query(document, &selectors.navbar)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            menu_toggle: dom::query(document, &selectors.menu_toggle),
            nav_menu: dom::query(document, &selectors.nav_menu),
            links: dom::query_all(document, &selectors.nav_link),
            sections: dom::query_all_html(document, &selectors.section),
            progress: RefCell::new(None),
        }
    }
}

/// Everything the behaviors share once the page is mounted.
pub struct Site {
    /// Active configuration.
    pub config: SiteConfig,
    /// Cached page elements.
    pub chrome: Chrome,
    /// Node identity.
    pub ids: ElementIds,
    /// Navigation, scroll and reveal state.
    pub view: RefCell<ViewState>,
    /// Live toasts.
    pub toasts: RefCell<ToastCenter>,
    /// Copy button feedback.
    pub copy: RefCell<CopyButtons>,
    /// Pending counter ticks, one per element.
    pub counters: RefCell<TimerSlots<ElementId>>,
    /// Text each counter started from.
    pub counter_sources: RefCell<HashMap<ElementId, String>>,
    /// Theme, once the theme feature is installed.
    pub theme: RefCell<Option<ThemeController<LocalStore>>>,
    /// `performance.now()` when the module started.
    pub started_at: f64,
}

impl Site {
    /// Look up the page chrome and build initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or document.
    pub fn new(config: SiteConfig, started_at: f64) -> AppResult<SiteHandle> {
        let document = dom::document()?;
        let chrome = Chrome::query(&document, &config);

        let hrefs = chrome
            .links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect();
        let sections = chrome.sections.iter().map(|s| s.id()).collect();
        let view = ViewState::new(&config, NavState::new(hrefs, sections));

        tracing::debug!(
            "Page chrome: navbar={} toggle={} menu={} links={} sections={}",
            chrome.navbar.is_some(),
            chrome.menu_toggle.is_some(),
            chrome.nav_menu.is_some(),
            chrome.links.len(),
            chrome.sections.len()
        );

        Ok(Rc::new(Self {
            copy: RefCell::new(CopyButtons::new(&config.copy)),
            config,
            chrome,
            ids: ElementIds::new(),
            view: RefCell::new(view),
            toasts: RefCell::new(ToastCenter::new()),
            counters: RefCell::new(TimerSlots::new()),
            counter_sources: RefCell::new(HashMap::new()),
            theme: RefCell::new(None),
            started_at,
        }))
    }

    /// Feed an event through the view state and apply page-level updates.
    ///
    /// `Animate` updates are returned to the caller, which holds the element.
    pub fn dispatch(&self, event: &SiteEvent) -> Vec<ViewUpdate> {
        let updates = self.view.borrow_mut().process_event(event);
        let mut animations = Vec::new();
        for update in updates {
            match update {
                ViewUpdate::Menu { open } => self.apply_menu(open),
                ViewUpdate::ActiveLink(href) => self.apply_active_link(href.as_deref()),
                ViewUpdate::Navbar(style) => self.apply_navbar(style),
                ViewUpdate::Progress(percent) => self.apply_progress(percent),
                ViewUpdate::ScrollTo { top } => scroll_window_to(top),
                animate @ ViewUpdate::Animate { .. } => animations.push(animate),
            }
        }
        animations
    }

    fn apply_menu(&self, open: bool) {
        let (Some(toggle), Some(menu)) = (&self.chrome.menu_toggle, &self.chrome.nav_menu) else {
            return;
        };
        let selectors = &self.config.selectors;
        let _ = menu
            .class_list()
            .toggle_with_force(&selectors.menu_open_class, open);
        let _ = toggle
            .class_list()
            .toggle_with_force(&selectors.active_class, open);
        let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        if let Ok(Some(icon)) = toggle.query_selector("i") {
            icon.set_class_name(MenuState::new(open).icon_class());
        }
    }

    fn apply_active_link(&self, href: Option<&str>) {
        let class = &self.config.selectors.active_class;
        for link in &self.chrome.links {
            let matches = href.is_some() && link.get_attribute("href").as_deref() == href;
            let _ = link.class_list().toggle_with_force(class, matches);
        }
    }

    fn apply_navbar(&self, style: NavbarStyle) {
        let Some(navbar) = &self.chrome.navbar else {
            return;
        };
        dom::set_style(navbar, "background", style.background());
        dom::set_style(navbar, "box-shadow", style.box_shadow());
        dom::set_style(navbar, "transform", style.transform());
    }

    fn apply_progress(&self, percent: f64) {
        let bar = match self.progress_bar() {
            Ok(bar) => bar,
            Err(e) => {
                tracing::warn!("Progress bar unavailable: {e}");
                return;
            }
        };
        dom::set_style(&bar, "width", &percent_css(percent));
    }

    fn progress_bar(&self) -> AppResult<HtmlElement> {
        if let Some(bar) = self.chrome.progress.borrow().as_ref() {
            return Ok(bar.clone());
        }
        let bar: HtmlElement = dom::document()?.create_element("div")?.unchecked_into();
        bar.set_class_name("scroll-progress");
        bar.style().set_css_text(PROGRESS_STYLE);
        dom::body()?.append_child(&bar)?;
        *self.chrome.progress.borrow_mut() = Some(bar.clone());
        Ok(bar)
    }
}

fn scroll_window_to(top: f64) {
    let Ok(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
