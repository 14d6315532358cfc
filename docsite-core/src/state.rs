//! View state management.
//!
//! [`ViewState`] owns every piece of per-page mutable state the scroll,
//! navigation and visibility handlers share. Handlers feed it
//! [`SiteEvent`]s and apply the [`ViewUpdate`]s it returns.

use crate::config::SiteConfig;
use crate::event::{ObserveRole, SiteEvent};
use crate::nav::{anchor_scroll_top, MenuState, NavState};
use crate::reveal::AnimationLedger;
use crate::scroll::{progress_percent, NavbarStyle, ScrollEffects};
use crate::ElementId;

/// A change the binding layer must apply to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    /// Open or close the mobile drawer.
    Menu {
        /// New state.
        open: bool,
    },
    /// Highlight exactly this nav link (by href), clearing all others.
    /// `None` clears every link.
    ActiveLink(Option<String>),
    /// Restyle the navbar.
    Navbar(NavbarStyle),
    /// Set the progress bar, in percent.
    Progress(f64),
    /// Smooth-scroll the window.
    ScrollTo {
        /// Target scroll offset.
        top: f64,
    },
    /// Run a one-shot animation and stop observing the element.
    Animate {
        /// The element.
        element: ElementId,
        /// Which animation.
        role: ObserveRole,
    },
}

/// The complete per-page view state.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Active-link tracking.
    pub nav: NavState,
    /// Mobile drawer.
    pub menu: MenuState,
    scroll: ScrollEffects,
    ledger: AnimationLedger,
    header_offset: f64,
    spy_threshold: f64,
}

impl ViewState {
    /// Create view state for a page with the given navigation.
    #[must_use]
    pub fn new(config: &SiteConfig, nav: NavState) -> Self {
        Self {
            nav,
            menu: MenuState::default(),
            scroll: ScrollEffects::new(&config.scroll),
            ledger: AnimationLedger::new(),
            header_offset: config.nav.header_offset,
            spy_threshold: config.nav.spy_threshold,
        }
    }

    /// Start tracking a one-shot animation for an element.
    pub fn observe(&mut self, element: ElementId, role: ObserveRole) {
        self.ledger.track(element, role);
    }

    /// Animation bookkeeping.
    #[must_use]
    pub const fn ledger(&self) -> &AnimationLedger {
        &self.ledger
    }

    /// Last recorded scroll offset.
    #[must_use]
    pub const fn last_scroll_top(&self) -> f64 {
        self.scroll.last_scroll_top()
    }

    /// Process an event and return the updates to apply, in order.
    pub fn process_event(&mut self, event: &SiteEvent) -> Vec<ViewUpdate> {
        let mut updates = Vec::new();

        match event {
            SiteEvent::Scroll(metrics) => {
                updates.push(ViewUpdate::Navbar(self.scroll.navbar(metrics.scroll_top)));
                updates.push(ViewUpdate::Progress(progress_percent(
                    metrics.scroll_top,
                    metrics.scroll_height,
                    metrics.viewport_height,
                )));
                if self
                    .nav
                    .spy(metrics.scroll_top, &metrics.section_tops, self.spy_threshold)
                {
                    self.push_active(&mut updates);
                }
            }
            SiteEvent::MenuToggle => {
                let open = self.menu.toggle();
                tracing::debug!("Menu toggled: open={open}");
                updates.push(ViewUpdate::Menu { open });
            }
            SiteEvent::Click { inside_menu } => {
                if !inside_menu && self.menu.close() {
                    updates.push(ViewUpdate::Menu { open: false });
                }
            }
            SiteEvent::Key { key } => {
                if key == "Escape" && self.menu.close() {
                    updates.push(ViewUpdate::Menu { open: false });
                }
            }
            SiteEvent::AnchorClick { href, target_top } => {
                let Some(top) = target_top else {
                    tracing::debug!("Anchor target missing: {href}");
                    return updates;
                };
                updates.push(ViewUpdate::ScrollTo {
                    top: anchor_scroll_top(*top, self.header_offset),
                });
                if self.nav.activate_href(href) {
                    self.push_active(&mut updates);
                }
            }
            SiteEvent::PathChanged { path } => {
                if self.nav.activate_href(path) {
                    self.push_active(&mut updates);
                } else if self.nav.clear() {
                    tracing::debug!("No nav link for {path}");
                    updates.push(ViewUpdate::ActiveLink(None));
                }
            }
            SiteEvent::Intersect { element, role } => {
                if self.ledger.claim(*element, *role) {
                    updates.push(ViewUpdate::Animate {
                        element: *element,
                        role: *role,
                    });
                }
            }
        }

        updates
    }

    fn push_active(&self, updates: &mut Vec<ViewUpdate>) {
        if let Some(href) = self.nav.active_href() {
            updates.push(ViewUpdate::ActiveLink(Some(href.to_string())));
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&SiteConfig::default(), NavState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ScrollMetrics;

    fn state() -> ViewState {
        ViewState::new(
            &SiteConfig::default(),
            NavState::new(
                vec!["#home".to_string(), "#docs".to_string()],
                vec!["home".to_string(), "docs".to_string()],
            ),
        )
    }

    #[test]
    fn test_scroll_emits_navbar_progress_and_link() {
        let mut state = state();
        let metrics = ScrollMetrics::new(0.0, 2000.0, 1000.0).with_sections(vec![0.0, 1200.0]);
        let updates = state.process_event(&SiteEvent::Scroll(metrics));

        assert_eq!(
            updates,
            vec![
                ViewUpdate::Navbar(NavbarStyle::default()),
                ViewUpdate::Progress(0.0),
                ViewUpdate::ActiveLink(Some("#home".to_string())),
            ]
        );
    }

    #[test]
    fn test_scroll_without_link_change_omits_active_link() {
        let mut state = state();
        let sections = vec![0.0, 1200.0];
        state.process_event(&SiteEvent::Scroll(
            ScrollMetrics::new(0.0, 2000.0, 1000.0).with_sections(sections.clone()),
        ));
        let updates = state.process_event(&SiteEvent::Scroll(
            ScrollMetrics::new(50.0, 2000.0, 1000.0).with_sections(sections),
        ));
        assert_eq!(updates.len(), 2);
    }

    #[test]
    fn test_escape_closes_open_menu_only() {
        let mut state = state();
        assert!(state.process_event(&SiteEvent::key("Escape")).is_empty());

        state.process_event(&SiteEvent::MenuToggle);
        assert_eq!(
            state.process_event(&SiteEvent::key("Escape")),
            vec![ViewUpdate::Menu { open: false }]
        );
        assert!(!state.menu.is_open());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = state();
        state.process_event(&SiteEvent::MenuToggle);
        assert!(state.process_event(&SiteEvent::key("Enter")).is_empty());
        assert!(state.menu.is_open());
    }

    #[test]
    fn test_outside_click_closes_menu() {
        let mut state = state();
        state.process_event(&SiteEvent::MenuToggle);

        let inside = SiteEvent::Click { inside_menu: true };
        assert!(state.process_event(&inside).is_empty());
        assert!(state.menu.is_open());

        let outside = SiteEvent::Click { inside_menu: false };
        assert_eq!(
            state.process_event(&outside),
            vec![ViewUpdate::Menu { open: false }]
        );
    }

    #[test]
    fn test_anchor_click_scrolls_with_header_offset() {
        let mut state = state();
        let updates = state.process_event(&SiteEvent::AnchorClick {
            href: "#docs".to_string(),
            target_top: Some(1200.0),
        });
        assert_eq!(
            updates,
            vec![
                ViewUpdate::ScrollTo { top: 1120.0 },
                ViewUpdate::ActiveLink(Some("#docs".to_string())),
            ]
        );
    }

    #[test]
    fn test_anchor_click_missing_target_is_noop() {
        let mut state = state();
        let updates = state.process_event(&SiteEvent::AnchorClick {
            href: "#nowhere".to_string(),
            target_top: None,
        });
        assert!(updates.is_empty());
        assert_eq!(state.nav.active_href(), None);
    }

    #[test]
    fn test_intersect_animates_once() {
        let mut state = state();
        let el = ElementId::new();
        state.observe(el, ObserveRole::Counter);
        let event = SiteEvent::Intersect {
            element: el,
            role: ObserveRole::Counter,
        };

        assert_eq!(
            state.process_event(&event),
            vec![ViewUpdate::Animate {
                element: el,
                role: ObserveRole::Counter
            }]
        );
        assert!(state.process_event(&event).is_empty());
    }

    #[test]
    fn test_path_change_highlights_matching_link() {
        let mut state = ViewState::new(
            &SiteConfig::default(),
            NavState::new(vec!["/".to_string(), "/guide/".to_string()], Vec::new()),
        );
        let updates = state.process_event(&SiteEvent::PathChanged {
            path: "/guide/".to_string(),
        });
        assert_eq!(
            updates,
            vec![ViewUpdate::ActiveLink(Some("/guide/".to_string()))]
        );
    }

    #[test]
    fn test_unlinked_path_clears_highlight_once() {
        let mut state = ViewState::new(
            &SiteConfig::default(),
            NavState::new(vec!["/a/".to_string(), "/b/".to_string()], Vec::new()),
        );
        let path = |p: &str| SiteEvent::PathChanged {
            path: p.to_string(),
        };

        state.process_event(&path("/a/"));
        assert_eq!(
            state.process_event(&path("/zzz/")),
            vec![ViewUpdate::ActiveLink(None)]
        );
        assert_eq!(state.nav.active_href(), None);
        assert!(state.process_event(&path("/zzz/")).is_empty());

        assert_eq!(
            state.process_event(&path("/b/")),
            vec![ViewUpdate::ActiveLink(Some("/b/".to_string()))]
        );
    }
}
