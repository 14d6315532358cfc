//! Page Behavior Integration Tests
//!
//! Drives the core through whole user flows:
//! - Mobile menu toggling, outside clicks and Escape
//! - Scrolling: navbar, progress bar, active link
//! - One-shot reveal and counter animations
//! - Copy button feedback and toasts
//! - Search and theme persistence

use docsite_core::{
    CopyButtons, CounterAnimation, ElementId, MemoryStore, NavState, ObserveRole, ScrollMetrics,
    SearchIndex, SearchOutcome, SiteConfig, SiteEvent, ThemeController, Theme, ToastCenter,
    ToastKind, ViewState, ViewUpdate,
};

fn page() -> ViewState {
    ViewState::new(
        &SiteConfig::default(),
        NavState::new(
            vec![
                "#overview".to_string(),
                "#features".to_string(),
                "#install".to_string(),
            ],
            vec![
                "overview".to_string(),
                "features".to_string(),
                "install".to_string(),
            ],
        ),
    )
}

fn scroll(state: &mut ViewState, top: f64) -> Vec<ViewUpdate> {
    let metrics = ScrollMetrics::new(top, 4000.0, 1000.0).with_sections(vec![0.0, 1000.0, 2500.0]);
    state.process_event(&SiteEvent::Scroll(metrics))
}

fn active_links(updates: &[ViewUpdate]) -> Vec<&str> {
    updates
        .iter()
        .filter_map(|u| match u {
            ViewUpdate::ActiveLink(Some(href)) => Some(href.as_str()),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_menu_state_after_n_toggles() {
    for n in 0..12 {
        let mut state = page();
        let mut last = None;
        for _ in 0..n {
            last = state.process_event(&SiteEvent::MenuToggle).pop();
        }
        let expected = n % 2 == 1;
        assert_eq!(state.menu.is_open(), expected, "after {n} toggles");
        if n > 0 {
            assert_eq!(last, Some(ViewUpdate::Menu { open: expected }));
        }
    }
}

#[test]
fn test_menu_outside_click_then_escape() {
    let mut state = page();
    state.process_event(&SiteEvent::MenuToggle);
    assert!(state.menu.is_open());

    state.process_event(&SiteEvent::Click { inside_menu: false });
    assert!(!state.menu.is_open());

    // Already closed: Escape changes nothing.
    assert!(state.process_event(&SiteEvent::key("Escape")).is_empty());
}

#[test]
fn test_scroll_spy_keeps_single_active_link() {
    let mut state = page();

    assert_eq!(active_links(&scroll(&mut state, 0.0)), vec!["#overview"]);
    assert_eq!(active_links(&scroll(&mut state, 950.0)), vec!["#features"]);
    assert!(active_links(&scroll(&mut state, 1200.0)).is_empty());
    assert_eq!(active_links(&scroll(&mut state, 2450.0)), vec!["#install"]);
    assert_eq!(active_links(&scroll(&mut state, 10.0)), vec!["#overview"]);

    assert_eq!(state.nav.active_href(), Some("#overview"));
}

#[test]
fn test_anchor_click_overrides_scroll_spy_until_next_scroll() {
    let mut state = page();
    scroll(&mut state, 0.0);

    let updates = state.process_event(&SiteEvent::AnchorClick {
        href: "#install".to_string(),
        target_top: Some(2500.0),
    });
    assert!(updates.contains(&ViewUpdate::ScrollTo { top: 2420.0 }));
    assert_eq!(state.nav.active_href(), Some("#install"));

    // The smooth scroll lands and scroll-spy agrees.
    assert!(active_links(&scroll(&mut state, 2420.0)).is_empty());
    assert_eq!(state.nav.active_href(), Some("#install"));
}

// ============================================================================
// Scroll effects
// ============================================================================

#[test]
fn test_progress_bar_at_top_and_bottom() {
    let mut state = page();
    let progress = |updates: &[ViewUpdate]| {
        updates.iter().find_map(|u| match u {
            ViewUpdate::Progress(p) => Some(docsite_core::scroll::percent_css(*p)),
            _ => None,
        })
    };

    assert_eq!(progress(&scroll(&mut state, 0.0)).as_deref(), Some("0%"));
    assert_eq!(progress(&scroll(&mut state, 3000.0)).as_deref(), Some("100%"));
}

#[test]
fn test_navbar_hides_down_shows_up() {
    let mut state = page();
    let navbar = |updates: Vec<ViewUpdate>| {
        updates
            .into_iter()
            .find_map(|u| match u {
                ViewUpdate::Navbar(style) => Some(style),
                _ => None,
            })
            .expect("navbar update")
    };

    assert!(!navbar(scroll(&mut state, 150.0)).hidden);
    let down = navbar(scroll(&mut state, 600.0));
    assert!(down.hidden && down.elevated);
    let up = navbar(scroll(&mut state, 550.0));
    assert!(!up.hidden && up.elevated);
    assert!((state.last_scroll_top() - 550.0).abs() < f64::EPSILON);
}

// ============================================================================
// Reveal and counters
// ============================================================================

#[test]
fn test_reveal_never_repeats() {
    let mut state = page();
    let cards: Vec<ElementId> = (0..4).map(|_| ElementId::new()).collect();
    for card in &cards {
        state.observe(*card, ObserveRole::Reveal);
    }

    for _ in 0..3 {
        for card in &cards {
            state.process_event(&SiteEvent::Intersect {
                element: *card,
                role: ObserveRole::Reveal,
            });
        }
    }
    assert_eq!(state.ledger().done_count(), 4);
}

#[test]
fn test_counter_runs_once_per_element() {
    let mut state = page();
    let stat = ElementId::new();
    state.observe(stat, ObserveRole::Counter);
    let event = SiteEvent::Intersect {
        element: stat,
        role: ObserveRole::Counter,
    };

    let starts = (0..5)
        .flat_map(|_| state.process_event(&event))
        .filter(|u| matches!(u, ViewUpdate::Animate { .. }))
        .count();
    assert_eq!(starts, 1);
}

#[test]
fn test_non_numeric_counter_finishes_at_zero_with_suffix() {
    let config = SiteConfig::default();
    let frames: Vec<String> = CounterAnimation::for_text("∞ uptime", &config.counter).collect();
    assert_eq!(frames, vec!["0∞ uptime".to_string()]);
}

#[test]
fn test_counter_frames_reach_target() {
    let config = SiteConfig::default();
    let frames: Vec<String> = CounterAnimation::for_text("$2,500", &config.counter).collect();
    assert_eq!(frames.first().map(String::as_str), Some("$20"));
    assert_eq!(frames.last().map(String::as_str), Some("$2,500"));
}

// ============================================================================
// Utilities
// ============================================================================

#[test]
fn test_rapid_double_copy_leaves_one_revert() {
    let mut buttons = CopyButtons::new(&SiteConfig::default().copy);
    let button = ElementId::new();
    buttons.register(button);

    let first = buttons.copied(button, 11);
    let second = buttons.copied(button, 12);
    assert_eq!(first.cancel, None);
    assert_eq!(second.cancel, Some(11));
    assert_eq!(buttons.pending_reverts(), 1);

    assert!(buttons.revert(button, 12).is_some());
    assert_eq!(buttons.pending_reverts(), 0);
}

#[test]
fn test_copy_failure_surfaces_error_toast() {
    let buttons = CopyButtons::new(&SiteConfig::default().copy);
    let mut toasts = ToastCenter::new();
    let (message, kind) = buttons.failed(ElementId::new());
    let toast = toasts.show(message, kind);
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toasts.live_count(), 1);
}

#[test]
fn test_search_flow() {
    let mut index = SearchIndex::new(
        vec![
            "Quick Start".to_string(),
            "Version Manager".to_string(),
            "Setup Wizard".to_string(),
        ],
        2,
    );

    let SearchOutcome::Filtered(views) = index.apply("wiz") else {
        panic!("expected filtered outcome");
    };
    assert_eq!(
        views.iter().map(|v| v.visible).collect::<Vec<_>>(),
        vec![false, false, true]
    );
    assert!(views[2].has_marks());

    assert_eq!(index.apply("w"), SearchOutcome::Unchanged);
    assert_eq!(index.visible_count(), 1);

    let SearchOutcome::Reset(views) = index.apply("") else {
        panic!("expected reset outcome");
    };
    let restored: Vec<String> = views.iter().map(docsite_core::ItemView::plain_text).collect();
    assert_eq!(restored, index.items());
    assert!(views.iter().all(|v| v.visible && !v.has_marks()));
}

#[test]
fn test_theme_round_trip_through_store() {
    let config = SiteConfig::default();
    let mut themes = ThemeController::load(MemoryStore::new(), &config.theme);
    assert_eq!(themes.current(), Theme::Light);

    themes.toggle().unwrap();
    assert_eq!(themes.store().get("theme"), Some("dark"));

    themes.toggle().unwrap();
    assert_eq!(themes.store().get("theme"), Some("light"));
    assert_eq!(themes.current(), Theme::Light);
}
