//! Site configuration.
//!
//! Every selector and timing constant the behaviors depend on lives here, so
//! markup and script agree on one contract. Pages may override any subset by
//! embedding a JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::SiteResult;

/// Element id of the optional inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "docsite-config";

/// Complete site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Selector contract between markup and script.
    pub selectors: Selectors,
    /// Navigation behavior.
    pub nav: NavConfig,
    /// Scroll-driven effects.
    pub scroll: ScrollConfig,
    /// Viewport reveal animations.
    pub reveal: RevealConfig,
    /// Counter animation.
    pub counter: CounterConfig,
    /// Toast notifications.
    pub toast: ToastConfig,
    /// Copy buttons.
    pub copy: CopyConfig,
    /// Search field.
    pub search: SearchConfig,
    /// Theme persistence.
    pub theme: ThemeConfig,
    /// Pointer micro-interactions.
    pub interaction: InteractionConfig,
    /// Toast shown shortly after the page finishes loading.
    pub welcome_message: Option<String>,
    /// Delay before the welcome toast, in milliseconds.
    pub welcome_delay_ms: u32,
    /// `tracing` filter directive for console logging.
    pub log_filter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            nav: NavConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            counter: CounterConfig::default(),
            toast: ToastConfig::default(),
            copy: CopyConfig::default(),
            search: SearchConfig::default(),
            theme: ThemeConfig::default(),
            interaction: InteractionConfig::default(),
            welcome_message: None,
            welcome_delay_ms: 1000,
            log_filter: "info,docsite_app=debug,docsite_core=info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SiteError::Config`] if the JSON is malformed.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// CSS selectors and class names shared with the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Fixed header.
    pub navbar: String,
    /// Mobile drawer toggle button.
    pub menu_toggle: String,
    /// Navigation menu.
    pub nav_menu: String,
    /// Navigation links.
    pub nav_link: String,
    /// In-page anchors that smooth-scroll.
    pub anchor: String,
    /// Sections tracked by scroll-spy.
    pub section: String,
    /// Dropdown toggles.
    pub dropdown_toggle: String,
    /// Elements revealed on first intersection.
    pub animatable: String,
    /// Metric cards with a one-shot entrance.
    pub metric_card: String,
    /// Elements whose numbers count up.
    pub counter: String,
    /// Buttons that ripple.
    pub button: String,
    /// Cards that tilt under the pointer.
    pub tilt_card: String,
    /// Cards with a floating animation.
    pub floating_card: String,
    /// Cards that move with scroll.
    pub parallax_card: String,
    /// Code blocks that get a copy button.
    pub code_block: String,
    /// Theme toggle button.
    pub theme_toggle: String,
    /// Lazily loaded images.
    pub lazy_image: String,
    /// Contact form.
    pub contact_form: String,
    /// Elements that receive focus outlines.
    pub focusable: String,
    /// Class applied to the open menu.
    pub menu_open_class: String,
    /// Class applied to the highlighted nav link.
    pub active_class: String,
    /// Class applied to revealed elements.
    pub visible_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            navbar: ".navbar".to_string(),
            menu_toggle: ".mobile-menu-toggle, #mobileMenuBtn".to_string(),
            nav_menu: ".nav-menu, #navMenu".to_string(),
            nav_link: ".nav-link".to_string(),
            anchor: "a[href^=\"#\"]".to_string(),
            section: "section[id]".to_string(),
            dropdown_toggle: ".dropdown-toggle".to_string(),
            animatable: ".fade-in, .slide-in-left, .slide-in-right, .slide-up, section, \
                         .feature-card, .problem-card, .solution-card, .benefit-category, \
                         .step, .arch-component"
                .to_string(),
            metric_card: ".metric-card".to_string(),
            counter: ".stat-number, .metric-value".to_string(),
            button: ".btn".to_string(),
            tilt_card: ".feature-card, .problem-card, .solution-card, .benefit-category, .step"
                .to_string(),
            floating_card: ".card".to_string(),
            parallax_card: ".floating-card".to_string(),
            code_block: "code:not(.no-copy)".to_string(),
            theme_toggle: ".theme-toggle".to_string(),
            lazy_image: "img[data-src]".to_string(),
            contact_form: "#contact-form".to_string(),
            focusable: "a, button, input, textarea, select".to_string(),
            menu_open_class: "mobile-active".to_string(),
            active_class: "active".to_string(),
            visible_class: "visible".to_string(),
        }
    }
}

/// Navigation behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Height of the fixed header subtracted from anchor scroll targets.
    pub header_offset: f64,
    /// Distance below the viewport top at which a section becomes active.
    pub spy_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            spy_threshold: 100.0,
        }
    }
}

/// Scroll-driven effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll position past which the navbar gets its elevated style.
    pub elevate_after: f64,
    /// Scroll position past which scrolling down hides the navbar.
    pub hide_after: f64,
    /// Default parallax rate for floating cards.
    pub parallax_rate: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            elevate_after: 100.0,
            hide_after: 200.0,
            parallax_rate: 0.1,
        }
    }
}

/// Viewport reveal animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio that triggers a reveal.
    pub threshold: f64,
    /// Observer root margin.
    pub root_margin: String,
    /// Intersection ratio that triggers a metric card entrance.
    pub metric_threshold: f64,
    /// Delay before the metric card transition starts, in milliseconds.
    pub metric_delay_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            metric_threshold: 0.5,
            metric_delay_ms: 100,
        }
    }
}

/// Counter animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Total animation time in milliseconds.
    pub duration_ms: u32,
    /// Interval between frames in milliseconds.
    pub tick_ms: u32,
    /// Intersection ratio that starts a counter.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            tick_ms: 16,
            threshold: 0.5,
        }
    }
}

/// Toast notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Delay before the slide-in class is applied.
    pub enter_delay_ms: u32,
    /// Time a toast stays up before dismissing itself.
    pub auto_dismiss_ms: u32,
    /// Exit transition length; the node is removed afterwards.
    pub exit_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            auto_dismiss_ms: 5000,
            exit_ms: 300,
        }
    }
}

/// Copy buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    /// How long the "copied" icon stays before reverting.
    pub revert_ms: u32,
    /// Message of the error toast shown when the clipboard write fails.
    pub failure_message: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            revert_ms: 2000,
            failure_message: "Copy to clipboard failed".to_string(),
        }
    }
}

/// Search field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search input.
    pub input: String,
    /// Elements searched.
    pub targets: String,
    /// Queries shorter than this (in characters) are ignored.
    pub min_query_chars: usize,
    /// Class of the highlight marker.
    pub highlight_class: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            input: "#search-input".to_string(),
            targets: "[data-searchable], .feature-card h3, section h2".to_string(),
            min_query_chars: 2,
            highlight_class: "search-highlight".to_string(),
        }
    }
}

/// Theme persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Storage key.
    pub storage_key: String,
    /// Keys written by older page scripts, read once and migrated.
    pub legacy_keys: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            legacy_keys: vec!["wiki-theme".to_string()],
        }
    }
}

/// Pointer micro-interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Ripple lifetime in milliseconds.
    pub ripple_ms: u32,
    /// Pointer offset (px) per degree of tilt.
    pub tilt_divisor: f64,
    /// Scale applied while a card is tilted.
    pub tilt_scale: f64,
    /// Stagger between floating card animations, in seconds.
    pub float_stagger_s: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            ripple_ms: 600,
            tilt_divisor: 10.0,
            tilt_scale: 1.02,
            float_stagger_s: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"nav":{"header_offset":64},"theme":{"storage_key":"t"}}"#)
                .unwrap();
        assert!((config.nav.header_offset - 64.0).abs() < f64::EPSILON);
        assert!((config.nav.spy_threshold - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.theme.storage_key, "t");
        assert_eq!(config.theme.legacy_keys, vec!["wiki-theme".to_string()]);
        assert_eq!(config.counter.duration_ms, 2000);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::SiteError::Config(_)));
    }

    #[test]
    fn test_welcome_message_is_optional() {
        let config = SiteConfig::from_json(r#"{"welcome_message":"Hi"}"#).unwrap();
        assert_eq!(config.welcome_message.as_deref(), Some("Hi"));
        assert!(SiteConfig::default().welcome_message.is_none());
    }
}
