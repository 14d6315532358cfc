//! Scroll-reactive effects: navbar style, progress bar, parallax.

use serde::{Deserialize, Serialize};

use crate::config::ScrollConfig;

/// Visual state of the fixed navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarStyle {
    /// Opaque background with a drop shadow.
    pub elevated: bool,
    /// Slid out of view above the viewport.
    pub hidden: bool,
}

impl NavbarStyle {
    /// CSS `background` value.
    #[must_use]
    pub const fn background(&self) -> &'static str {
        if self.elevated {
            "rgba(255, 255, 255, 0.98)"
        } else {
            "rgba(255, 255, 255, 0.95)"
        }
    }

    /// CSS `box-shadow` value.
    #[must_use]
    pub const fn box_shadow(&self) -> &'static str {
        if self.elevated {
            "0 2px 20px rgba(0, 0, 0, 0.1)"
        } else {
            "none"
        }
    }

    /// CSS `transform` value.
    #[must_use]
    pub const fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Scroll tracking that replaces a free-floating `last scroll` variable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrollEffects {
    last_scroll_top: f64,
    config: ScrollConfig,
}

impl ScrollEffects {
    /// Create with the given thresholds.
    #[must_use]
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            last_scroll_top: 0.0,
            config: config.clone(),
        }
    }

    /// Last recorded scroll offset.
    #[must_use]
    pub const fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Compute the navbar style for a new scroll offset and record it.
    pub fn navbar(&mut self, scroll_top: f64) -> NavbarStyle {
        let style = NavbarStyle {
            elevated: scroll_top > self.config.elevate_after,
            hidden: scroll_top > self.last_scroll_top && scroll_top > self.config.hide_after,
        };
        self.last_scroll_top = scroll_top;
        style
    }
}

/// Reading progress in percent, clamped to `[0, 100]`.
///
/// A page that cannot scroll reports 0.
#[must_use]
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Format a percentage as a CSS width with at most two decimals.
#[must_use]
pub fn percent_css(percent: f64) -> String {
    // Adding zero turns -0.0 into 0.0 so no sign is printed.
    let percent = (percent * 100.0).round() / 100.0 + 0.0;
    let rounded = format!("{percent:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

/// Vertical offset of a parallax card for a scroll position.
#[must_use]
pub fn parallax_offset(scroll_top: f64, rate: f64) -> f64 {
    -(scroll_top * rate)
}

/// CSS transform for a parallax offset.
#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset:.1}px)")
}
