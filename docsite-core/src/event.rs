//! Page events fed into [`crate::ViewState`].
//!
//! The binding layer translates raw DOM events into these and measures any
//! layout the state machine needs, so the state machine never touches the DOM.

use serde::{Deserialize, Serialize};

use crate::ElementId;

/// Layout snapshot taken on a scroll event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub scroll_top: f64,
    /// Total document height.
    pub scroll_height: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Top offset of every tracked section, in registration order.
    pub section_tops: Vec<f64>,
}

impl ScrollMetrics {
    /// Metrics without section offsets.
    #[must_use]
    pub fn new(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
            section_tops: Vec::new(),
        }
    }

    /// Attach section offsets.
    #[must_use]
    pub fn with_sections(mut self, section_tops: Vec<f64>) -> Self {
        self.section_tops = section_tops;
        self
    }
}

/// What an intersection observer is watching an element for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObserveRole {
    /// One-way fade/slide reveal.
    Reveal,
    /// Count-up animation.
    Counter,
    /// Metric card entrance.
    Metric,
    /// Deferred image load.
    LazyImage,
}

/// All events the view state reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SiteEvent {
    /// The window scrolled.
    Scroll(ScrollMetrics),

    /// The mobile menu toggle was clicked.
    MenuToggle,

    /// A click anywhere in the document.
    Click {
        /// Whether the click landed inside the toggle or the menu.
        inside_menu: bool,
    },

    /// Keyboard event.
    Key {
        /// Key name, as reported by `KeyboardEvent.key`.
        key: String,
    },

    /// An in-page anchor was clicked.
    AnchorClick {
        /// The anchor's href, including the leading `#`.
        href: String,
        /// Top offset of the target element, if it exists.
        target_top: Option<f64>,
    },

    /// The page path is known or changed (load, popstate).
    PathChanged {
        /// `location.pathname`.
        path: String,
    },

    /// An observed element entered the viewport.
    Intersect {
        /// The element.
        element: ElementId,
        /// Why it is observed.
        role: ObserveRole,
    },
}

impl SiteEvent {
    /// Convenience constructor for a key press.
    #[must_use]
    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
        }
    }
}
