//! # Navigation
//!
//! Mobile drawer state and the active-link highlight.
//!
//! ```text
//! toggle click ──► MenuState ◄── outside click / Escape (close only)
//!
//! scroll ────────┐
//! anchor click ──┼──► NavState.active  (at most one link)
//! path change ───┘
//! ```

use serde::{Deserialize, Serialize};

/// Icon class shown while the drawer is closed.
pub const ICON_CLOSED: &str = "fas fa-bars";

/// Icon class shown while the drawer is open.
pub const ICON_OPEN: &str = "fas fa-times";

/// Open/closed state of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Create a menu in the given state.
    #[must_use]
    pub const fn new(open: bool) -> Self {
        Self { open }
    }

    /// Whether the drawer is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Set the drawer state. Returns whether it changed.
    pub fn set(&mut self, open: bool) -> bool {
        let changed = self.open != open;
        self.open = open;
        changed
    }

    /// Close the drawer. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.set(false)
    }

    /// Icon class matching the current state.
    #[must_use]
    pub const fn icon_class(&self) -> &'static str {
        if self.open {
            ICON_OPEN
        } else {
            ICON_CLOSED
        }
    }
}

/// Active-link tracking over a fixed set of nav links and page sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavState {
    links: Vec<String>,
    sections: Vec<String>,
    active: Option<usize>,
}

impl NavState {
    /// Track the given link hrefs and section ids.
    #[must_use]
    pub fn new(links: Vec<String>, sections: Vec<String>) -> Self {
        Self {
            links,
            sections,
            active: None,
        }
    }

    /// Href of the active link, if any.
    #[must_use]
    pub fn active_href(&self) -> Option<&str> {
        self.active.map(|i| self.links[i].as_str())
    }

    /// Index of the active link, if any.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Mark the link with this exact href active.
    ///
    /// Returns `true` if the active link changed. Unknown hrefs leave the
    /// current highlight alone.
    pub fn activate_href(&mut self, href: &str) -> bool {
        let Some(index) = self.links.iter().position(|l| l == href) else {
            return false;
        };
        let changed = self.active != Some(index);
        self.active = Some(index);
        changed
    }

    /// Id of the section that should be highlighted for this scroll offset.
    ///
    /// The last section whose top is within `threshold` of the viewport top
    /// wins. Before the first section is reached the first one is used.
    #[must_use]
    pub fn section_at<'a>(
        &'a self,
        scroll_top: f64,
        section_tops: &[f64],
        threshold: f64,
    ) -> Option<&'a str> {
        let mut current = self.sections.first()?;
        for (id, top) in self.sections.iter().zip(section_tops) {
            if *top <= scroll_top + threshold {
                current = id;
            }
        }
        Some(current.as_str())
    }

    /// Recompute the active link from a scroll position.
    ///
    /// Returns `true` if the active link changed.
    pub fn spy(&mut self, scroll_top: f64, section_tops: &[f64], threshold: f64) -> bool {
        let Some(section) = self.section_at(scroll_top, section_tops, threshold) else {
            return false;
        };
        let href = format!("#{section}");
        self.activate_href(&href)
    }

    /// Drop the highlight. Returns `true` if a link was active.
    pub fn clear(&mut self) -> bool {
        self.active.take().is_some()
    }
}

/// Scroll offset that brings an element below a fixed header into view.
#[must_use]
pub fn anchor_scroll_top(target_top: f64, header_offset: f64) -> f64 {
    (target_top - header_offset).max(0.0)
}
