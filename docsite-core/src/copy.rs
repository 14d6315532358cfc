//! Copy-to-clipboard button feedback.
//!
//! The clipboard write itself is asynchronous and lives in the binding
//! layer; this module decides what the button shows afterwards and makes
//! sure repeated clicks leave exactly one pending revert.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::CopyConfig;
use crate::timer::TimerSlots;
use crate::toast::ToastKind;
use crate::ElementId;

/// Icon shown while idle.
pub const ICON_COPY: &str = "fas fa-copy";

/// Icon shown after a successful copy.
pub const ICON_COPIED: &str = "fas fa-check";

/// Visible state of a copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyState {
    /// Ready to copy.
    #[default]
    Idle,
    /// Showing the success icon until the revert timer fires.
    Copied,
}

impl CopyState {
    /// Icon class for this state.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Idle => ICON_COPY,
            Self::Copied => ICON_COPIED,
        }
    }
}

/// What the binding layer must do after a successful copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopySuccess {
    /// Icon to show now.
    pub icon: &'static str,
    /// Earlier revert timer to clear, if one was pending.
    pub cancel: Option<i32>,
}

/// Copy buttons on the page and their revert timers.
#[derive(Debug, Clone)]
pub struct CopyButtons {
    states: HashMap<ElementId, CopyState>,
    reverts: TimerSlots<ElementId>,
    failure_message: String,
}

impl CopyButtons {
    /// Create with the given configuration.
    #[must_use]
    pub fn new(config: &CopyConfig) -> Self {
        Self {
            states: HashMap::new(),
            reverts: TimerSlots::new(),
            failure_message: config.failure_message.clone(),
        }
    }

    /// Register a button.
    pub fn register(&mut self, button: ElementId) {
        self.states.entry(button).or_default();
    }

    /// Current state of a button. Unknown buttons read as idle.
    #[must_use]
    pub fn state(&self, button: ElementId) -> CopyState {
        self.states.get(&button).copied().unwrap_or_default()
    }

    /// The clipboard write succeeded and a revert timer `handle` was
    /// scheduled for the button.
    pub fn copied(&mut self, button: ElementId, handle: i32) -> CopySuccess {
        self.states.insert(button, CopyState::Copied);
        CopySuccess {
            icon: ICON_COPIED,
            cancel: self.reverts.restart(button, handle),
        }
    }

    /// A revert timer fired. Returns the icon to restore, or `None` if the
    /// timer was superseded by a later click.
    pub fn revert(&mut self, button: ElementId, handle: i32) -> Option<&'static str> {
        if !self.reverts.fire(&button, handle) {
            return None;
        }
        self.states.insert(button, CopyState::Idle);
        Some(ICON_COPY)
    }

    /// The clipboard write failed: the toast to show.
    #[must_use]
    pub fn failed(&self, button: ElementId) -> (String, ToastKind) {
        tracing::debug!("Copy failed for button {button}");
        (self.failure_message.clone(), ToastKind::Error)
    }

    /// Number of revert timers pending.
    #[must_use]
    pub fn pending_reverts(&self) -> usize {
        self.reverts.pending_count()
    }
}

impl Default for CopyButtons {
    fn default() -> Self {
        Self::new(&CopyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_then_revert() {
        let mut buttons = CopyButtons::default();
        let btn = ElementId::new();
        buttons.register(btn);
        assert_eq!(buttons.state(btn), CopyState::Idle);

        let success = buttons.copied(btn, 7);
        assert_eq!(success.icon, ICON_COPIED);
        assert_eq!(success.cancel, None);
        assert_eq!(buttons.state(btn), CopyState::Copied);

        assert_eq!(buttons.revert(btn, 7), Some(ICON_COPY));
        assert_eq!(buttons.state(btn), CopyState::Idle);
        assert_eq!(buttons.pending_reverts(), 0);
    }

    #[test]
    fn test_double_click_keeps_one_pending_revert() {
        let mut buttons = CopyButtons::default();
        let btn = ElementId::new();

        buttons.copied(btn, 1);
        let second = buttons.copied(btn, 2);
        assert_eq!(second.cancel, Some(1));
        assert_eq!(buttons.pending_reverts(), 1);

        // The first timer was cleared; even if it fired it is stale.
        assert_eq!(buttons.revert(btn, 1), None);
        assert_eq!(buttons.state(btn), CopyState::Copied);
        assert_eq!(buttons.revert(btn, 2), Some(ICON_COPY));
        assert_eq!(buttons.state(btn), CopyState::Idle);
    }

    #[test]
    fn test_failure_requests_error_toast() {
        let buttons = CopyButtons::default();
        let (message, kind) = buttons.failed(ElementId::new());
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(message, "Copy to clipboard failed");
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut buttons = CopyButtons::default();
        let (a, b) = (ElementId::new(), ElementId::new());
        buttons.copied(a, 1);
        buttons.copied(b, 2);
        assert_eq!(buttons.pending_reverts(), 2);
        assert_eq!(CopyState::Copied.icon_class(), ICON_COPIED);
    }
}
