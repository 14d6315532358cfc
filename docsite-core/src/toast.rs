//! # Toast Notifications
//!
//! Lifecycle of transient notifications.
//!
//! ```text
//! show ──► Entering ──(enter delay)──► Shown ──┬─(auto dismiss)─┐
//!             │                                └─(close click)──┤
//!             └──────────────(close click)──────────────────────┴─► Dismissing ──(exit)──► removed
//! ```
//!
//! Auto and manual dismissal race; whichever comes first wins and the other
//! is a no-op, so a toast is removed exactly once.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SiteError;

/// Kind of notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// Neutral information.
    #[default]
    Info,
    /// An action succeeded.
    Success,
    /// An action failed.
    Error,
    /// Something needs attention.
    Warning,
}

impl ToastKind {
    /// Lowercase name used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// Font Awesome icon class.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "fas fa-info-circle",
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Warning => "fas fa-exclamation-triangle",
        }
    }

    /// Class list of the toast container.
    #[must_use]
    pub fn container_class(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Parse a kind, falling back to [`ToastKind::Info`] for unknown names.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for ToastKind {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            other => Err(SiteError::InvalidToastKind(other.to_string())),
        }
    }
}

/// Identifier of a live toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToastId(u64);

impl ToastId {
    /// Raw value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Lifecycle phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    /// Inserted, waiting for the slide-in class.
    Entering,
    /// Visible.
    Shown,
    /// Sliding out; removal is scheduled.
    Dismissing,
}

/// A toast to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Identifier.
    pub id: ToastId,
    /// Text, inserted as plain text.
    pub message: String,
    /// Kind.
    pub kind: ToastKind,
}

/// Live toasts.
#[derive(Debug, Clone, Default)]
pub struct ToastCenter {
    next_id: u64,
    live: HashMap<ToastId, ToastPhase>,
}

impl ToastCenter {
    /// Create an empty center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new toast.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.live.insert(id, ToastPhase::Entering);
        let message = message.into();
        tracing::debug!("Showing {} {id}: {message}", kind.as_str());
        Toast { id, message, kind }
    }

    /// The enter delay elapsed. Returns `true` if the toast should slide in.
    pub fn entered(&mut self, id: ToastId) -> bool {
        match self.live.get_mut(&id) {
            Some(phase) if *phase == ToastPhase::Entering => {
                *phase = ToastPhase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Start dismissing. Returns `true` only for the first call per toast;
    /// the caller then schedules the removal.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.live.get_mut(&id) {
            Some(phase) if matches!(*phase, ToastPhase::Entering | ToastPhase::Shown) => {
                *phase = ToastPhase::Dismissing;
                true
            }
            _ => false,
        }
    }

    /// The exit transition finished. Returns `true` if the node should be
    /// removed now.
    pub fn removed(&mut self, id: ToastId) -> bool {
        if self.live.get(&id) == Some(&ToastPhase::Dismissing) {
            self.live.remove(&id);
            true
        } else {
            false
        }
    }

    /// Phase of a toast, `None` once removed.
    #[must_use]
    pub fn phase(&self, id: ToastId) -> Option<ToastPhase> {
        self.live.get(&id).copied()
    }

    /// Number of toasts not yet removed.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
