//! # Docsite Core
//!
//! View-state logic for the documentation site's client-side behaviors.
//! Nothing in this crate touches the DOM: the WASM binding layer measures
//! the page, feeds events in, and applies the updates that come out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                docsite-core                 │
//! ├─────────────────────────────────────────────┤
//! │  ViewState       │  Utilities               │
//! │  - Nav / menu    │  - Counters              │
//! │  - Scroll        │  - Toasts                │
//! │  - Reveal ledger │  - Search / highlight    │
//! │                  │  - Theme store           │
//! ├─────────────────────────────────────────────┤
//! │  Pointer geometry │  Timer slots │  Config  │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod a11y;
pub mod config;
pub mod copy;
pub mod counter;
pub mod element;
pub mod error;
pub mod event;
pub mod interaction;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod search;
pub mod state;
pub mod theme;
pub mod timer;
pub mod toast;

pub use config::SiteConfig;
pub use copy::{CopyButtons, CopyState, CopySuccess};
pub use counter::{CounterAnimation, CounterFormat};
pub use element::ElementId;
pub use error::{SiteError, SiteResult};
pub use event::{ObserveRole, ScrollMetrics, SiteEvent};
pub use interaction::{Rect, Ripple, Tilt};
pub use nav::{MenuState, NavState};
pub use reveal::AnimationLedger;
pub use scroll::{NavbarStyle, ScrollEffects};
pub use search::{ItemView, SearchIndex, SearchOutcome, Segment};
pub use state::{ViewState, ViewUpdate};
pub use theme::{MemoryStore, Theme, ThemeController, ThemeStore};
pub use timer::TimerSlots;
pub use toast::{Toast, ToastCenter, ToastId, ToastKind, ToastPhase};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
