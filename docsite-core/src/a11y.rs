//! Accessibility affordances.

/// Target of the skip link.
pub const SKIP_LINK_TARGET: &str = "#main-content";

/// Skip link text.
pub const SKIP_LINK_TEXT: &str = "Skip to main content";

/// Skip link class.
pub const SKIP_LINK_CLASS: &str = "skip-link";

/// Focus outline.
pub const FOCUS_OUTLINE: &str = "2px solid #2563eb";

/// Focus outline offset.
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";

/// Label for a control that has no `aria-label`: its visible text with
/// whitespace collapsed. `None` when there is no text to use.
#[must_use]
pub fn aria_label(text: &str) -> Option<String> {
    let label = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!label.is_empty()).then_some(label)
}
