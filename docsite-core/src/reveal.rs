//! One-shot animation bookkeeping.
//!
//! Every observed element gets a flag per [`ObserveRole`]. A flag flips from
//! `false` to `true` exactly once; re-intersection never re-triggers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ElementId, ObserveRole};

/// Per-element "already animated" flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationLedger {
    flags: HashMap<ElementId, HashMap<ObserveRole, bool>>,
}

impl AnimationLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element for a role. Existing flags are kept.
    pub fn track(&mut self, element: ElementId, role: ObserveRole) {
        self.flags
            .entry(element)
            .or_default()
            .entry(role)
            .or_insert(false);
    }

    /// Whether the element is registered for the role.
    #[must_use]
    pub fn is_tracked(&self, element: ElementId, role: ObserveRole) -> bool {
        self.flags
            .get(&element)
            .is_some_and(|roles| roles.contains_key(&role))
    }

    /// Whether the element already ran its animation for the role.
    #[must_use]
    pub fn is_done(&self, element: ElementId, role: ObserveRole) -> bool {
        self.flags
            .get(&element)
            .and_then(|roles| roles.get(&role))
            .copied()
            .unwrap_or(false)
    }

    /// Claim the animation for an element.
    ///
    /// Returns `true` the first time for a tracked element and `false`
    /// afterwards. Untracked elements are ignored.
    pub fn claim(&mut self, element: ElementId, role: ObserveRole) -> bool {
        match self.flags.get_mut(&element).and_then(|r| r.get_mut(&role)) {
            Some(done) if !*done => {
                *done = true;
                true
            }
            _ => false,
        }
    }

    /// Number of tracked (element, role) pairs.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.flags.values().map(HashMap::len).sum()
    }

    /// Number of animations that already ran.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.flags
            .values()
            .flat_map(HashMap::values)
            .filter(|done| **done)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_one_shot() {
        let mut ledger = AnimationLedger::new();
        let el = ElementId::new();
        ledger.track(el, ObserveRole::Reveal);

        assert!(!ledger.is_done(el, ObserveRole::Reveal));
        assert!(ledger.claim(el, ObserveRole::Reveal));
        assert!(!ledger.claim(el, ObserveRole::Reveal));
        assert!(ledger.is_done(el, ObserveRole::Reveal));
    }

    #[test]
    fn test_untracked_claim_is_ignored() {
        let mut ledger = AnimationLedger::new();
        assert!(!ledger.claim(ElementId::new(), ObserveRole::Counter));
        assert_eq!(ledger.tracked_count(), 0);
    }

    #[test]
    fn test_roles_are_independent() {
        let mut ledger = AnimationLedger::new();
        let el = ElementId::new();
        ledger.track(el, ObserveRole::Reveal);
        ledger.track(el, ObserveRole::Counter);

        assert!(ledger.claim(el, ObserveRole::Reveal));
        assert!(ledger.claim(el, ObserveRole::Counter));
        assert_eq!(ledger.tracked_count(), 2);
        assert_eq!(ledger.done_count(), 2);
    }

    #[test]
    fn test_retrack_does_not_reset() {
        let mut ledger = AnimationLedger::new();
        let el = ElementId::new();
        ledger.track(el, ObserveRole::Metric);
        ledger.claim(el, ObserveRole::Metric);
        ledger.track(el, ObserveRole::Metric);

        assert!(ledger.is_tracked(el, ObserveRole::Metric));
        assert!(ledger.is_done(el, ObserveRole::Metric));
        assert!(!ledger.claim(el, ObserveRole::Metric));
    }
}
