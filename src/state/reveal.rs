//! Reveal-on-scroll bookkeeping.
//!
//! Content starts hidden and slightly offset, then settles the first time it
//! enters the viewport. Scrolling back out never hides it again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Inline styles applied before an element has been seen.
pub const HIDDEN_STYLE: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline styles applied once an element enters the viewport.
pub const SETTLED_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Per-badge stagger step.
pub const STAGGER_STEP_MS: usize = 100;

/// One-shot visibility flags, indexed by observed element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    /// Record that element `index` intersected; `true` only the first time.
    pub fn mark_visible(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    /// Every element has been seen; nothing is left to observe.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|seen| *seen)
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|seen| !**seen).count()
    }
}

/// CSS `transition-delay` for the `index`th skill badge.
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    format!("{}ms", index.saturating_mul(STAGGER_STEP_MS))
}
