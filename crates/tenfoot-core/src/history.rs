//! Bounded navigation history.
//!
//! Records previously active screens for the back key. Capacity is fixed;
//! pushing onto a full history evicts the oldest entry.

use std::collections::VecDeque;

use crate::screen::ScreenId;

/// Maximum number of remembered screens.
pub const HISTORY_CAPACITY: usize = 10;

/// Bounded record of previously active screens.
#[derive(Debug, Clone, Default)]
pub struct NavigationHistory {
    entries: VecDeque<ScreenId>,
}

impl NavigationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(HISTORY_CAPACITY) }
    }

    /// Record `screen`, evicting the oldest entry at capacity.
    pub fn push(&mut self, screen: ScreenId) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(screen);
    }

    /// Remove and return the most recent entry.
    pub fn pop(&mut self) -> Option<ScreenId> {
        self.entries.pop_back()
    }

    /// Most recent entry without removing it.
    pub fn top(&self) -> Option<ScreenId> {
        self.entries.back().copied()
    }

    /// Number of recorded screens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_are_lifo() {
        let mut history = NavigationHistory::new();
        history.push(ScreenId("a"));
        history.push(ScreenId("b"));

        assert_eq!(history.pop(), Some(ScreenId("b")));
        assert_eq!(history.pop(), Some(ScreenId("a")));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn capacity_evicts_oldest() {
        let mut history = NavigationHistory::new();
        for name in ["s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9"] {
            history.push(ScreenId(name));
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);

        // The eleventh push drops s0, not the newest entry.
        history.push(ScreenId("s10"));
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.iter().next(), Some(ScreenId("s1")));
        assert_eq!(history.top(), Some(ScreenId("s10")));
    }

    #[test]
    fn top_does_not_remove() {
        let mut history = NavigationHistory::new();
        history.push(ScreenId("a"));

        assert_eq!(history.top(), Some(ScreenId("a")));
        assert_eq!(history.len(), 1);
    }
}
