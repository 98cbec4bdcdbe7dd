// SPDX-License-Identifier: MPL-2.0
//! Circular index over a fixed-length image set.

use crate::domain::gallery::Direction;

/// Current position within a gallery of `len` images.
///
/// The index wraps in both directions and can never leave `[0, len)`.
/// With an empty gallery every operation is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    len: usize,
    current: usize,
}

impl NavigationState {
    /// Creates a navigation state positioned on the first image.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Creates a navigation state positioned on `seed`, or the first image
    /// when `seed` is out of range.
    #[must_use]
    pub fn seeded(len: usize, seed: usize) -> Self {
        let mut state = Self::new(len);
        state.jump_to(seed);
        state
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Moves to `index` when it is in range; otherwise leaves the position unchanged.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    pub fn apply(&mut self, direction: Direction) {
        match direction {
            Direction::Next => self.next(),
            Direction::Previous => self.previous(),
        }
    }

    /// Current index, or `None` for an empty gallery.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.current)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_current(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// One-based position and total, for counters like "2 / 5".
    #[must_use]
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current().map(|index| (index + 1, self.len))
    }
}
