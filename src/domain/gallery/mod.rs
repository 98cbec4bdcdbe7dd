// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types shared by the inline gallery and the lightbox.

mod newtypes;

pub use newtypes::{DragDamping, SwipeThreshold};

/// Direction of a gallery step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the following image.
    Next,
    /// Move to the preceding image.
    Previous,
}

impl Direction {
    /// Direction committed by a horizontal drag offset.
    ///
    /// Dragging right reveals the previous image, dragging left the next one.
    #[must_use]
    pub fn from_offset(offset: f32) -> Self {
        if offset > 0.0 {
            Direction::Previous
        } else {
            Direction::Next
        }
    }
}
