// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for gallery tuning values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DRAG_DAMPING, DEFAULT_SWIPE_THRESHOLD_PX, MAX_DRAG_DAMPING, MAX_SWIPE_THRESHOLD_PX,
    MIN_DRAG_DAMPING, MIN_SWIPE_THRESHOLD_PX,
};

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Minimum horizontal drag distance (pixels) that commits a navigation.
///
/// A drag commits only when its absolute offset is strictly greater than
/// this value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_finite() {
            Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
        } else {
            Self::default()
        }
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether a drag with this offset goes past the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, offset: f32) -> bool {
        offset.abs() > self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

// =============================================================================
// DragDamping
// =============================================================================

/// Scale factor applied to the drag offset for visual feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDamping(f32);

impl DragDamping {
    /// Creates a new damping factor, clamping the value to `[0.0, 1.0]`.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_DRAG_DAMPING, MAX_DRAG_DAMPING))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Displacement to draw for the given drag offset.
    #[must_use]
    pub fn apply(self, offset: f32) -> f32 {
        offset * self.0
    }
}

impl Default for DragDamping {
    fn default() -> Self {
        Self(DEFAULT_DRAG_DAMPING)
    }
}
