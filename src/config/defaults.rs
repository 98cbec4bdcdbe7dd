// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Swipe commit threshold and drag feedback damping
//! - **Source**: Listing backend location

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Horizontal distance (pixels) a drag must exceed to switch image.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Smallest accepted swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Largest accepted swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Fraction of the drag offset applied as visual displacement while dragging.
pub const DEFAULT_DRAG_DAMPING: f32 = 0.1;

/// No displacement at all.
pub const MIN_DRAG_DAMPING: f32 = 0.0;

/// Content follows the pointer exactly.
pub const MAX_DRAG_DAMPING: f32 = 1.0;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Base URL of the listing backend when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    assert!(MIN_DRAG_DAMPING >= 0.0);
    assert!(MAX_DRAG_DAMPING >= MIN_DRAG_DAMPING);
    assert!(DEFAULT_DRAG_DAMPING >= MIN_DRAG_DAMPING);
    assert!(DEFAULT_DRAG_DAMPING <= MAX_DRAG_DAMPING);
};
