// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Gesture tracking and index navigation, kept apart from the surfaces that
//! render them so both gallery surfaces share the same rules.

pub mod gesture;
pub mod navigation;

pub use gesture::{GestureInput, GestureOutcome, GestureSession};
pub use navigation::NavigationState;
