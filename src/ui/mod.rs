// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Surfaces
//!
//! - [`gallery`] - Inline carousel and modal lightbox
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Gesture session and circular navigation
//! - [`widgets`] - Custom Iced widgets (swipe area)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod widgets;
