// SPDX-License-Identifier: MPL-2.0
//! Keyboard adapter for the lightbox.
//!
//! Pointer input is translated by the swipe area widget; this module only
//! narrows raw key presses down to the few keys the lightbox reacts to.

use iced::keyboard::{self, key::Named, Key};
use iced::Event;

/// Keys the lightbox distinguishes. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    Left,
    Right,
    Other,
}

impl LightboxKey {
    #[must_use]
    pub fn from_key(key: &Key) -> Self {
        match key {
            Key::Named(Named::Escape) => LightboxKey::Escape,
            Key::Named(Named::ArrowLeft) => LightboxKey::Left,
            Key::Named(Named::ArrowRight) => LightboxKey::Right,
            _ => LightboxKey::Other,
        }
    }
}

/// Extracts a lightbox key from a window event.
///
/// Only key presses count; releases and non-keyboard events yield `None`.
#[must_use]
pub fn key_from_event(event: &Event) -> Option<LightboxKey> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            Some(LightboxKey::from_key(key))
        }
        _ => None,
    }
}
