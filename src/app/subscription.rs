// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer input reaches the gallery surfaces through their widgets. Keyboard
//! input is only routed while the lightbox is open; the inline carousel does
//! not react to keys.

use super::Message;
use crate::ui::gallery::{input, lightbox};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the current modal state.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, _status, _window_id| route_lightbox_event(&event))
    } else {
        Subscription::none()
    }
}

fn route_lightbox_event(event: &iced::Event) -> Option<Message> {
    input::key_from_event(event)
        .filter(|key| *key != input::LightboxKey::Other)
        .map(|key| Message::Lightbox(lightbox::Message::Key(key)))
}
