// SPDX-License-Identifier: MPL-2.0
//! Full-window modal viewer.
//!
//! A `Lightbox` only exists while the modal is open. It is seeded with the
//! inline carousel's index when created and navigates independently from then
//! on; closing it drops the state entirely.

use super::inline::arrow;
use super::{counter, hint, image_frame, thumbnail_strip, LightboxKey, ViewContext};
use crate::domain::gallery::{DragDamping, SwipeThreshold};
use crate::listing::ImageSet;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing};
use crate::ui::state::{GestureInput, GestureOutcome, GestureSession, NavigationState};
use crate::ui::styles;
use crate::ui::widgets::swipe_area;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Lightbox state.
#[derive(Debug, Clone)]
pub struct Lightbox {
    images: ImageSet,
    navigation: NavigationState,
    gesture: GestureSession,
}

/// Messages for the lightbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Gesture(GestureInput),
    ThumbnailPressed(usize),
    Next,
    Previous,
    /// Close button.
    Close,
    /// Press on the dimmed area around the content.
    BackdropPressed,
    Key(LightboxKey),
}

/// Effects produced by the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The application should drop this lightbox.
    Close,
    Navigated(usize),
}

impl Lightbox {
    /// Opens on `seed`, or on the first image when `seed` is out of range.
    #[must_use]
    pub fn new(
        images: &ImageSet,
        seed: usize,
        threshold: SwipeThreshold,
        damping: DragDamping,
    ) -> Self {
        Self {
            navigation: NavigationState::seeded(images.len(), seed),
            images: images.clone(),
            gesture: GestureSession::new(threshold, damping),
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Gesture(input) => match self.gesture.handle(input) {
                GestureOutcome::Committed(direction) => {
                    self.navigation.apply(direction);
                    tracing::debug!(?direction, index = ?self.navigation.current(), "lightbox swipe");
                    self.navigated()
                }
                // A tap inside the lightbox has no action
                GestureOutcome::Released
                | GestureOutcome::Tracking
                | GestureOutcome::Cancelled
                | GestureOutcome::Ignored => Effect::None,
            },
            Message::ThumbnailPressed(index) => {
                self.navigation.jump_to(index);
                self.navigated()
            }
            Message::Next => {
                self.navigation.next();
                self.navigated()
            }
            Message::Previous => {
                self.navigation.previous();
                self.navigated()
            }
            Message::Close | Message::BackdropPressed => Effect::Close,
            Message::Key(key) => match key {
                LightboxKey::Escape => Effect::Close,
                LightboxKey::Left => self.handle(Message::Previous),
                LightboxKey::Right => self.handle(Message::Next),
                LightboxKey::Other => Effect::None,
            },
        }
    }

    fn navigated(&self) -> Effect {
        self.navigation
            .current()
            .map_or(Effect::None, Effect::Navigated)
    }

    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.navigation.current()
    }

    #[must_use]
    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureSession {
        &self.gesture
    }

    /// Renders the modal layer. Meant to be stacked over the page.
    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let frame = image_frame(ctx, self.navigation.current(), ContentFit::Contain);
        let surface = Container::new(
            swipe_area(frame, Message::Gesture)
                .active(self.gesture.is_active())
                .displacement(self.gesture.displacement()),
        )
        .width(Length::Fill)
        .height(Length::Fill);

        let stage = Row::new()
            .spacing(spacing::MD)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center)
            .push(arrow("‹", Message::Previous))
            .push(surface)
            .push(arrow("›", Message::Next));

        let mut footer = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);
        if let Some(counter) = counter(ctx.i18n, &self.navigation) {
            footer = footer.push(counter);
        }
        footer = footer.push(hint(ctx.i18n.tr("lightbox-hint-keys")));

        let content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .max_width(sizing::PAGE_MAX_WIDTH * 1.25)
            .align_x(alignment::Horizontal::Center)
            .push(stage)
            .push(footer)
            .push(thumbnail_strip(ctx, &self.navigation, Message::ThumbnailPressed));

        let close = button(
            Text::new("✕")
                .size(sizing::OVERLAY_BUTTON * 0.45)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::OVERLAY_BUTTON))
        .height(Length::Fixed(sizing::OVERLAY_BUTTON))
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Close);

        let top_bar = Row::new()
            .width(Length::Fill)
            .padding(spacing::MD)
            .push(Space::new().width(Length::Fill))
            .push(close);

        // Presses on the content are swallowed by `opaque` before they can
        // reach the backdrop handler.
        let body = Container::new(opaque(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        let layer = Container::new(Column::new().push(top_bar).push(body))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop);

        opaque(mouse_area(layer).on_press(Message::BackdropPressed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    fn lightbox(len: usize, seed: usize) -> Lightbox {
        let uris: Vec<String> = (0..len).map(|i| format!("/photos/{i}.jpg")).collect();
        Lightbox::new(
            &ImageSet::from_uris(&uris),
            seed,
            SwipeThreshold::default(),
            DragDamping::default(),
        )
    }

    #[test]
    fn opens_on_seed() {
        assert_eq!(lightbox(3, 2).current(), Some(2));
    }

    #[test]
    fn out_of_range_seed_opens_on_first() {
        assert_eq!(lightbox(3, 7).current(), Some(0));
    }

    #[test]
    fn escape_closes() {
        let mut lb = lightbox(3, 0);
        assert_eq!(lb.handle(Message::Key(LightboxKey::Escape)), Effect::Close);
    }

    #[test]
    fn escape_closes_mid_drag() {
        let mut lb = lightbox(3, 0);
        lb.handle(Message::Gesture(GestureInput::Start(Point::new(10.0, 10.0))));
        assert_eq!(lb.handle(Message::Key(LightboxKey::Escape)), Effect::Close);
    }

    #[test]
    fn arrow_keys_navigate_with_wrap() {
        let mut lb = lightbox(3, 2);
        assert_eq!(lb.handle(Message::Key(LightboxKey::Right)), Effect::Navigated(0));
        assert_eq!(lb.handle(Message::Key(LightboxKey::Left)), Effect::Navigated(2));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut lb = lightbox(3, 1);
        assert_eq!(lb.handle(Message::Key(LightboxKey::Other)), Effect::None);
        assert_eq!(lb.current(), Some(1));
    }

    #[test]
    fn backdrop_and_button_close() {
        let mut lb = lightbox(2, 0);
        assert_eq!(lb.handle(Message::BackdropPressed), Effect::Close);
        assert_eq!(lb.handle(Message::Close), Effect::Close);
    }

    #[test]
    fn swipe_navigates_and_tap_does_nothing() {
        let mut lb = lightbox(4, 1);
        lb.handle(Message::Gesture(GestureInput::Start(Point::new(300.0, 0.0))));
        lb.handle(Message::Gesture(GestureInput::Move(Point::new(200.0, 0.0))));
        assert_eq!(
            lb.handle(Message::Gesture(GestureInput::End)),
            Effect::Navigated(2)
        );

        lb.handle(Message::Gesture(GestureInput::Start(Point::new(300.0, 0.0))));
        assert_eq!(
            lb.handle(Message::Gesture(GestureInput::End)),
            Effect::None
        );
        assert_eq!(lb.current(), Some(2));
    }

    #[test]
    fn thumbnails_jump_within_lightbox() {
        let mut lb = lightbox(5, 0);
        assert_eq!(lb.handle(Message::ThumbnailPressed(4)), Effect::Navigated(4));
        assert_eq!(lb.handle(Message::ThumbnailPressed(9)), Effect::Navigated(4));
    }
}
