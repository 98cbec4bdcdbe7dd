// SPDX-License-Identifier: MPL-2.0
//! Inline carousel shown on the listing page.
//!
//! A drag past the threshold changes image. A press released without
//! committing a drag is a click, which asks the application to open the
//! lightbox on the current image.

use super::{counter, hint, image_frame, thumbnail_strip, ViewContext};
use crate::domain::gallery::{DragDamping, SwipeThreshold};
use crate::listing::ImageSet;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing};
use crate::ui::state::{GestureInput, GestureOutcome, GestureSession, NavigationState};
use crate::ui::styles;
use crate::ui::widgets::swipe_area;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Inline carousel state.
#[derive(Debug, Clone, Default)]
pub struct Inline {
    images: ImageSet,
    navigation: NavigationState,
    gesture: GestureSession,
    /// Whether the most recent gesture session committed a navigation.
    last_commit: bool,
}

/// Messages for the inline carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Gesture(GestureInput),
    /// Thumbnail click; jumps directly without a gesture session.
    ThumbnailPressed(usize),
    Next,
    Previous,
}

/// Effects produced by the inline carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the lightbox positioned on `seed`.
    OpenLightbox { seed: usize },
    /// The current image changed.
    Navigated(usize),
}

impl Inline {
    #[must_use]
    pub fn new(images: ImageSet, threshold: SwipeThreshold, damping: DragDamping) -> Self {
        Self {
            navigation: NavigationState::new(images.len()),
            images,
            gesture: GestureSession::new(threshold, damping),
            last_commit: false,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Gesture(input) => self.handle_gesture(input),
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
        }
    }

    fn handle_gesture(&mut self, input: GestureInput) -> Effect {
        if matches!(input, GestureInput::Start(_)) {
            self.last_commit = false;
        }

        match self.gesture.handle(input) {
            GestureOutcome::Committed(direction) => {
                self.navigation.apply(direction);
                self.last_commit = true;
                tracing::debug!(?direction, index = ?self.navigation.current(), "inline swipe");
                self.navigated()
            }
            GestureOutcome::Released => match self.navigation.current() {
                Some(seed) if !self.last_commit => Effect::OpenLightbox { seed },
                _ => Effect::None,
            },
            GestureOutcome::Tracking | GestureOutcome::Cancelled | GestureOutcome::Ignored => {
                Effect::None
            }
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

    /// The listing's images, shared with any lightbox opened from here.
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

    #[must_use]
    pub fn last_commit(&self) -> bool {
        self.last_commit
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let frame = image_frame(ctx, self.navigation.current(), ContentFit::Cover);

        if self.navigation.is_empty() {
            return Container::new(frame)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::GALLERY_HEIGHT))
                .into();
        }

        let surface = swipe_area(frame, Message::Gesture)
            .active(self.gesture.is_active())
            .displacement(self.gesture.displacement());

        let hint_key = if self.gesture.is_active() {
            "gallery-hint-drag"
        } else {
            "gallery-hint-open"
        };

        let mut top = Row::new()
            .width(Length::Fill)
            .padding(spacing::SM)
            .push(Space::new().width(Length::Fill));
        if let Some(counter) = counter(ctx.i18n, &self.navigation) {
            top = top.push(counter);
        }

        let arrows = Row::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(arrow("‹", Message::Previous))
            .push(Space::new().width(Length::Fill))
            .push(arrow("›", Message::Next));

        let bottom = Container::new(hint(ctx.i18n.tr(hint_key)))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom);

        let stage = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_HEIGHT))
            .push(surface)
            .push(bottom)
            .push(top)
            .push(arrows);

        Column::new()
            .spacing(spacing::XS)
            .push(stage)
            .push(thumbnail_strip(ctx, &self.navigation, Message::ThumbnailPressed))
            .into()
    }
}

/// Round previous/next button drawn over the image.
pub(crate) fn arrow<'a, Message: Clone + 'a>(glyph: &'a str, on_press: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(sizing::OVERLAY_BUTTON * 0.6)
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
    .on_press(on_press)
    .into()
}
