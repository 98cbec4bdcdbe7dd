// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns mouse drags and touch swipes over its content
//! into [`GestureInput`] messages, and draws the content shifted horizontally
//! while a drag is in progress.
//!
//! How far to shift the content comes from the owning surface. The widget
//! only remembers whether it saw a press, so that a release arriving in the
//! same event batch as its press is still reported before the view catches up.

use crate::ui::state::GestureInput;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{touch, Element, Event, Length, Point, Rectangle, Size, Vector};

/// Pointer state local to a [`SwipeArea`].
#[derive(Debug, Clone, Copy, Default)]
struct State {
    pressed: bool,
}

/// A widget that reports swipe gestures performed over its content.
pub struct SwipeArea<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_gesture: Box<dyn Fn(GestureInput) -> Message + 'a>,
    active: bool,
    displacement: f32,
}

impl<'a, Message, Theme, Renderer> SwipeArea<'a, Message, Theme, Renderer> {
    /// Creates a new `SwipeArea` wrapping the given content.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_gesture: impl Fn(GestureInput) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_gesture: Box::new(on_gesture),
            active: false,
            displacement: 0.0,
        }
    }

    /// Whether the owning surface is currently tracking a session.
    ///
    /// Moves and releases are reported while active or while a press seen by
    /// this widget is still held.
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Horizontal shift applied to the content when drawing.
    #[must_use]
    pub fn displacement(mut self, displacement: f32) -> Self {
        self.displacement = displacement;
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SwipeArea<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let translation = Vector::new(self.displacement, 0.0);

        renderer.with_layer(bounds, |renderer| {
            renderer.with_translation(translation, |renderer| {
                self.content.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    style,
                    layout,
                    cursor,
                    viewport,
                );
            });
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();
        let tracking = self.active || state.pressed;

        if let Some(input) = gesture_input(event, cursor, bounds, tracking) {
            shell.publish((self.on_gesture)(input));
            match input {
                GestureInput::Start(_) => {
                    state.pressed = true;
                    shell.capture_event();
                    return;
                }
                GestureInput::End | GestureInput::Leave | GestureInput::Cancel => {
                    state.pressed = false;
                }
                GestureInput::Move(_) => {}
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.active || tree.state.downcast_ref::<State>().pressed {
            return mouse::Interaction::Grabbing;
        }

        let interaction = self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        );

        if interaction == mouse::Interaction::None && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            interaction
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<SwipeArea<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(area: SwipeArea<'a, Message, Theme, Renderer>) -> Self {
        Self::new(area)
    }
}

/// Helper function to create a swipe area around some content.
pub fn swipe_area<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_gesture: impl Fn(GestureInput) -> Message + 'a,
) -> SwipeArea<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SwipeArea::new(content, on_gesture)
}

/// Maps a raw window event to gesture input for a surface occupying `bounds`.
///
/// Presses only count inside the bounds. While tracking, leaving the bounds or
/// the window ends the session as a [`GestureInput::Leave`]; a lost touch
/// cancels it.
fn gesture_input(
    event: &Event,
    cursor: mouse::Cursor,
    bounds: Rectangle,
    tracking: bool,
) -> Option<GestureInput> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor.position_over(bounds).map(GestureInput::Start)
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) if tracking => {
            Some(track(*position, bounds))
        }
        Event::Mouse(mouse::Event::CursorLeft) if tracking => Some(GestureInput::Leave),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if tracking => {
            Some(GestureInput::End)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => bounds
            .contains(*position)
            .then_some(GestureInput::Start(*position)),
        Event::Touch(touch::Event::FingerMoved { position, .. }) if tracking => {
            Some(track(*position, bounds))
        }
        Event::Touch(touch::Event::FingerLifted { .. }) if tracking => Some(GestureInput::End),
        Event::Touch(touch::Event::FingerLost { .. }) if tracking => Some(GestureInput::Cancel),
        _ => None,
    }
}

fn track(position: Point, bounds: Rectangle) -> GestureInput {
    if bounds.contains(position) {
        GestureInput::Move(position)
    } else {
        GestureInput::Leave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(400.0, 300.0))
    }

    fn finger() -> touch::Finger {
        touch::Finger(0)
    }

    #[test]
    fn press_inside_starts_session() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(100.0, 50.0));
        assert_eq!(
            gesture_input(&event, cursor, bounds(), false),
            Some(GestureInput::Start(Point::new(100.0, 50.0)))
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(500.0, 50.0));
        assert_eq!(gesture_input(&event, cursor, bounds(), false), None);
    }

    #[test]
    fn right_button_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        let cursor = mouse::Cursor::Available(Point::new(100.0, 50.0));
        assert_eq!(gesture_input(&event, cursor, bounds(), false), None);
    }

    #[test]
    fn moves_are_only_reported_while_active() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(40.0, 50.0),
        });
        let cursor = mouse::Cursor::Available(Point::new(40.0, 50.0));
        assert_eq!(gesture_input(&event, cursor, bounds(), false), None);
        assert_eq!(
            gesture_input(&event, cursor, bounds(), true),
            Some(GestureInput::Move(Point::new(40.0, 50.0)))
        );
    }

    #[test]
    fn leaving_bounds_while_active_leaves() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(-10.0, 50.0),
        });
        let cursor = mouse::Cursor::Available(Point::new(-10.0, 50.0));
        assert_eq!(
            gesture_input(&event, cursor, bounds(), true),
            Some(GestureInput::Leave)
        );
    }

    #[test]
    fn cursor_leaving_window_leaves() {
        let event = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(
            gesture_input(&event, mouse::Cursor::Unavailable, bounds(), true),
            Some(GestureInput::Leave)
        );
        assert_eq!(
            gesture_input(&event, mouse::Cursor::Unavailable, bounds(), false),
            None
        );
    }

    #[test]
    fn release_ends_only_active_session() {
        let event = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let cursor = mouse::Cursor::Available(Point::new(100.0, 50.0));
        assert_eq!(
            gesture_input(&event, cursor, bounds(), true),
            Some(GestureInput::End)
        );
        assert_eq!(gesture_input(&event, cursor, bounds(), false), None);
    }

    #[test]
    fn touch_sequence_maps_to_session() {
        let cursor = mouse::Cursor::Unavailable;
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: finger(),
            position: Point::new(200.0, 100.0),
        });
        let moved = Event::Touch(touch::Event::FingerMoved {
            id: finger(),
            position: Point::new(120.0, 110.0),
        });
        let lifted = Event::Touch(touch::Event::FingerLifted {
            id: finger(),
            position: Point::new(120.0, 110.0),
        });

        assert_eq!(
            gesture_input(&pressed, cursor, bounds(), false),
            Some(GestureInput::Start(Point::new(200.0, 100.0)))
        );
        assert_eq!(
            gesture_input(&moved, cursor, bounds(), true),
            Some(GestureInput::Move(Point::new(120.0, 110.0)))
        );
        assert_eq!(
            gesture_input(&lifted, cursor, bounds(), true),
            Some(GestureInput::End)
        );
    }

    #[test]
    fn lost_touch_cancels() {
        let event = Event::Touch(touch::Event::FingerLost {
            id: finger(),
            position: Point::new(120.0, 110.0),
        });
        assert_eq!(
            gesture_input(&event, mouse::Cursor::Unavailable, bounds(), true),
            Some(GestureInput::Cancel)
        );
    }

    #[test]
    fn wheel_is_ignored() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        let cursor = mouse::Cursor::Available(Point::new(100.0, 50.0));
        assert_eq!(gesture_input(&event, cursor, bounds(), true), None);
    }

    mod driven {
        use super::*;
        use crate::ui::state::{GestureOutcome, GestureSession};
        use crate::domain::gallery::Direction;
        use iced::advanced::clipboard;
        use iced::widget::Space;
        use iced_runtime::user_interface::{Cache, UserInterface};

        /// Feeds event batches through a real widget tree, rebuilding the
        /// view from the session between batches like the runtime does.
        #[derive(Default)]
        struct Surface {
            session: GestureSession,
            cache: Option<Cache>,
            outcomes: Vec<GestureOutcome>,
        }

        impl Surface {
            fn deliver(&mut self, events: &[Event], cursor: mouse::Cursor) {
                let mut renderer = ();
                let area: Element<'_, GestureInput, iced::Theme, ()> =
                    swipe_area(Space::new().width(400.0).height(300.0), |input| input)
                        .active(self.session.is_active())
                        .displacement(self.session.displacement())
                        .into();

                let mut ui = UserInterface::build(
                    area,
                    Size::new(400.0, 300.0),
                    self.cache.take().unwrap_or_else(Cache::new),
                    &mut renderer,
                );
                let mut messages = Vec::new();
                let _ = ui.update(
                    events,
                    cursor,
                    &mut renderer,
                    &mut clipboard::Null,
                    &mut messages,
                );
                self.cache = Some(ui.into_cache());

                for input in messages {
                    self.outcomes.push(self.session.handle(input));
                }
            }
        }

        fn at(x: f32, y: f32) -> mouse::Cursor {
            mouse::Cursor::Available(Point::new(x, y))
        }

        fn moved(x: f32, y: f32) -> Event {
            Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(x, y),
            })
        }

        fn pressed() -> Event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        }

        fn released() -> Event {
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        }

        #[test]
        fn press_and_release_in_one_batch_is_a_click() {
            let mut surface = Surface::default();

            surface.deliver(&[pressed(), released()], at(100.0, 100.0));

            assert_eq!(
                surface.outcomes,
                vec![GestureOutcome::Tracking, GestureOutcome::Released]
            );
            assert!(!surface.session.is_active());

            surface.deliver(&[moved(130.0, 100.0)], at(130.0, 100.0));
            assert_eq!(surface.outcomes.len(), 2);
            assert!(!surface.session.is_active());
        }

        #[test]
        fn hover_without_press_reports_nothing() {
            let mut surface = Surface::default();
            surface.deliver(&[moved(50.0, 50.0), moved(250.0, 60.0)], at(250.0, 60.0));
            assert!(surface.outcomes.is_empty());
        }

        #[test]
        fn drag_leaving_bounds_past_threshold_commits() {
            let mut surface = Surface::default();

            surface.deliver(&[pressed()], at(100.0, 150.0));
            surface.deliver(&[moved(40.0, 150.0)], at(40.0, 150.0));
            assert!(surface.session.is_active());

            surface.deliver(&[moved(-5.0, 150.0)], at(-5.0, 150.0));
            surface.deliver(&[released()], at(-5.0, 150.0));

            assert_eq!(
                surface.outcomes,
                vec![
                    GestureOutcome::Tracking,
                    GestureOutcome::Tracking,
                    GestureOutcome::Committed(Direction::Next),
                ]
            );
            assert!(!surface.session.is_active());
        }

        #[test]
        fn short_drag_leaving_bounds_is_dropped() {
            let mut surface = Surface::default();

            surface.deliver(&[pressed(), moved(380.0, 10.0)], at(390.0, 10.0));
            surface.deliver(&[moved(410.0, 10.0)], at(410.0, 10.0));
            surface.deliver(&[released()], at(410.0, 10.0));

            assert_eq!(
                surface.outcomes,
                vec![
                    GestureOutcome::Tracking,
                    GestureOutcome::Tracking,
                    GestureOutcome::Cancelled,
                ]
            );
        }

        #[test]
        fn touch_swipe_in_one_batch_commits() {
            let mut surface = Surface::default();
            let finger = touch::Finger(3);

            surface.deliver(
                &[
                    Event::Touch(touch::Event::FingerPressed {
                        id: finger,
                        position: Point::new(150.0, 150.0),
                    }),
                    Event::Touch(touch::Event::FingerMoved {
                        id: finger,
                        position: Point::new(230.0, 155.0),
                    }),
                    Event::Touch(touch::Event::FingerLifted {
                        id: finger,
                        position: Point::new(230.0, 155.0),
                    }),
                ],
                mouse::Cursor::Unavailable,
            );

            assert_eq!(
                surface.outcomes,
                vec![
                    GestureOutcome::Tracking,
                    GestureOutcome::Tracking,
                    GestureOutcome::Committed(Direction::Previous),
                ]
            );
            assert!(!surface.session.is_active());
        }
    }
}
