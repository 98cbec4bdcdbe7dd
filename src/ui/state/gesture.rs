// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state management
//!
//! Tracks one press-drag-release interaction on a gallery surface and turns it
//! into a navigation decision. Mouse drags and touch swipes feed the same
//! session; the surface decides what a decision means.

use crate::domain::gallery::{Direction, DragDamping, SwipeThreshold};
use iced::Point;

/// Normalized pointer input for a gesture session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// Press or touch-down at a position.
    Start(Point),
    /// Pointer or finger moved to a position.
    Move(Point),
    /// Release or touch-up.
    End,
    /// Pointer left the tracked bounds or the window.
    Leave,
    /// The touch was lost by the platform.
    Cancel,
}

/// What a single input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Input arrived with no session to act on.
    Ignored,
    /// A session is in progress.
    Tracking,
    /// Released past the threshold.
    Committed(Direction),
    /// Released within the threshold: a plain click or tap.
    Released,
    /// Aborted without a decision.
    Cancelled,
}

/// Manages a horizontal swipe interaction.
///
/// The session is `Idle` until a press, `Dragging` until the matching release
/// or cancel, then `Idle` again with all tracking state cleared.
#[derive(Debug, Clone, Default)]
pub struct GestureSession {
    /// Where the current press started; `None` while idle.
    origin: Option<Point>,

    /// Signed horizontal distance from the origin.
    offset: f32,

    threshold: SwipeThreshold,
    damping: DragDamping,
}

impl GestureSession {
    #[must_use]
    pub fn new(threshold: SwipeThreshold, damping: DragDamping) -> Self {
        Self {
            origin: None,
            offset: 0.0,
            threshold,
            damping,
        }
    }

    /// Dispatches a normalized input to the matching transition.
    pub fn handle(&mut self, input: GestureInput) -> GestureOutcome {
        match input {
            GestureInput::Start(position) => {
                self.start(position);
                GestureOutcome::Tracking
            }
            GestureInput::Move(position) => {
                if self.update(position) {
                    GestureOutcome::Tracking
                } else {
                    GestureOutcome::Ignored
                }
            }
            GestureInput::End => self.end(),
            GestureInput::Leave => self.leave(),
            GestureInput::Cancel => self.cancel(),
        }
    }

    /// Begins a fresh session, discarding anything left from a previous one.
    pub fn start(&mut self, position: Point) {
        self.origin = Some(position);
        self.offset = 0.0;
    }

    /// Tracks pointer movement. Returns `false` when no session is active.
    pub fn update(&mut self, position: Point) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        self.offset = position.x - origin.x;
        true
    }

    /// Finishes the session and reports the decision.
    pub fn end(&mut self) -> GestureOutcome {
        if self.origin.is_none() {
            return GestureOutcome::Ignored;
        }

        let offset = self.offset;
        self.reset();

        if self.threshold.is_exceeded_by(offset) {
            GestureOutcome::Committed(Direction::from_offset(offset))
        } else {
            GestureOutcome::Released
        }
    }

    /// Finishes the session because the pointer left the surface.
    ///
    /// A drag past the threshold still commits; anything shorter is dropped
    /// rather than treated as a click.
    pub fn leave(&mut self) -> GestureOutcome {
        match self.end() {
            GestureOutcome::Released => GestureOutcome::Cancelled,
            outcome => outcome,
        }
    }

    /// Aborts the session without a decision.
    pub fn cancel(&mut self) -> GestureOutcome {
        if self.origin.is_none() {
            return GestureOutcome::Ignored;
        }
        self.reset();
        GestureOutcome::Cancelled
    }

    fn reset(&mut self) {
        self.origin = None;
        self.offset = 0.0;
    }

    /// Whether a press is currently being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Horizontal displacement to draw as drag feedback; zero while idle.
    #[must_use]
    pub fn displacement(&self) -> f32 {
        if self.is_active() {
            self.damping.apply(self.offset)
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn dragged(from: f32, to: f32) -> GestureSession {
        let mut session = GestureSession::default();
        session.start(Point::new(from, 200.0));
        session.update(Point::new(to, 200.0));
        session
    }

    #[test]
    fn default_session_is_idle() {
        let session = GestureSession::default();
        assert!(!session.is_active());
        assert!(session.origin().is_none());
        assert_abs_diff_eq!(session.offset(), 0.0);
    }

    #[test]
    fn start_records_origin_and_resets_offset() {
        let mut session = dragged(100.0, 20.0);
        session.start(Point::new(300.0, 10.0));

        assert!(session.is_active());
        assert_eq!(session.origin(), Some(Point::new(300.0, 10.0)));
        assert_abs_diff_eq!(session.offset(), 0.0);
    }

    #[test]
    fn move_tracks_horizontal_offset_only() {
        let mut session = GestureSession::default();
        session.start(Point::new(100.0, 100.0));
        session.update(Point::new(130.0, 400.0));
        assert_abs_diff_eq!(session.offset(), 30.0);
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut session = GestureSession::default();
        assert_eq!(
            session.handle(GestureInput::Move(Point::new(10.0, 0.0))),
            GestureOutcome::Ignored
        );
        assert_abs_diff_eq!(session.offset(), 0.0);
    }

    #[test]
    fn drag_left_past_threshold_commits_next() {
        let mut session = dragged(100.0, 40.0);
        assert_eq!(session.end(), GestureOutcome::Committed(Direction::Next));
        assert!(!session.is_active());
        assert_abs_diff_eq!(session.offset(), 0.0);
    }

    #[test]
    fn drag_right_past_threshold_commits_previous() {
        let mut session = dragged(100.0, 151.0);
        assert_eq!(
            session.end(),
            GestureOutcome::Committed(Direction::Previous)
        );
    }

    #[test]
    fn drag_exactly_at_threshold_does_not_commit() {
        let mut session = dragged(100.0, 50.0);
        assert_eq!(session.end(), GestureOutcome::Released);

        let mut session = dragged(100.0, 150.0);
        assert_eq!(session.end(), GestureOutcome::Released);
    }

    #[test]
    fn second_end_is_ignored() {
        let mut session = dragged(100.0, 40.0);
        assert_eq!(session.end(), GestureOutcome::Committed(Direction::Next));
        assert_eq!(session.end(), GestureOutcome::Ignored);
    }

    #[test]
    fn cancel_mid_drag_resets_without_decision() {
        let mut session = dragged(100.0, -300.0);
        assert_eq!(session.cancel(), GestureOutcome::Cancelled);
        assert!(!session.is_active());
        assert_abs_diff_eq!(session.offset(), 0.0);
        assert_abs_diff_eq!(session.displacement(), 0.0);
        assert_eq!(session.end(), GestureOutcome::Ignored);
    }

    #[test]
    fn cancel_without_session_is_ignored() {
        let mut session = GestureSession::default();
        assert_eq!(session.cancel(), GestureOutcome::Ignored);
    }

    #[test]
    fn leaving_past_threshold_still_commits() {
        let mut session = dragged(100.0, 40.0);
        assert_eq!(
            session.handle(GestureInput::Leave),
            GestureOutcome::Committed(Direction::Next)
        );
        assert!(!session.is_active());
        assert_eq!(session.handle(GestureInput::End), GestureOutcome::Ignored);
    }

    #[test]
    fn leaving_within_threshold_is_not_a_tap() {
        let mut session = dragged(100.0, 90.0);
        assert_eq!(session.leave(), GestureOutcome::Cancelled);
        assert!(!session.is_active());
        assert_eq!(session.leave(), GestureOutcome::Ignored);
    }

    #[test]
    fn displacement_is_damped_while_dragging() {
        let session = dragged(100.0, 40.0);
        assert_abs_diff_eq!(session.displacement(), -6.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn displacement_resets_after_commit() {
        let mut session = dragged(100.0, 40.0);
        session.end();
        assert_abs_diff_eq!(session.displacement(), 0.0);
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut session = GestureSession::new(SwipeThreshold::new(100.0), DragDamping::default());
        session.start(Point::new(0.0, 0.0));
        session.update(Point::new(-80.0, 0.0));
        assert_eq!(session.end(), GestureOutcome::Released);
        assert_abs_diff_eq!(session.threshold().value(), 100.0);
    }

    #[test]
    fn handle_routes_full_sequence() {
        let mut session = GestureSession::default();
        assert_eq!(
            session.handle(GestureInput::Start(Point::new(0.0, 0.0))),
            GestureOutcome::Tracking
        );
        assert_eq!(
            session.handle(GestureInput::Move(Point::new(70.0, 5.0))),
            GestureOutcome::Tracking
        );
        assert_eq!(
            session.handle(GestureInput::End),
            GestureOutcome::Committed(Direction::Previous)
        );
        assert_eq!(session.handle(GestureInput::Cancel), GestureOutcome::Ignored);
    }
}
