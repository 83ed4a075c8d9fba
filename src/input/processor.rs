//! Converts raw platform events into trackball drag calls.
//!
//! The `InputProcessor` owns the transient pointer state (cursor position,
//! which button or contact owns the drag, how many contacts are down) and is
//! the only thing sitting between raw window events and the controller's
//! gesture methods.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, TouchPhase};
use crate::trackball::Trackball;

/// What currently owns the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grab {
    /// Nothing held.
    None,
    /// Primary mouse button held.
    Mouse,
    /// Primary touch contact held.
    Touch(u64),
}

/// Forwards pointer and touch input to a [`Trackball`].
///
/// Only the left mouse button and the primary touch contact (the first one
/// down while nothing else is held) drive the controller. Other buttons,
/// secondary contacts, and moves with nothing held are ignored.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(event) = InputEvent::from_window_event(&window_event) {
///     input_processor.handle_event(&mut trackball, event);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Vec2,
    /// Which input owns the active drag.
    grab: Grab,
    /// Number of touch contacts currently down.
    touches_down: usize,
}

impl InputProcessor {
    /// Create a processor with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            grab: Grab::None,
            touches_down: 0,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether a button or contact currently owns a drag.
    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        self.grab != Grab::None
    }

    /// Forget every held button and contact, ending any active drag at the
    /// last known position.
    ///
    /// Call this when the window loses focus, since the matching release
    /// will never arrive.
    pub fn cancel(&mut self, trackball: &mut Trackball) {
        let grab = std::mem::replace(&mut self.grab, Grab::None);
        self.touches_down = 0;
        if grab != Grab::None {
            log::debug!("cancelling {grab:?} drag");
            trackball.end_drag(self.cursor);
        }
    }

    /// Process one raw event. Returns `true` if it drove the trackball.
    pub fn handle_event(
        &mut self,
        trackball: &mut Trackball,
        event: InputEvent,
    ) -> bool {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                if self.grab == Grab::Mouse {
                    trackball.update_drag(self.cursor);
                    return true;
                }
                false
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(trackball, button, pressed)
            }
            InputEvent::Touch { id, phase, x, y } => {
                self.handle_touch(trackball, id, phase, Vec2::new(x, y))
            }
        }
    }

    fn handle_mouse_button(
        &mut self,
        trackball: &mut Trackball,
        button: MouseButton,
        pressed: bool,
    ) -> bool {
        if button != MouseButton::Left {
            return false;
        }

        match (pressed, self.grab) {
            (true, Grab::None) => {
                self.grab = Grab::Mouse;
                trackball.start_drag(self.cursor);
                true
            }
            (false, Grab::Mouse) => {
                self.grab = Grab::None;
                trackball.end_drag(self.cursor);
                true
            }
            _ => false,
        }
    }

    fn handle_touch(
        &mut self,
        trackball: &mut Trackball,
        id: u64,
        phase: TouchPhase,
        position: Vec2,
    ) -> bool {
        match phase {
            TouchPhase::Started => {
                self.touches_down += 1;
                if self.touches_down == 1 && self.grab == Grab::None {
                    self.grab = Grab::Touch(id);
                    trackball.start_drag(position);
                    return true;
                }
                log::trace!("ignoring secondary touch {id}");
                false
            }
            TouchPhase::Moved => {
                if self.grab == Grab::Touch(id) {
                    trackball.update_drag(position);
                    return true;
                }
                false
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches_down = self.touches_down.saturating_sub(1);
                if self.grab == Grab::Touch(id) {
                    self.grab = Grab::None;
                    trackball.end_drag(position);
                    return true;
                }
                false
            }
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::TrackballOptions;
    use crate::trackball::DragState;

    struct Harness {
        tb: Trackball,
        input: InputProcessor,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                tb: Trackball::new(TrackballOptions {
                    auto_tick: false,
                    start_spin: 0.0,
                    ..TrackballOptions::default()
                }),
                input: InputProcessor::new(),
            }
        }

        fn send(&mut self, event: InputEvent) -> bool {
            self.input.handle_event(&mut self.tb, event)
        }
    }

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn left(pressed: bool) -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        }
    }

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> InputEvent {
        InputEvent::Touch { id, phase, x, y }
    }

    #[test]
    fn mouse_drag_drives_the_trackball() {
        let mut h = Harness::new();

        assert!(!h.send(cursor(10.0, 10.0)));
        assert!(h.send(left(true)));
        assert_eq!(h.tb.state(), DragState::DraggingInit);

        assert!(h.send(cursor(30.0, 10.0)));
        assert!((h.tb.angles().0 - 0.2).abs() < 1e-5);

        assert!(h.send(left(false)));
        assert!(!h.tb.is_dragging());
        assert!(!h.input.is_grabbing());
    }

    #[test]
    fn hover_without_button_is_ignored() {
        let mut h = Harness::new();
        assert!(!h.send(cursor(50.0, 50.0)));
        assert!(!h.send(cursor(90.0, 10.0)));
        assert_eq!(h.tb.angles(), (0.0, 0.25));
        assert_eq!(h.input.cursor(), Vec2::new(90.0, 10.0));
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        let mut h = Harness::new();
        assert!(!h.send(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        }));
        assert_eq!(h.tb.state(), DragState::Resting);
        // Release without a press does nothing either.
        assert!(!h.send(left(false)));
    }

    #[test]
    fn only_the_primary_touch_drags() {
        let mut h = Harness::new();

        assert!(h.send(touch(1, TouchPhase::Started, 0.0, 0.0)));
        assert!(!h.send(touch(2, TouchPhase::Started, 50.0, 50.0)));
        assert!(!h.send(touch(2, TouchPhase::Moved, 90.0, 90.0)));
        assert_eq!(h.tb.angles(), (0.0, 0.25));

        assert!(h.send(touch(1, TouchPhase::Moved, 0.0, 10.0)));
        assert!((h.tb.angles().1 - 0.35).abs() < 1e-5);

        assert!(!h.send(touch(2, TouchPhase::Ended, 90.0, 90.0)));
        assert!(h.tb.is_dragging());
        assert!(h.send(touch(1, TouchPhase::Ended, 0.0, 10.0)));
        assert!(!h.tb.is_dragging());
    }

    #[test]
    fn touch_that_starts_second_never_becomes_primary() {
        let mut h = Harness::new();

        assert!(h.send(touch(1, TouchPhase::Started, 0.0, 0.0)));
        assert!(!h.send(touch(2, TouchPhase::Started, 5.0, 5.0)));
        assert!(h.send(touch(1, TouchPhase::Cancelled, 0.0, 0.0)));
        // Contact 2 is still down, so a new contact is not primary either.
        assert!(!h.send(touch(3, TouchPhase::Started, 9.0, 9.0)));
        assert!(!h.send(touch(2, TouchPhase::Ended, 5.0, 5.0)));
        assert!(!h.send(touch(3, TouchPhase::Ended, 9.0, 9.0)));

        assert!(h.send(touch(4, TouchPhase::Started, 1.0, 1.0)));
    }

    #[test]
    fn cancel_ends_the_active_drag() {
        let mut h = Harness::new();
        assert!(!h.send(cursor(0.0, 0.0)));
        assert!(h.send(left(true)));
        assert!(h.send(cursor(20.0, 0.0)));

        h.input.cancel(&mut h.tb);
        assert!(!h.input.is_grabbing());
        assert!(!h.tb.is_dragging());
        assert!((h.tb.committed_angles().0 - 0.2).abs() < 1e-5);

        // The stale release and later moves no longer reach the controller.
        assert!(!h.send(left(false)));
        assert!(!h.send(cursor(80.0, 0.0)));
        assert!((h.tb.angles().0 - 0.2).abs() < 1e-5);

        // Nothing is held, so a fresh press starts a new drag.
        assert!(h.send(left(true)));
        assert!(h.tb.is_dragging());
    }

    #[test]
    fn cancel_forgets_held_touches() {
        let mut h = Harness::new();
        assert!(h.send(touch(1, TouchPhase::Started, 0.0, 0.0)));
        assert!(!h.send(touch(2, TouchPhase::Started, 5.0, 5.0)));

        h.input.cancel(&mut h.tb);
        assert!(!h.tb.is_dragging());

        assert!(h.send(touch(3, TouchPhase::Started, 1.0, 1.0)));
        assert!(h.tb.is_dragging());

        // Without a grab, cancel leaves the controller alone.
        let mut idle = Harness::new();
        idle.input.cancel(&mut idle.tb);
        assert_eq!(idle.tb.state(), DragState::Resting);
    }

    #[test]
    fn mouse_press_during_touch_is_ignored() {
        let mut h = Harness::new();
        assert!(h.send(touch(7, TouchPhase::Started, 0.0, 0.0)));
        assert!(!h.send(left(true)));
        assert!(!h.send(cursor(40.0, 0.0)));
        assert_eq!(h.tb.angles(), (0.0, 0.25));
    }
}
