use std::f32::consts::TAU;

use glam::{Mat3, Mat4, Vec2};

use super::rotation::{rotation_matrix, rotation_matrix3};
use super::state::{classify_drag, DragState};
use crate::options::TrackballOptions;

/// Scale applied to the last-sample angle difference to get the throw speed.
const INITIAL_INERTIA: f32 = 0.125;
/// Spin velocity below which coasting is considered finished.
const REST_SPEED: f32 = 1e-4;

/// Drag-to-orbit controller with spin inertia.
///
/// Gesture calls ([`start_drag`](Self::start_drag),
/// [`update_drag`](Self::update_drag), [`end_drag`](Self::end_drag)) and
/// [`tick`](Self::tick) are expected from a single owner, serially, once per
/// event and once per frame respectively.
///
/// Committed angles only change on release or inside `tick`; while a drag is
/// live, [`angles`](Self::angles) overlays the drag displacement on top of
/// them.
#[derive(Debug, Clone)]
pub struct Trackball {
    options: TrackballOptions,
    state: DragState,

    start_position: Vec2,
    current_position: Vec2,
    previous_position: Vec2,
    /// Position two ticks ago, for stationary-pointer detection.
    previous2_position: Vec2,

    current_spin: f32,
    current_tilt: f32,
    inertia_speed: f32,
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new(TrackballOptions::default())
    }
}

impl Trackball {
    /// Create a controller at its home orientation.
    ///
    /// `options` pass through [`TrackballOptions::sanitized`] first. The
    /// controller starts coasting at `start_spin` when that is nonzero and
    /// spin is allowed, otherwise at rest.
    #[must_use]
    pub fn new(options: TrackballOptions) -> Self {
        let options = options.sanitized();
        let (state, inertia_speed) = initial_motion(&options);

        Self {
            state,
            start_position: Vec2::ZERO,
            current_position: Vec2::ZERO,
            previous_position: Vec2::ZERO,
            previous2_position: Vec2::ZERO,
            current_spin: 0.0,
            current_tilt: options.home_tilt,
            inertia_speed,
            options,
        }
    }

    /// Return to the home tilt with zero spin, dropping any drag in progress.
    pub fn reset(&mut self) {
        let (state, inertia_speed) = initial_motion(&self.options);
        log::debug!("trackball reset ({:?} -> {state:?})", self.state);

        self.state = state;
        self.inertia_speed = inertia_speed;
        self.current_spin = 0.0;
        self.current_tilt = self.options.home_tilt;
        self.start_position = self.current_position;
        self.previous_position = self.current_position;
        self.previous2_position = self.current_position;
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Configuration this controller runs with (after sanitizing).
    #[must_use]
    pub fn options(&self) -> &TrackballOptions {
        &self.options
    }

    /// Current gesture state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a pointer is currently held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Current spin velocity (radians per time unit).
    #[must_use]
    pub fn inertia_speed(&self) -> f32 {
        self.inertia_speed
    }

    /// Committed `(spin, tilt)`, without the live drag contribution.
    ///
    /// Committed spin is kept in `[0, TAU)` so long coasts don't eat into
    /// `f32` precision.
    #[must_use]
    pub fn committed_angles(&self) -> (f32, f32) {
        (self.current_spin, self.current_tilt)
    }

    /// Displayed `(spin, tilt)` in radians, including any live drag.
    #[must_use]
    pub fn angles(&self) -> (f32, f32) {
        self.angles_at(self.current_position)
    }

    /// 4x4 rotation for the displayed angles (`R_tilt * R_spin`).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let (spin, tilt) = self.angles();
        rotation_matrix(spin, tilt)
    }

    /// 3x3 rotation for the displayed angles (`R_tilt * R_spin`).
    #[must_use]
    pub fn matrix3(&self) -> Mat3 {
        let (spin, tilt) = self.angles();
        rotation_matrix3(spin, tilt)
    }

    /// Angles the controller would display with the pointer at `position`.
    fn angles_at(&self, position: Vec2) -> (f32, f32) {
        let axes = self
            .state
            .live_axes(self.options.lock_axes)
            .gated(self.options.allow_spin, self.options.allow_tilt);
        let delta =
            (position - self.start_position) * self.options.radians_per_pixel();

        let spin = if axes.spin { delta.x } else { 0.0 };
        let tilt = if axes.tilt { delta.y } else { 0.0 };
        (self.current_spin + spin, self.current_tilt + tilt)
    }

    // ── Gestures ─────────────────────────────────────────────────────────

    /// Pointer or primary contact went down at `position`.
    ///
    /// Grabbing stops any coasting. A second start while already dragging
    /// commits the drag so far and restarts from `position`.
    pub fn start_drag(&mut self, position: Vec2) {
        match self.state {
            DragState::Resting | DragState::CoastingSpin => {}
            DragState::DraggingInit
            | DragState::DraggingSpin
            | DragState::DraggingTilt => self.commit(),
        }

        log::debug!("drag start at {position} (was {:?})", self.state);
        self.state = DragState::DraggingInit;
        self.inertia_speed = 0.0;
        self.start_position = position;
        self.current_position = position;
        self.previous_position = position;
        self.previous2_position = position;
    }

    /// Pointer moved to `position` while held. Ignored when no drag is live.
    pub fn update_drag(&mut self, position: Vec2) {
        if !self.state.is_dragging() {
            log::trace!("drag update ignored in {:?}", self.state);
            return;
        }

        self.current_position = position;
        self.classify();
        self.inertia_speed = self.release_velocity();
    }

    /// Pointer released at `position`.
    ///
    /// Commits the drag into the stored angles and starts coasting with the
    /// velocity of the last movement sample. With `friction == 1` the
    /// controller goes straight to rest. Ignored when no drag is live.
    pub fn end_drag(&mut self, position: Vec2) {
        if !self.state.is_dragging() {
            log::trace!("drag end ignored in {:?}", self.state);
            return;
        }

        self.current_position = position;
        self.classify();

        // A release that did not move since the last tick keeps the speed the
        // trackpad compensation has been carrying.
        let stationary = self.current_position == self.previous_position;
        let velocity = if stationary && self.options.trackpad {
            self.inertia_speed
        } else {
            self.release_velocity()
        };

        self.commit();

        if self.options.friction >= 1.0 {
            self.inertia_speed = 0.0;
            self.state = DragState::Resting;
        } else {
            self.inertia_speed = velocity;
            self.state = DragState::CoastingSpin;
        }
        log::debug!(
            "drag end at {position} -> {:?} (speed {})",
            self.state,
            self.inertia_speed
        );
    }

    /// Fold the live drag into the committed angles and restart the drag
    /// origin at the current position.
    fn commit(&mut self) {
        let (spin, tilt) = self.angles();
        self.current_spin = spin.rem_euclid(TAU);
        self.current_tilt = tilt;
        self.start_position = self.current_position;
    }

    /// Decide the axis of an undecided locked drag, if it has travelled far
    /// enough.
    fn classify(&mut self) {
        if self.state != DragState::DraggingInit || !self.options.lock_axes {
            return;
        }
        if let Some(locked) = classify_drag(
            self.current_position - self.start_position,
            self.options.epsilon,
            self.options.allow_spin,
            self.options.allow_tilt,
        ) {
            log::debug!("drag locked to {locked:?}");
            self.state = locked;
        }
    }

    /// One-sample finite difference of the displayed spin since the last
    /// tick. Only the newest movement counts, so a late flick sets the throw.
    fn release_velocity(&self) -> f32 {
        let (now, _) = self.angles_at(self.current_position);
        let (before, _) = self.angles_at(self.previous_position);
        INITIAL_INERTIA * (now - before)
    }

    // ── Time ─────────────────────────────────────────────────────────────

    /// Advance inertia by `dt` time units and shift the position history.
    ///
    /// `dt` shares its unit with `start_spin` (milliseconds by default). A
    /// non-positive or NaN `dt` leaves every angle and the velocity as they
    /// are.
    pub fn tick(&mut self, dt: f32) {
        if dt > 0.0 {
            self.advance(dt);
        }

        self.previous2_position = self.previous_position;
        self.previous_position = self.current_position;
    }

    fn advance(&mut self, dt: f32) {
        match self.state {
            DragState::Resting | DragState::DraggingTilt => {}
            DragState::CoastingSpin => {
                self.integrate(dt);
                if self.inertia_speed.abs() < REST_SPEED {
                    log::debug!(
                        "coasting finished at spin {}",
                        self.current_spin
                    );
                    self.inertia_speed = 0.0;
                    self.state = DragState::Resting;
                }
            }
            DragState::DraggingInit | DragState::DraggingSpin => {
                if self.options.trackpad && self.is_stationary() {
                    self.integrate(dt);
                }
            }
        }
    }

    /// Apply the current speed to spin, then friction to the speed.
    fn integrate(&mut self, dt: f32) {
        self.current_spin =
            (self.current_spin + self.inertia_speed * dt).rem_euclid(TAU);
        self.inertia_speed *= 1.0 - self.options.friction;
        log::trace!(
            "spin {} speed {} ({:?})",
            self.current_spin,
            self.inertia_speed,
            self.state
        );
    }

    fn is_stationary(&self) -> bool {
        self.current_position == self.previous_position
            && self.previous_position == self.previous2_position
    }
}

fn initial_motion(options: &TrackballOptions) -> (DragState, f32) {
    if options.allow_spin && options.start_spin != 0.0 {
        (DragState::CoastingSpin, options.start_spin)
    } else {
        (DragState::Resting, 0.0)
    }
}
