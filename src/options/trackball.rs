use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Trackball")]
#[serde(default)]
/// Gesture sensitivity, inertia and scheduling parameters.
///
/// Every field has a default, so a partial TOML or JSON document only has to
/// name the fields it overrides.
pub struct TrackballOptions {
    /// Tilt the controller starts at and returns to on reset (radians).
    #[schemars(title = "Home Tilt", extend("step" = 0.01))]
    pub home_tilt: f32,
    /// Initial spin velocity (radians per millisecond). Zero starts at rest.
    #[schemars(title = "Start Spin", extend("step" = 0.001))]
    pub start_spin: f32,
    /// Drive `tick` from the frame clock instead of the host.
    #[schemars(skip)]
    pub auto_tick: bool,
    /// Fraction of spin velocity removed per tick (0 coasts forever, 1 stops
    /// dead on release).
    #[schemars(title = "Friction", range(min = 0.0, max = 1.0), extend("step" = 0.005))]
    pub friction: f32,
    /// Whether vertical drags may change tilt.
    #[schemars(title = "Allow Tilt")]
    pub allow_tilt: bool,
    /// Whether horizontal drags may change spin.
    #[schemars(title = "Allow Spin")]
    pub allow_spin: bool,
    /// Pixels a locked drag must travel before its axis is decided.
    #[schemars(title = "Axis Lock Threshold", range(min = 0.0, max = 20.0), extend("step" = 1.0))]
    pub epsilon: f32,
    /// Horizontal and vertical drag sensitivity (radians per pixel).
    #[schemars(skip)]
    pub radians_per_pixel: [f32; 2],
    /// Commit each drag to a single axis instead of blending spin and tilt.
    #[schemars(title = "Lock Axes")]
    pub lock_axes: bool,
    /// Keep integrating inertia while the pointer is held but stationary, to
    /// hide the release lag of trackpads.
    #[schemars(title = "Trackpad Compensation")]
    pub trackpad: bool,
}

impl Default for TrackballOptions {
    fn default() -> Self {
        Self {
            home_tilt: 0.25,
            start_spin: 0.02,
            auto_tick: true,
            friction: 0.125,
            allow_tilt: true,
            allow_spin: true,
            epsilon: 3.0,
            radians_per_pixel: [0.01, 0.01],
            lock_axes: false,
            trackpad: true,
        }
    }
}

impl TrackballOptions {
    /// Sensitivity as a vector (x drives spin, y drives tilt).
    #[must_use]
    pub fn radians_per_pixel(&self) -> Vec2 {
        Vec2::from_array(self.radians_per_pixel)
    }

    /// Copy with `friction` clamped to `[0, 1]` and `epsilon` to `>= 0`.
    ///
    /// Out-of-range values are reported through `log::warn!`. Non-finite
    /// values fall back to the defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut out = self.clone();

        if !out.friction.is_finite() {
            log::warn!(
                "friction {} is not finite, using {}",
                out.friction,
                defaults.friction
            );
            out.friction = defaults.friction;
        } else if !(0.0..=1.0).contains(&out.friction) {
            let clamped = out.friction.clamp(0.0, 1.0);
            log::warn!(
                "friction {} out of [0, 1], clamped to {clamped}",
                out.friction
            );
            out.friction = clamped;
        }

        if !out.epsilon.is_finite() {
            log::warn!(
                "epsilon {} is not finite, using {}",
                out.epsilon,
                defaults.epsilon
            );
            out.epsilon = defaults.epsilon;
        } else if out.epsilon < 0.0 {
            log::warn!("epsilon {} is negative, clamped to 0", out.epsilon);
            out.epsilon = 0.0;
        }

        out
    }
}
