//! Gesture-to-orientation controller.
//!
//! A drag maps horizontal motion to spin (about +Y) and vertical motion to
//! tilt (about +X). On release the spin keeps going under friction until it
//! falls below a rest threshold.
//!
//! ```
//! use glam::Vec2;
//! use trackball::{DragState, Trackball, TrackballOptions};
//!
//! let mut tb = Trackball::new(TrackballOptions {
//!     auto_tick: false,
//!     lock_axes: true,
//!     ..TrackballOptions::default()
//! });
//! tb.start_drag(Vec2::ZERO);
//! tb.update_drag(Vec2::new(10.0, 0.0));
//! assert_eq!(tb.state(), DragState::DraggingSpin);
//! tb.end_drag(Vec2::new(10.0, 0.0));
//! tb.tick(16.0);
//! let view = tb.matrix();
//! # let _ = view;
//! ```

/// The controller: gestures, ticks, and angle/matrix queries.
pub mod controller;
/// Frame-clock wrapper that ticks the controller once per redraw.
pub mod driver;
/// Spin/tilt rotation matrix composition and decomposition.
pub mod rotation;
/// Gesture states and axis classification.
pub mod state;

pub use controller::Trackball;
pub use driver::AutoTick;
pub use rotation::{angles_from_matrix, rotation_matrix, rotation_matrix3};
pub use state::{DragState, LiveAxes};
