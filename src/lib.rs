// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests assert on exact values and unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

//! Orbit/trackball camera controller: pointer drags in, spin and tilt out.
//!
//! A horizontal drag spins the view about the vertical axis, a vertical drag
//! tilts it about the horizontal axis. Releasing mid-flick leaves the spin
//! coasting under friction until it settles.
//!
//! # Key entry points
//!
//! - [`Trackball`] - the gesture state machine and inertia integrator
//! - [`TrackballOptions`] - configuration (defaults, TOML/JSON overrides)
//! - [`InputProcessor`] - routes pointer/touch [`InputEvent`]s into drags
//! - [`AutoTick`] - ticks the controller from a frame clock
//! - `Viewer` - winit demo window (feature `viewer`)
//!
//! # Architecture
//!
//! The host owns scheduling. Gesture events call
//! [`Trackball::start_drag`], [`Trackball::update_drag`] and
//! [`Trackball::end_drag`]; once per rendered frame the host calls
//! [`Trackball::tick`] (or [`AutoTick::on_frame`]) and reads
//! [`Trackball::matrix`] for drawing.

pub mod error;
pub mod input;
pub mod options;
pub mod trackball;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::TrackballError;
pub use input::{InputEvent, InputProcessor, MouseButton, TouchPhase};
pub use options::TrackballOptions;
pub use trackball::{AutoTick, DragState, Trackball};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
