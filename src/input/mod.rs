//! Input handling: platform-agnostic event types and the processor that
//! turns them into trackball gestures.

/// Platform-agnostic input events.
pub mod event;
/// Routes pointer and touch events into drag calls.
pub mod processor;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use processor::InputProcessor;
