//! Shared utilities.

/// Frame clock with capped per-frame deltas and smoothed FPS.
pub mod frame_timing;
