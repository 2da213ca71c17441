//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which is not available in `no_std`, so
//! they live here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration that popups remain visible on screen.
pub const POPUP_DURATION: Duration = Duration::from_millis(1500);

/// Interval between sensor readings while registered (the usual "normal"
/// sensor delay of mobile platforms, 5 readings per second).
pub const SENSOR_INTERVAL: Duration = Duration::from_millis(200);
