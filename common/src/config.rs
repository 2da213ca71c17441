//! Display and layout configuration constants.
//!
//! Positions are pre-computed at compile time so drawing code does no layout
//! arithmetic per frame.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Altimeter Page Layout
// =============================================================================

/// Baseline of the "PRESSURE" label.
pub const PRESSURE_LABEL_Y: i32 = 50;

/// Baseline of the pressure value.
pub const PRESSURE_VALUE_Y: i32 = 76;

/// Baseline of the "ALTITUDE" label.
pub const ALTITUDE_LABEL_Y: i32 = 104;

/// Baseline of the altitude value (large font).
pub const ALTITUDE_VALUE_Y: i32 = 136;

/// Baseline of the intensity readout under the altitude.
pub const INTENSITY_Y: i32 = 156;

/// Baseline of the key-hint line at the bottom of the screen.
pub const HINT_Y: i32 = (SCREEN_HEIGHT - 6) as i32;

// =============================================================================
// Slider Layout
// =============================================================================

/// Left edge of the slider track.
pub const SLIDER_X: i32 = 30;

/// Vertical center of the slider track.
pub const SLIDER_Y: i32 = 190;

/// Slider track width in pixels.
pub const SLIDER_WIDTH: u32 = SCREEN_WIDTH - 60;

/// Slider track thickness in pixels.
pub const SLIDER_TRACK_HEIGHT: u32 = 4;

/// Diameter of the slider knob.
pub const SLIDER_KNOB_DIAMETER: u32 = 14;

/// Extra pixels above/below the track that still count as a slider hit.
pub const SLIDER_HIT_MARGIN: i32 = 12;

// =============================================================================
// Log Page Layout
// =============================================================================

/// Baseline of the first log line.
pub const LOG_FIRST_LINE_Y: i32 = 100;

/// Vertical distance between log lines.
pub const LOG_LINE_SPACING: i32 = 14;

// Layout sanity: the slider fits on screen and below the readouts.
const _: () = assert!(SLIDER_X as u32 + SLIDER_WIDTH < SCREEN_WIDTH);
const _: () = assert!(INTENSITY_Y < SLIDER_Y - SLIDER_HIT_MARGIN);
const _: () = assert!(SLIDER_Y + SLIDER_HIT_MARGIN < HINT_Y);
