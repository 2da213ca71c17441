//! Color constants and the altitude → background mapping.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! ## Background Scheme
//!
//! The altimeter background starts white at (or below) the reference level and
//! fades to pure blue at the saturation altitude:
//!
//! ```text
//! red = green = 1 - intensity,  blue = 1
//! ```

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Text on light backgrounds.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Sea-level background and text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Invalid-reading indicator and popup fill.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). LIVE mode badge.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure blue (0, 0, 31). Background at saturation altitude.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0). Log page highlights.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

// =============================================================================
// Custom Colors
// =============================================================================

/// Orange for the SIM mode badge and the slider knob.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray for the slider track.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Navy for the header bar, stays readable over any background shade.
pub const NAVY: Rgb565 = Rgb565::new(0, 0, 12);

// =============================================================================
// Background Mapping
// =============================================================================

/// Background color for a given altitude intensity.
///
/// `intensity` is clamped to `[0, 1]` (NaN counts as 0) and each channel is
/// clamped again before quantization, so the result is always a valid color
/// even if a caller skips [`compute_intensity`](crate::altitude::compute_intensity).
pub fn altitude_background(intensity: f32) -> Rgb565 {
    let i = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
    let fade = (1.0 - i).clamp(0.0, 1.0);

    let r = quantize(fade, 31);
    let g = quantize(fade, 63);
    Rgb565::new(r, g, 31)
}

/// Scale a `[0, 1]` channel to `0..=max` with rounding.
#[inline]
fn quantize(
    channel: f32,
    max: u8,
) -> u8 {
    let scaled = channel * f32::from(max) + 0.5;
    (scaled as u8).min(max)
}

// =============================================================================
// Text Contrast
// =============================================================================

/// Text color for a given background.
///
/// Uses perceptual luminance (ITU-R BT.601) so it keeps working on the
/// intermediate colors of a fade. WHITE on dark, BLACK on light.
pub fn label_color_for_bg(bg_color: Rgb565) -> Rgb565 {
    if luminance(bg_color) < 128 { WHITE } else { BLACK }
}

/// Perceptual luminance of an Rgb565 color on a 0-255 scale.
///
/// Integer approximation of `0.299*R + 0.587*G + 0.114*B` with channels
/// expanded to 8 bits by replicating their high bits.
pub fn luminance(color: Rgb565) -> u32 {
    let raw = color.into_storage();
    let r5 = u32::from((raw >> 11) & 0x1F);
    let g6 = u32::from((raw >> 5) & 0x3F);
    let b5 = u32::from(raw & 0x1F);

    let r8 = (r5 << 3) | (r5 >> 2);
    let g8 = (g6 << 2) | (g6 >> 4);
    let b8 = (b5 << 3) | (b5 >> 2);

    (r8 * 77 + g8 * 150 + b8 * 29) >> 8
}

// =============================================================================
// Unit Tests
// =============================================================================
