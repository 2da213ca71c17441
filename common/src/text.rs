//! Fixed-capacity formatting of readings.
//!
//! Values are written into `heapless::String` with `core::fmt::Write`, so no
//! allocator is needed. A value too wide for its buffer renders as `--`
//! rather than a half-written number.

use core::fmt::Write;

use heapless::String;

use crate::altitude::AltitudeError;

/// Capacity of a formatted reading.
pub const READING_LEN: usize = 20;

/// Placeholder for a value that cannot be shown.
pub const PLACEHOLDER: &str = "--";

pub type Reading = String<READING_LEN>;

fn placeholder() -> Reading {
    let mut s = Reading::new();
    s.push_str(PLACEHOLDER).ok();
    s
}

fn format_or_placeholder(args: core::fmt::Arguments<'_>) -> Reading {
    let mut s = Reading::new();
    if s.write_fmt(args).is_err() {
        return placeholder();
    }
    s
}

/// `"1013.25 hPa"`. Non-finite pressure renders as `--`.
pub fn format_pressure(pressure_hpa: f32) -> Reading {
    if !pressure_hpa.is_finite() {
        return placeholder();
    }
    format_or_placeholder(format_args!("{pressure_hpa:.2} hPa"))
}

/// `"988.65 m"`, or `--` when the estimate was rejected.
pub fn format_altitude(altitude: Result<f32, AltitudeError>) -> Reading {
    match altitude {
        Ok(m) if m.is_finite() => format_or_placeholder(format_args!("{m:.2} m")),
        _ => placeholder(),
    }
}

/// Intensity as a whole percentage, `"20%"`.
pub fn format_intensity(intensity: f32) -> Reading {
    let pct = (intensity.clamp(0.0, 1.0) * 100.0 + 0.5) as u32;
    format_or_placeholder(format_args!("{pct}%"))
}
