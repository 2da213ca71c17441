//! Simulated-pressure slider.
//!
//! A horizontal track spanning the simulated range, low pressure (high
//! altitude) on the left. The knob position and the pointer → pressure
//! mapping share the same geometry constants so a drag lands exactly under
//! the cursor.

use core::fmt::Write;

use altimeter_common::altitude::{clamp_simulated_pressure, simulated_bounds};
use altimeter_common::colors::{GRAY, ORANGE, WHITE};
use altimeter_common::config::{
    SLIDER_HIT_MARGIN,
    SLIDER_KNOB_DIAMETER,
    SLIDER_TRACK_HEIGHT,
    SLIDER_WIDTH,
    SLIDER_X,
    SLIDER_Y,
};
use altimeter_common::styles::{CENTERED, LABEL_FONT};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

const TRACK_POS: Point = Point::new(SLIDER_X, SLIDER_Y - (SLIDER_TRACK_HEIGHT / 2) as i32);
const TRACK_SIZE: Size = Size::new(SLIDER_WIDTH, SLIDER_TRACK_HEIGHT);
const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

const KNOB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .fill_color(ORANGE)
    .stroke_color(WHITE)
    .stroke_width(2)
    .build();

/// Baseline of the range labels under the track.
const RANGE_LABEL_Y: i32 = SLIDER_Y + 20;

/// Whether `point` is on (or close enough to) the slider track.
pub fn slider_hit(point: Point) -> bool {
    let left = SLIDER_X - SLIDER_HIT_MARGIN;
    let right = SLIDER_X + SLIDER_WIDTH as i32 + SLIDER_HIT_MARGIN;
    (left..=right).contains(&point.x) && (point.y - SLIDER_Y).abs() <= SLIDER_HIT_MARGIN
}

/// Pressure under screen column `x`, clamped to `[min, max]`.
///
/// The left end of the track is always the lower bound, even for a reversed range.
pub fn slider_pressure_at(
    x: i32,
    min: f32,
    max: f32,
) -> f32 {
    let (lo, hi) = simulated_bounds(min, max);
    let t = ((x - SLIDER_X) as f32 / SLIDER_WIDTH as f32).clamp(0.0, 1.0);
    clamp_simulated_pressure(lo + t * (hi - lo), lo, hi)
}

/// Screen column of the knob center for `pressure`.
pub fn slider_knob_x(
    pressure: f32,
    min: f32,
    max: f32,
) -> i32 {
    let (lo, hi) = simulated_bounds(min, max);
    let span = hi - lo;
    let t = if span > 0.0 {
        ((clamp_simulated_pressure(pressure, lo, hi) - lo) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    SLIDER_X + (t * SLIDER_WIDTH as f32 + 0.5) as i32
}

/// Draw track, knob and range labels.
pub fn draw_slider<D>(
    display: &mut D,
    pressure: f32,
    min: f32,
    max: f32,
    text_color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(TRACK_POS, TRACK_SIZE)
        .into_styled(TRACK_STYLE)
        .draw(display)
        .ok();

    let knob_center = Point::new(slider_knob_x(pressure, min, max), SLIDER_Y);
    Circle::with_center(knob_center, SLIDER_KNOB_DIAMETER)
        .into_styled(KNOB_STYLE)
        .draw(display)
        .ok();

    let (lo, hi) = simulated_bounds(min, max);
    let style = MonoTextStyle::new(LABEL_FONT, text_color);
    let mut label: String<12> = String::new();

    let _ = write!(label, "{lo:.0}");
    Text::with_text_style(&label, Point::new(SLIDER_X, RANGE_LABEL_Y), style, CENTERED)
        .draw(display)
        .ok();

    label.clear();
    let _ = write!(label, "{hi:.0}");
    Text::with_text_style(&label, Point::new(SLIDER_X + SLIDER_WIDTH as i32, RANGE_LABEL_Y), style, CENTERED)
        .draw(display)
        .ok();
}
