//! Altimeter page.
//!
//! ```text
//! +-----------------------------------+
//! | LIVE        ALTIMETER      50 FPS |
//! |             PRESSURE              |
//! |            950.00 hPa             |
//! |             ALTITUDE              |
//! |            540.12 m               |
//! |          DARKNESS 11%             |
//! |   800 ----------o---------- 1050  |   (simulated mode only)
//! | SPACE: LIVE  UP/DN PGUP/PGDN  R   |
//! +-----------------------------------+
//! ```
//!
//! The whole page is filled with the altitude background, so text colors
//! follow its luminance.

use core::fmt::Write;

use altimeter_common::altitude::{AltitudeError, AltitudeResult};
use altimeter_common::colors::{RED, label_color_for_bg};
use altimeter_common::config::{
    ALTITUDE_LABEL_Y,
    ALTITUDE_VALUE_Y,
    CENTER_X,
    HINT_Y,
    INTENSITY_Y,
    PRESSURE_LABEL_Y,
    PRESSURE_VALUE_Y,
};
use altimeter_common::styles::{ALTITUDE_FONT, CENTERED, LABEL_FONT, PRESSURE_FONT};
use altimeter_common::text::{format_altitude, format_intensity, format_pressure};
use altimeter_common::{AltimeterConfig, PressureMode};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::widgets::{draw_header, draw_slider};

const TITLE: &str = "ALTIMETER";

const HINT_LIVE: &str = "SPACE: SIMULATE   TAB: LOG";
const HINT_SIMULATED: &str = "SPACE: LIVE  UP/DN PGUP/PGDN  R: RESET";
const HINT_NO_SENSOR: &str = "NO PRESSURE SENSOR  SPACE: SIMULATE";

/// Everything the altimeter page shows for one frame.
pub struct AltimeterView<'a> {
    pub config: &'a AltimeterConfig,
    pub mode: PressureMode,
    pub pressure_hpa: f32,
    pub estimate: Result<AltitudeResult, AltitudeError>,
    pub background: Rgb565,
    pub sensor_available: bool,
}

impl AltimeterView<'_> {
    fn hint(&self) -> &'static str {
        match self.mode {
            PressureMode::Simulated => HINT_SIMULATED,
            PressureMode::Live if !self.sensor_available => HINT_NO_SENSOR,
            PressureMode::Live => HINT_LIVE,
        }
    }
}

pub fn draw_altimeter_page<D>(
    display: &mut D,
    view: &AltimeterView<'_>,
    fps: Option<f32>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(view.background).ok();
    draw_header(display, TITLE, view.mode, fps);

    let text_color = label_color_for_bg(view.background);
    let label_style = MonoTextStyle::new(LABEL_FONT, text_color);

    // Pressure
    Text::with_text_style("PRESSURE", Point::new(CENTER_X, PRESSURE_LABEL_Y), label_style, CENTERED)
        .draw(display)
        .ok();
    let pressure = format_pressure(view.pressure_hpa);
    Text::with_text_style(
        &pressure,
        Point::new(CENTER_X, PRESSURE_VALUE_Y),
        MonoTextStyle::new(PRESSURE_FONT, text_color),
        CENTERED,
    )
    .draw(display)
    .ok();

    // Altitude
    Text::with_text_style("ALTITUDE", Point::new(CENTER_X, ALTITUDE_LABEL_Y), label_style, CENTERED)
        .draw(display)
        .ok();
    let altitude = format_altitude(view.estimate.map(|e| e.altitude_m));
    let altitude_color = if view.estimate.is_ok() { text_color } else { RED };
    Text::with_text_style(
        &altitude,
        Point::new(CENTER_X, ALTITUDE_VALUE_Y),
        MonoTextStyle::new(ALTITUDE_FONT, altitude_color),
        CENTERED,
    )
    .draw(display)
    .ok();

    // Intensity, or the rejection reason
    let mut detail: String<32> = String::new();
    match view.estimate {
        Ok(result) => {
            let _ = write!(detail, "DARKNESS {}", format_intensity(result.intensity));
        }
        Err(err) => {
            let _ = write!(detail, "{err}");
        }
    }
    Text::with_text_style(&detail, Point::new(CENTER_X, INTENSITY_Y), label_style, CENTERED)
        .draw(display)
        .ok();

    if view.mode == PressureMode::Simulated {
        draw_slider(display, view.pressure_hpa, view.config.sim_min_hpa, view.config.sim_max_hpa, text_color);
    }

    Text::with_text_style(view.hint(), Point::new(CENTER_X, HINT_Y), label_style, CENTERED)
        .draw(display)
        .ok();
}
