//! Log page: reading counters and the event log.

use core::fmt::Write;

use altimeter_common::PressureMode;
use altimeter_common::colors::BLACK;
use altimeter_common::config::{HEADER_HEIGHT, LOG_FIRST_LINE_Y, LOG_LINE_SPACING};
use altimeter_common::log::EventLog;
use altimeter_common::styles::{LABEL_STYLE_WHITE, LABEL_STYLE_YELLOW, LEFT_ALIGNED};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::widgets::draw_header;

const TITLE: &str = "LOG";
const LEFT_MARGIN: i32 = 8;
const STATS_Y: i32 = HEADER_HEIGHT as i32 + 18;

/// Counters shown above the log.
#[derive(Clone, Copy, Default, Debug)]
pub struct LogStats {
    pub readings_applied: u32,
    pub readings_rejected: u32,
    pub frames_drawn: u32,
    pub frames_skipped: u32,
}

pub fn draw_log_page<D>(
    display: &mut D,
    log: &EventLog,
    stats: &LogStats,
    mode: PressureMode,
    fps: Option<f32>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_header(display, TITLE, mode, fps);

    let mut line: String<48> = String::new();
    let _ = write!(
        line,
        "READINGS {}  REJECTED {}",
        stats.readings_applied, stats.readings_rejected
    );
    Text::with_text_style(&line, Point::new(LEFT_MARGIN, STATS_Y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    line.clear();
    let _ = write!(line, "FRAMES {}  SKIPPED {}", stats.frames_drawn, stats.frames_skipped);
    Text::with_text_style(
        &line,
        Point::new(LEFT_MARGIN, STATS_Y + LOG_LINE_SPACING),
        LABEL_STYLE_WHITE,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    Text::with_text_style(
        "EVENTS",
        Point::new(LEFT_MARGIN, LOG_FIRST_LINE_Y - LOG_LINE_SPACING),
        LABEL_STYLE_YELLOW,
        LEFT_ALIGNED,
    )
    .draw(display)
    .ok();

    let mut y = LOG_FIRST_LINE_Y;
    for entry in log.iter() {
        Text::with_text_style(entry, Point::new(LEFT_MARGIN, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
        y += LOG_LINE_SPACING;
    }
}
