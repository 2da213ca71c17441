//! Header bar: mode badge, title and FPS counter.

use core::fmt::Write;

use altimeter_common::PressureMode;
use altimeter_common::colors::{GREEN, NAVY, ORANGE};
use altimeter_common::config::{HEADER_HEIGHT, SCREEN_WIDTH};
use altimeter_common::styles::{CENTERED, LABEL_STYLE_BLACK, LABEL_STYLE_WHITE, LEFT_ALIGNED, RIGHT_ALIGNED, TITLE_STYLE_WHITE};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

const HEADER_RECT_POS: Point = Point::new(0, 0);
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(NAVY);

const HEADER_TITLE_POS: Point = Point::new((SCREEN_WIDTH / 2) as i32, 19);
const HEADER_FPS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);

const BADGE_POS: Point = Point::new(4, 5);
const BADGE_SIZE: Size = Size::new(34, 16);
const BADGE_TEXT_POS: Point = Point::new(9, 16);

/// Badge fill: green while following the sensor, orange while simulating.
const fn badge_color(mode: PressureMode) -> Rgb565 {
    match mode {
        PressureMode::Live => GREEN,
        PressureMode::Simulated => ORANGE,
    }
}

/// Draw the header bar. `fps` is shown right-aligned when `Some`.
pub fn draw_header<D>(
    display: &mut D,
    title: &str,
    mode: PressureMode,
    fps: Option<f32>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    Rectangle::new(BADGE_POS, BADGE_SIZE)
        .into_styled(PrimitiveStyle::with_fill(badge_color(mode)))
        .draw(display)
        .ok();
    Text::with_text_style(mode.badge(), BADGE_TEXT_POS, LABEL_STYLE_BLACK, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(title, HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    if let Some(fps) = fps {
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, HEADER_FPS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}
