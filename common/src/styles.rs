//! Pre-computed text styles.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder::build` are `const fn`, so the
//! fixed styles live in read-only data instead of being rebuilt every frame.
//! Text drawn over the altitude background changes color with it; for those
//! callers the fonts are exposed and only the color varies.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BLACK, WHITE, YELLOW};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Labels, readings, popup text.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Log lines and the mode badge.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. FPS counter in the header.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Fonts (for background-dependent colors)
// =============================================================================

/// Small label font (6x10).
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

/// Pressure reading font (`ProFont` 18pt).
pub const PRESSURE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Altitude reading font (`ProFont` 24pt).
pub const ALTITUDE_FONT: &MonoFont = &PROFONT_24_POINT;

// =============================================================================
// Fixed Styles
// =============================================================================

/// Small white text on the header bar and the log page.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small black text on the colored mode badge.
pub const LABEL_STYLE_BLACK: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Small yellow text for log page headings.
pub const LABEL_STYLE_YELLOW: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, YELLOW);

/// Header title (10x20).
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);
