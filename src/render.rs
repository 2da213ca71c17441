//! Render state tracking.
//!
//! The altimeter screen is static between sensor readings, so a frame is
//! only redrawn when something visible changed. Everything that affects the
//! picture goes into a [`FrameKey`]; an identical key means the previous
//! frame is still on screen.
//!
//! | Input | Changes when |
//! |-------|--------------|
//! | page / mode | Tab / Space |
//! | pressure | sensor reading, slider, keys |
//! | background | every frame of a fade |
//! | popup | shown, expired |
//! | fps | once per second, if shown |
//! | log revision | new log line or reading counter (log page) |

use altimeter_common::{Page, PressureMode};
use embedded_graphics::pixelcolor::Rgb565;

/// Everything the current frame depends on.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FrameKey {
    pub page: Page,
    pub mode: PressureMode,
    /// Pressure compared bit-for-bit so NaN readings still compare equal.
    pub pressure_bits: u32,
    pub background: Rgb565,
    pub popup: Option<&'static str>,
    /// Rounded FPS, `None` when the counter is hidden.
    pub fps: Option<u32>,
    pub log_revision: u32,
}

impl FrameKey {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        page: Page,
        mode: PressureMode,
        pressure_hpa: f32,
        background: Rgb565,
        popup: Option<&'static str>,
        fps: Option<f32>,
        log_revision: u32,
    ) -> Self {
        Self {
            page,
            mode,
            pressure_bits: pressure_hpa.to_bits(),
            background,
            popup,
            fps: fps.map(|f| (f + 0.5) as u32),
            log_revision,
        }
    }
}

/// Remembers what is on screen.
#[derive(Default)]
pub struct RenderState {
    prev: Option<FrameKey>,
    pub frames_drawn: u32,
    pub frames_skipped: u32,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            prev: None,
            frames_drawn: 0,
            frames_skipped: 0,
        }
    }

    /// Whether `key` differs from the frame on screen. Records it if so.
    pub fn needs_redraw(
        &mut self,
        key: FrameKey,
    ) -> bool {
        if self.prev == Some(key) {
            self.frames_skipped = self.frames_skipped.wrapping_add(1);
            return false;
        }
        self.prev = Some(key);
        self.frames_drawn = self.frames_drawn.wrapping_add(1);
        true
    }

    /// Forget the current frame (forces the next redraw).
    pub fn invalidate(&mut self) { self.prev = None; }
}
