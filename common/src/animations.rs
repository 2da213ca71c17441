//! Smooth background fades.
//!
//! The simulated pressure can jump by 10 hPa per key press, which moves the
//! background by several color steps at once. Instead of snapping, the
//! displayed color walks toward the target a fraction of the distance per
//! frame:
//!
//! 1. The screen sets the target color from the current altitude
//! 2. `update()` interpolates current → target once per frame
//! 3. The screen draws `current()`
//!
//! Interpolation uses 8-bit fixed-point integer math on the raw RGB565
//! components.

use embedded_graphics::{pixelcolor::Rgb565, prelude::IntoStorage};

use crate::colors::WHITE;

/// Speed of color interpolation (0.0-1.0). 1.0 = instant.
/// At 0.2 a full white → blue fade takes about 20 frames (~400ms at 50 FPS).
const FADE_SPEED: f32 = 0.2;

/// Manhattan distance (in RGB565 steps) at which the fade snaps to target.
const SNAP_THRESHOLD: i32 = 2;

/// Background color that eases toward a target over several frames.
pub struct BackgroundFade {
    current: Rgb565,
    target: Rgb565,
    active: bool,
}

impl BackgroundFade {
    /// Start at the sea-level background (white), no fade running.
    pub const fn new() -> Self {
        Self {
            current: WHITE,
            target: WHITE,
            active: false,
        }
    }

    /// Set the color to fade toward.
    ///
    /// Returns `true` if this started a new fade.
    pub fn set_target(
        &mut self,
        target: Rgb565,
    ) -> bool {
        if self.target == target {
            return false;
        }
        self.target = target;
        self.active = true;
        true
    }

    /// Skip the fade and show `color` immediately.
    pub fn jump_to(
        &mut self,
        color: Rgb565,
    ) {
        self.current = color;
        self.target = color;
        self.active = false;
    }

    /// Color to draw this frame.
    #[inline]
    pub const fn current(&self) -> Rgb565 { self.current }

    /// Advance the fade by one frame. Returns `true` if the color changed.
    pub fn update(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.current == self.target {
            self.active = false;
            return false;
        }

        let next = lerp_rgb565(self.current, self.target, FADE_SPEED);
        if colors_close_enough(next, self.target) {
            self.current = self.target;
            self.active = false;
        } else {
            self.current = next;
        }
        true
    }
}

impl Default for BackgroundFade {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Color Interpolation Helpers
// =============================================================================

#[inline]
fn split(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        i32::from((raw >> 11) & 0x1F),
        i32::from((raw >> 5) & 0x3F),
        i32::from(raw & 0x1F),
    )
}

/// Linear interpolation between two Rgb565 colors.
///
/// A non-zero channel delta always moves by at least one step, otherwise
/// small deltas would truncate to zero and the fade would never finish.
fn lerp_rgb565(
    from: Rgb565,
    to: Rgb565,
    t: f32,
) -> Rgb565 {
    let (from_r, from_g, from_b) = split(from);
    let (to_r, to_g, to_b) = split(to);

    let t_fixed = (t * 256.0) as i32;
    let step = |delta: i32| -> i32 {
        if delta == 0 || t_fixed == 0 {
            return 0;
        }
        match (delta * t_fixed) >> 8 {
            0 if delta > 0 => 1,
            0 => -1,
            s => s,
        }
    };

    let r = (from_r + step(to_r - from_r)).clamp(0, 31);
    let g = (from_g + step(to_g - from_g)).clamp(0, 63);
    let b = (from_b + step(to_b - from_b)).clamp(0, 31);

    Rgb565::new(r as u8, g as u8, b as u8)
}

fn colors_close_enough(
    a: Rgb565,
    b: Rgb565,
) -> bool {
    let (a_r, a_g, a_b) = split(a);
    let (b_r, b_g, b_b) = split(b);
    (a_r - b_r).abs() + (a_g - b_g).abs() + (a_b - b_b).abs() <= SNAP_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLUE, altitude_background};

    #[test]
    fn test_fade_starts_white_and_idle() {
        let mut fade = BackgroundFade::new();
        assert_eq!(fade.current(), WHITE);
        assert!(!fade.update());
    }

    #[test]
    fn test_set_same_target_is_noop() {
        let mut fade = BackgroundFade::new();
        assert!(!fade.set_target(WHITE));
        assert!(!fade.update());
    }

    #[test]
    fn test_fade_converges_to_target() {
        let mut fade = BackgroundFade::new();
        assert!(fade.set_target(BLUE));

        let mut frames = 0;
        while fade.update() {
            frames += 1;
            assert!(frames < 100, "fade did not converge");
        }
        assert_eq!(fade.current(), BLUE);
        assert!(!fade.update());
    }

    #[test]
    fn test_fade_moves_gradually() {
        let mut fade = BackgroundFade::new();
        fade.set_target(BLUE);
        fade.update();
        let after_one = fade.current();
        assert_ne!(after_one, WHITE);
        assert_ne!(after_one, BLUE);
    }

    #[test]
    fn test_small_delta_does_not_stall() {
        let mut fade = BackgroundFade::new();
        fade.jump_to(altitude_background(0.30));
        fade.set_target(altitude_background(0.32));

        let mut frames = 0;
        while fade.update() {
            frames += 1;
            assert!(frames < 10);
        }
        assert_eq!(fade.current(), altitude_background(0.32));
    }

    #[test]
    fn test_jump_to_skips_fade() {
        let mut fade = BackgroundFade::new();
        fade.set_target(BLUE);
        fade.jump_to(BLUE);
        assert_eq!(fade.current(), BLUE);
        assert!(!fade.update());
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb565(WHITE, BLUE, 1.0), BLUE);
        assert_eq!(lerp_rgb565(WHITE, BLUE, 0.0), WHITE);
    }
}
