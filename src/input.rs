//! Input handling.
//!
//! Converts keyboard and mouse events into altimeter actions.
//!
//! | Key | Action |
//! |-----|--------|
//! | `Space` | Toggle live / simulated pressure |
//! | `Up` / `Down` | Simulated pressure ± fine step |
//! | `PageUp` / `PageDown` | Simulated pressure ± coarse step |
//! | `R` | Simulated pressure back to the reference level |
//! | `Tab` | Switch page |
//! | `F` | Toggle FPS counter |
//! | `Esc` | Quit |
//!
//! Dragging the slider with the left mouse button (or scrolling the wheel)
//! also sets the simulated pressure. Pressure keys only act on the
//! altimeter page.

use altimeter_common::{AltimeterConfig, Page};
use embedded_graphics::prelude::Point;
use embedded_graphics_simulator::sdl2::Keycode;

use crate::widgets::{slider_hit, slider_pressure_at};

/// What the user asked for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    ToggleMode,
    /// Move the simulated pressure by this many hPa.
    Nudge(f32),
    /// Set the simulated pressure directly (unclamped slider value).
    SetSimulated(f32),
    ResetSimulated,
    TogglePage,
    ToggleFps,
    Quit,
}

/// Map a key press to an action.
pub fn action_for_key(
    keycode: Keycode,
    page: Page,
    config: &AltimeterConfig,
) -> Option<Action> {
    let on_altimeter = page == Page::Altimeter;
    match keycode {
        Keycode::Escape => Some(Action::Quit),
        Keycode::Tab => Some(Action::TogglePage),
        Keycode::F => Some(Action::ToggleFps),
        Keycode::Space if on_altimeter => Some(Action::ToggleMode),
        // Up = more pressure = lower altitude, same direction as the slider
        Keycode::Up if on_altimeter => Some(Action::Nudge(config.sim_step_hpa)),
        Keycode::Down if on_altimeter => Some(Action::Nudge(-config.sim_step_hpa)),
        Keycode::PageUp if on_altimeter => Some(Action::Nudge(config.sim_coarse_step_hpa)),
        Keycode::PageDown if on_altimeter => Some(Action::Nudge(-config.sim_coarse_step_hpa)),
        Keycode::R if on_altimeter => Some(Action::ResetSimulated),
        _ => None,
    }
}

/// Map a mouse wheel movement to a fine nudge.
pub fn action_for_wheel(
    scroll_y: i32,
    page: Page,
    config: &AltimeterConfig,
) -> Option<Action> {
    if page != Page::Altimeter || scroll_y == 0 {
        return None;
    }
    Some(Action::Nudge(scroll_y.signum() as f32 * config.sim_step_hpa))
}

/// Tracks a mouse drag on the slider.
#[derive(Default)]
pub struct SliderDrag {
    dragging: bool,
}

impl SliderDrag {
    pub const fn new() -> Self { Self { dragging: false } }

    #[inline]
    pub const fn is_dragging(&self) -> bool { self.dragging }

    /// Left button pressed. Starts a drag if the press hit the slider.
    pub fn press(
        &mut self,
        point: Point,
        config: &AltimeterConfig,
    ) -> Option<Action> {
        if !slider_hit(point) {
            return None;
        }
        self.dragging = true;
        Some(Action::SetSimulated(slider_pressure_at(point.x, config.sim_min_hpa, config.sim_max_hpa)))
    }

    /// Pointer moved. Only acts while dragging, anywhere on screen.
    pub fn motion(
        &self,
        point: Point,
        config: &AltimeterConfig,
    ) -> Option<Action> {
        if !self.dragging {
            return None;
        }
        Some(Action::SetSimulated(slider_pressure_at(point.x, config.sim_min_hpa, config.sim_max_hpa)))
    }

    pub fn release(&mut self) { self.dragging = false; }
}
