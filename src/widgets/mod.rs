//! Widget components for the altimeter display.

mod header;
mod popups;
mod slider;

pub use header::draw_header;
pub use popups::draw_popup;
pub use slider::{draw_slider, slider_hit, slider_pressure_at};
