//! Full-page screens.

mod altimeter;
mod log;

pub use altimeter::{AltimeterView, draw_altimeter_page};
pub use log::{LogStats, draw_log_page};
