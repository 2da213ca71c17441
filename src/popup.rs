//! Popup state management with time-based expiration.

use std::time::Instant;

use altimeter_common::PressureMode;

use crate::timing::POPUP_DURATION;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// "SIMULATION ON/OFF" banner after a mode switch.
    Mode(PressureMode, Instant),
    /// "FPS ON/OFF" banner.
    Fps(bool, Instant),
}

impl Popup {
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Mode(_, t) | Self::Fps(_, t) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    /// Banner text.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Mode(PressureMode::Simulated, _) => "SIMULATION ON",
            Self::Mode(PressureMode::Live, _) => "SIMULATION OFF",
            Self::Fps(true, _) => "FPS ON",
            Self::Fps(false, _) => "FPS OFF",
        }
    }
}
