//! Pressure input mode.
//!
//! The altimeter either follows the live pressure sensor or a value the user
//! sets on a slider. Every consumer (state, sensor feed, screen) receives the
//! mode explicitly instead of reading a shared flag.

/// Where the displayed pressure comes from.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum PressureMode {
    /// Readings from the pressure sensor.
    #[default]
    Live,

    /// User-controlled value, clamped to the slider range.
    Simulated,
}

impl PressureMode {
    /// Switch to the other mode.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Live => Self::Simulated,
            Self::Simulated => Self::Live,
        }
    }

    /// Whether sensor readings should be delivered in this mode.
    #[inline]
    pub const fn wants_sensor(self) -> bool { matches!(self, Self::Live) }

    /// Short badge text for the header.
    #[inline]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Live => "LIVE",
            Self::Simulated => "SIM",
        }
    }
}
