//! Pressure source port.
//!
//! The altimeter core never talks to hardware. A front-end hands it one
//! pressure value at a time, taken from anything implementing
//! [`PressureSource`]: a barometer driver, a replay file, or the
//! [`SyntheticBarometer`] used by the simulator.

use core::f32::consts::TAU;

/// Something that produces barometric pressure readings in hPa.
pub trait PressureSource {
    /// Take the next reading.
    ///
    /// Returns `None` when no sample is available (no sensor on this device,
    /// sensor not ready). Values are passed through unvalidated; the estimator
    /// rejects non-finite or non-positive pressure itself.
    fn read(&mut self) -> Option<f32>;
}

/// Default center of the synthetic sweep (~540 m).
pub const SYNTHETIC_BASE_HPA: f32 = 950.0;

/// Default amplitude of the synthetic sweep (830-1070 hPa).
pub const SYNTHETIC_AMPLITUDE_HPA: f32 = 120.0;

/// Default phase advance per reading. At 5 readings/s one sweep takes ~1 min.
pub const SYNTHETIC_PHASE_STEP: f32 = 0.02;

/// Signal generator standing in for a pressure sensor.
///
/// Produces `base + amplitude * sin(phase)`, advancing `phase` on every read,
/// so the altitude slowly climbs and descends through the whole color range.
pub struct SyntheticBarometer {
    base_hpa: f32,
    amplitude_hpa: f32,
    phase_step: f32,
    phase: f32,
    available: bool,
}

impl SyntheticBarometer {
    /// Sweep with explicit parameters.
    pub const fn new(
        base_hpa: f32,
        amplitude_hpa: f32,
        phase_step: f32,
    ) -> Self {
        Self {
            base_hpa,
            amplitude_hpa,
            phase_step,
            phase: 0.0,
            available: true,
        }
    }

    /// A device without a pressure sensor: every read returns `None`.
    pub const fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new(SYNTHETIC_BASE_HPA, 0.0, 0.0)
        }
    }

    /// Whether this source ever produces readings.
    #[inline]
    pub const fn is_available(&self) -> bool { self.available }
}

impl Default for SyntheticBarometer {
    fn default() -> Self { Self::new(SYNTHETIC_BASE_HPA, SYNTHETIC_AMPLITUDE_HPA, SYNTHETIC_PHASE_STEP) }
}

impl PressureSource for SyntheticBarometer {
    fn read(&mut self) -> Option<f32> {
        if !self.available {
            return None;
        }

        let value = self.base_hpa + self.amplitude_hpa * micromath::F32(self.phase).sin().0;

        self.phase += self.phase_step;
        if self.phase >= TAU {
            self.phase -= TAU;
        }

        Some(value)
    }
}
