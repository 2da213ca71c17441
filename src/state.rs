//! Altimeter application state.
//!
//! Owns the one pressure value the screen shows and decides which input is
//! allowed to change it. The UI thread is the only writer: sensor readings
//! arrive over a channel and are applied here, slider and key changes are
//! applied here, so the two never race.

use altimeter_common::altitude::{self, AltimeterConfig, AltitudeError, AltitudeResult};
use altimeter_common::PressureMode;

/// Pressure input state for the altimeter screen.
pub struct AltimeterState {
    config: AltimeterConfig,
    mode: PressureMode,
    /// Last value delivered by the sensor. Starts at the reference pressure
    /// (0 m) until the first reading arrives.
    live_pressure: f32,
    /// Slider value, always inside the configured simulated range.
    simulated_pressure: f32,
    /// Readings accepted in live mode, shown on the log page.
    pub readings_applied: u32,
}

impl AltimeterState {
    /// Create state for a validated configuration.
    pub fn new(config: AltimeterConfig) -> Result<Self, AltitudeError> {
        config.validate()?;
        Ok(Self {
            config,
            mode: PressureMode::default(),
            live_pressure: config.reference_hpa,
            simulated_pressure: config.clamp_simulated(config.reference_hpa),
            readings_applied: 0,
        })
    }

    #[inline]
    pub const fn config(&self) -> &AltimeterConfig { &self.config }

    #[inline]
    pub const fn mode(&self) -> PressureMode { self.mode }

    /// Switch between live and simulated input.
    ///
    /// Entering simulation starts the slider at the pressure currently shown,
    /// so the altitude does not jump. Returns the new mode.
    pub fn toggle_mode(&mut self) -> PressureMode {
        if self.mode == PressureMode::Live {
            self.simulated_pressure = self.config.clamp_simulated(self.live_pressure);
        }
        self.mode = self.mode.toggle();
        self.mode
    }

    /// Apply a sensor reading. Ignored while simulating (the feed is normally
    /// unregistered then, so a late reading can still arrive).
    ///
    /// Returns `true` if the reading became the current pressure.
    pub fn on_sensor_reading(
        &mut self,
        pressure_hpa: f32,
    ) -> bool {
        if self.mode != PressureMode::Live {
            return false;
        }
        self.live_pressure = pressure_hpa;
        self.readings_applied = self.readings_applied.wrapping_add(1);
        true
    }

    /// Set the simulated pressure (clamped). Ignored in live mode.
    pub fn set_simulated(
        &mut self,
        pressure_hpa: f32,
    ) -> bool {
        if self.mode != PressureMode::Simulated {
            return false;
        }
        self.simulated_pressure = self.config.clamp_simulated(pressure_hpa);
        true
    }

    /// Move the simulated pressure by `delta_hpa` (clamped).
    pub fn nudge_simulated(
        &mut self,
        delta_hpa: f32,
    ) -> bool {
        self.set_simulated(self.simulated_pressure + delta_hpa)
    }

    /// Put the simulated pressure back on the reference level.
    pub fn reset_simulated(&mut self) -> bool { self.set_simulated(self.config.reference_hpa) }

    /// Pressure for the active mode.
    pub const fn current_pressure(&self) -> f32 {
        match self.mode {
            PressureMode::Live => self.live_pressure,
            PressureMode::Simulated => self.simulated_pressure,
        }
    }

    /// Altitude estimate for the current pressure.
    pub fn estimate(&self) -> Result<AltitudeResult, AltitudeError> {
        altitude::estimate(self.current_pressure(), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use altimeter_common::altitude::InputField;

    use super::*;

    fn state() -> AltimeterState { AltimeterState::new(AltimeterConfig::default()).unwrap() }

    #[test]
    fn test_starts_live_at_sea_level() {
        let s = state();
        assert_eq!(s.mode(), PressureMode::Live);
        assert_eq!(s.current_pressure(), 1013.25);
        assert!(s.estimate().unwrap().altitude_m.abs() < 1e-4);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AltimeterConfig { reference_hpa: -1.0, ..AltimeterConfig::default() };
        assert_eq!(
            AltimeterState::new(config).err(),
            Some(AltitudeError::InvalidInput(InputField::Reference))
        );
    }

    #[test]
    fn test_live_readings_update_pressure() {
        let mut s = state();
        assert!(s.on_sensor_reading(900.0));
        assert_eq!(s.current_pressure(), 900.0);
        assert_eq!(s.readings_applied, 1);
    }

    #[test]
    fn test_readings_not_applied_while_simulating() {
        let mut s = state();
        s.toggle_mode();
        let before = s.current_pressure();
        assert!(!s.on_sensor_reading(850.0));
        assert_eq!(s.current_pressure(), before);
        assert_eq!(s.readings_applied, 0);
    }

    #[test]
    fn test_toggle_seeds_slider_from_live_value() {
        let mut s = state();
        s.on_sensor_reading(920.5);
        assert_eq!(s.toggle_mode(), PressureMode::Simulated);
        assert_eq!(s.current_pressure(), 920.5);
    }

    #[test]
    fn test_toggle_seed_is_clamped() {
        let mut s = state();
        s.on_sensor_reading(700.0);
        s.toggle_mode();
        assert_eq!(s.current_pressure(), 800.0);
    }

    #[test]
    fn test_back_to_live_shows_last_reading() {
        let mut s = state();
        s.on_sensor_reading(990.0);
        s.toggle_mode();
        s.set_simulated(850.0);
        assert_eq!(s.toggle_mode(), PressureMode::Live);
        assert_eq!(s.current_pressure(), 990.0);
    }

    #[test]
    fn test_simulated_changes_need_simulated_mode() {
        let mut s = state();
        assert!(!s.set_simulated(900.0));
        assert!(!s.nudge_simulated(-10.0));
        assert_eq!(s.current_pressure(), 1013.25);
    }

    #[test]
    fn test_simulated_value_clamped() {
        let mut s = state();
        s.toggle_mode();
        s.set_simulated(1100.0);
        assert_eq!(s.current_pressure(), 1050.0);
        s.nudge_simulated(-1000.0);
        assert_eq!(s.current_pressure(), 800.0);
        s.set_simulated(f32::NAN);
        assert_eq!(s.current_pressure(), 800.0);
    }

    #[test]
    fn test_nudge_and_reset() {
        let mut s = state();
        s.toggle_mode();
        s.nudge_simulated(-13.25);
        assert_eq!(s.current_pressure(), 1000.0);
        assert!(s.reset_simulated());
        assert_eq!(s.current_pressure(), 1013.25);
    }

    #[test]
    fn test_invalid_live_reading_rejected_by_estimate() {
        let mut s = state();
        s.on_sensor_reading(-5.0);
        assert_eq!(s.estimate(), Err(AltitudeError::InvalidInput(InputField::Pressure)));
    }
}
