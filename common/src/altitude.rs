//! Pressure → altitude estimation.
//!
//! Uses the international barometric formula for the standard atmosphere:
//!
//! ```text
//! altitude_m = 44330 * (1 - (p / p0) ^ (1 / 5.255))
//! ```
//!
//! where `p` is the measured pressure and `p0` the reference (sea-level)
//! pressure, both in hPa. The result is negative below the reference level and
//! grows without bound as `p → 0`.
//!
//! The presentation side gets a normalized `intensity` in `[0, 1]`, used to
//! darken the background as altitude increases (see [`crate::colors`]).
//!
//! Every function here is pure: no state, no allocation, safe to call from any
//! thread.
//!
//! # Usage
//!
//! ```ignore
//! use altimeter_common::altitude::{compute_altitude, compute_intensity};
//! use altimeter_common::limits::{DEFAULT_SATURATION_M, SEA_LEVEL_HPA};
//!
//! let altitude = compute_altitude(900.0, SEA_LEVEL_HPA)?; // ≈ 988.6 m
//! let intensity = compute_intensity(altitude, DEFAULT_SATURATION_M)?; // ≈ 0.198
//! ```

use core::fmt;

use crate::limits::{
    BAROMETRIC_EXPONENT_DENOM,
    BAROMETRIC_SCALE_M,
    DEFAULT_SATURATION_M,
    SEA_LEVEL_HPA,
    SIM_COARSE_STEP_HPA,
    SIM_PRESSURE_MAX_HPA,
    SIM_PRESSURE_MIN_HPA,
    SIM_STEP_HPA,
};

// =============================================================================
// Errors
// =============================================================================

/// Argument that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    /// Measured pressure (must be finite and > 0).
    Pressure,
    /// Reference pressure (must be finite and > 0).
    Reference,
    /// Intensity saturation altitude (must be finite and > 0).
    Saturation,
    /// Simulated pressure range (must be finite, positive and non-empty).
    SimulatedRange,
}

impl InputField {
    /// Short upper-case name, fits on the log page.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pressure => "PRESSURE",
            Self::Reference => "REFERENCE",
            Self::Saturation => "SATURATION",
            Self::SimulatedRange => "SIM RANGE",
        }
    }
}

/// Error returned by the estimator.
///
/// There is a single failure kind: a rejected argument. Nothing is retried and
/// nothing is left behind; the caller simply has no result for that input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AltitudeError {
    InvalidInput(InputField),
}

impl fmt::Display for AltitudeError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::InvalidInput(field) => write!(f, "invalid input: {}", field.name()),
        }
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Runtime parameters for the estimator and the simulated input.
///
/// `Default` gives the standard atmosphere and the slider range used by the
/// altimeter screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AltimeterConfig {
    /// Pressure treated as zero altitude (hPa).
    pub reference_hpa: f32,
    /// Altitude at which the background intensity saturates (m).
    pub saturation_m: f32,
    /// Lower bound of the simulated pressure (hPa).
    pub sim_min_hpa: f32,
    /// Upper bound of the simulated pressure (hPa).
    pub sim_max_hpa: f32,
    /// Fine adjustment step (hPa).
    pub sim_step_hpa: f32,
    /// Coarse adjustment step (hPa).
    pub sim_coarse_step_hpa: f32,
}

impl AltimeterConfig {
    /// Standard-atmosphere configuration.
    pub const fn new() -> Self {
        Self {
            reference_hpa: SEA_LEVEL_HPA,
            saturation_m: DEFAULT_SATURATION_M,
            sim_min_hpa: SIM_PRESSURE_MIN_HPA,
            sim_max_hpa: SIM_PRESSURE_MAX_HPA,
            sim_step_hpa: SIM_STEP_HPA,
            sim_coarse_step_hpa: SIM_COARSE_STEP_HPA,
        }
    }

    /// Check every parameter the estimator depends on.
    pub fn validate(&self) -> Result<(), AltitudeError> {
        if !is_positive_finite(self.reference_hpa) {
            return Err(AltitudeError::InvalidInput(InputField::Reference));
        }
        if !is_positive_finite(self.saturation_m) {
            return Err(AltitudeError::InvalidInput(InputField::Saturation));
        }
        if !is_positive_finite(self.sim_min_hpa)
            || !is_positive_finite(self.sim_max_hpa)
            || self.sim_min_hpa >= self.sim_max_hpa
        {
            return Err(AltitudeError::InvalidInput(InputField::SimulatedRange));
        }
        Ok(())
    }

    /// Clamp a simulated pressure into this configuration's slider range.
    #[inline]
    pub fn clamp_simulated(
        &self,
        value: f32,
    ) -> f32 {
        clamp_simulated_pressure(value, self.sim_min_hpa, self.sim_max_hpa)
    }
}

impl Default for AltimeterConfig {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Result
// =============================================================================

/// Altitude estimate for one pressure reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AltitudeResult {
    /// Pressure the estimate was derived from (hPa).
    pub pressure_hpa: f32,
    /// Altitude above the reference level (m), negative below it.
    pub altitude_m: f32,
    /// Background intensity in `[0, 1]`.
    pub intensity: f32,
}

// =============================================================================
// Estimator
// =============================================================================

#[inline]
fn is_positive_finite(value: f32) -> bool { value.is_finite() && value > 0.0 }

/// Convert a pressure reading into altitude above `reference_hpa`.
///
/// # Errors
///
/// `InvalidInput(Pressure)` when `pressure_hpa` is not finite or `<= 0`;
/// `InvalidInput(Reference)` when `reference_hpa` is not finite or `<= 0`.
pub fn compute_altitude(
    pressure_hpa: f32,
    reference_hpa: f32,
) -> Result<f32, AltitudeError> {
    if !is_positive_finite(pressure_hpa) {
        return Err(AltitudeError::InvalidInput(InputField::Pressure));
    }
    if !is_positive_finite(reference_hpa) {
        return Err(AltitudeError::InvalidInput(InputField::Reference));
    }

    let ratio = pressure_hpa / reference_hpa;
    Ok(BAROMETRIC_SCALE_M * (1.0 - libm::powf(ratio, 1.0 / BAROMETRIC_EXPONENT_DENOM)))
}

/// Map an altitude to a background intensity in `[0, 1]`.
///
/// Altitudes at or below zero give 0, altitudes at or above `saturation_m`
/// give 1. A NaN altitude gives 0.
///
/// # Errors
///
/// `InvalidInput(Saturation)` when `saturation_m` is not finite or `<= 0`.
pub fn compute_intensity(
    altitude_m: f32,
    saturation_m: f32,
) -> Result<f32, AltitudeError> {
    if !is_positive_finite(saturation_m) {
        return Err(AltitudeError::InvalidInput(InputField::Saturation));
    }
    if altitude_m.is_nan() {
        return Ok(0.0);
    }
    Ok((altitude_m / saturation_m).clamp(0.0, 1.0))
}

/// Ordered `(lo, hi)` bounds of a simulated range.
///
/// A reversed range is swapped. A NaN bound is replaced by the default slider
/// bound ([`SIM_PRESSURE_MIN_HPA`] / [`SIM_PRESSURE_MAX_HPA`]); infinite
/// bounds are kept.
pub fn simulated_bounds(
    min: f32,
    max: f32,
) -> (f32, f32) {
    let min = if min.is_nan() { SIM_PRESSURE_MIN_HPA } else { min };
    let max = if max.is_nan() { SIM_PRESSURE_MAX_HPA } else { max };
    if min <= max { (min, max) } else { (max, min) }
}

/// Constrain a user-driven simulated pressure to `[min, max]`.
///
/// Never fails: the slider feeding this must not error while being dragged.
/// NaN maps to the lower bound. Bounds are resolved by [`simulated_bounds`].
pub fn clamp_simulated_pressure(
    value: f32,
    min: f32,
    max: f32,
) -> f32 {
    let (lo, hi) = simulated_bounds(min, max);
    if value.is_nan() {
        return lo;
    }
    value.clamp(lo, hi)
}

/// Full estimate for one reading: altitude plus background intensity.
pub fn estimate(
    pressure_hpa: f32,
    config: &AltimeterConfig,
) -> Result<AltitudeResult, AltitudeError> {
    let altitude_m = compute_altitude(pressure_hpa, config.reference_hpa)?;
    let intensity = compute_intensity(altitude_m, config.saturation_m)?;
    Ok(AltitudeResult {
        pressure_hpa,
        altitude_m,
        intensity,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE_M: f32 = 0.05;

    fn assert_close(
        actual: f32,
        expected: f32,
        tolerance: f32,
    ) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    // -------------------------------------------------------------------------
    // compute_altitude
    // -------------------------------------------------------------------------

    #[test]
    fn test_altitude_at_reference_is_zero() {
        let alt = compute_altitude(1013.25, 1013.25).unwrap();
        assert!(alt.abs() < 1e-4, "got {alt}");
    }

    #[test]
    fn test_altitude_known_values() {
        // 44330 * (1 - (1000 / 1013.25)^(1/5.255)) = 110.90 m
        assert_close(compute_altitude(1000.0, 1013.25).unwrap(), 110.90, TOLERANCE_M);
        assert_close(compute_altitude(900.0, 1013.25).unwrap(), 988.65, TOLERANCE_M);
        assert_close(compute_altitude(800.0, 1013.25).unwrap(), 1949.27, 0.1);
    }

    #[test]
    fn test_altitude_below_sea_level_is_negative() {
        let alt = compute_altitude(1050.0, 1013.25).unwrap();
        assert!(alt < 0.0);
        assert_close(alt, -301.56, 0.1);
    }

    #[test]
    fn test_altitude_sign_relative_to_reference() {
        let reference = 1013.25;
        for p in [1.0, 100.0, 500.0, 850.5, 1000.0, 1013.0, 1013.25] {
            assert!(compute_altitude(p, reference).unwrap() >= 0.0, "p = {p}");
        }
        for p in [1013.5, 1020.0, 1050.0, 2000.0] {
            assert!(compute_altitude(p, reference).unwrap() < 0.0, "p = {p}");
        }
    }

    #[test]
    fn test_altitude_strictly_decreasing() {
        let mut prev = compute_altitude(10.0, SEA_LEVEL_HPA).unwrap();
        let mut p = 20.0;
        while p <= 1100.0 {
            let alt = compute_altitude(p, SEA_LEVEL_HPA).unwrap();
            assert!(alt < prev, "not decreasing at {p} hPa: {alt} >= {prev}");
            prev = alt;
            p += 10.0;
        }
    }

    #[test]
    fn test_altitude_custom_reference() {
        // Same pressure as the reference is always zero altitude
        assert!(compute_altitude(950.0, 950.0).unwrap().abs() < 1e-4);
        // A lower reference puts the same reading lower
        let high_ref = compute_altitude(900.0, 1020.0).unwrap();
        let low_ref = compute_altitude(900.0, 1000.0).unwrap();
        assert!(high_ref > low_ref);
    }

    #[test]
    fn test_altitude_rejects_bad_pressure() {
        let err = AltitudeError::InvalidInput(InputField::Pressure);
        assert_eq!(compute_altitude(-5.0, 1013.25), Err(err));
        assert_eq!(compute_altitude(0.0, 1013.25), Err(err));
        assert_eq!(compute_altitude(f32::NAN, 1013.25), Err(err));
        assert_eq!(compute_altitude(f32::INFINITY, 1013.25), Err(err));
        assert_eq!(compute_altitude(f32::NEG_INFINITY, 1013.25), Err(err));
    }

    #[test]
    fn test_altitude_rejects_bad_reference() {
        let err = AltitudeError::InvalidInput(InputField::Reference);
        assert_eq!(compute_altitude(1000.0, 0.0), Err(err));
        assert_eq!(compute_altitude(1000.0, -1013.25), Err(err));
        assert_eq!(compute_altitude(1000.0, f32::NAN), Err(err));
    }

    // -------------------------------------------------------------------------
    // compute_intensity
    // -------------------------------------------------------------------------

    #[test]
    fn test_intensity_known_values() {
        assert_close(compute_intensity(2500.0, 5000.0).unwrap(), 0.5, 1e-6);
        assert_eq!(compute_intensity(6000.0, 5000.0).unwrap(), 1.0);
        assert_eq!(compute_intensity(0.0, 5000.0).unwrap(), 0.0);
        assert_eq!(compute_intensity(-300.0, 5000.0).unwrap(), 0.0);
    }

    #[test]
    fn test_intensity_always_in_unit_range() {
        for alt in [f32::MIN, -1e9, -1.0, 0.0, 1.0, 4999.0, 5000.0, 1e9, f32::MAX, f32::INFINITY, f32::NAN] {
            let i = compute_intensity(alt, DEFAULT_SATURATION_M).unwrap();
            assert!((0.0..=1.0).contains(&i), "altitude {alt} gave {i}");
        }
    }

    #[test]
    fn test_intensity_non_decreasing() {
        let mut prev = 0.0;
        for step in 0..80 {
            let i = compute_intensity(step as f32 * 100.0 - 1000.0, 5000.0).unwrap();
            assert!(i >= prev);
            prev = i;
        }
    }

    #[test]
    fn test_intensity_rejects_bad_saturation() {
        let err = AltitudeError::InvalidInput(InputField::Saturation);
        assert_eq!(compute_intensity(100.0, 0.0), Err(err));
        assert_eq!(compute_intensity(100.0, -5000.0), Err(err));
        assert_eq!(compute_intensity(100.0, f32::NAN), Err(err));
    }

    // -------------------------------------------------------------------------
    // clamp_simulated_pressure
    // -------------------------------------------------------------------------

    #[test]
    fn test_clamp_simulated_pressure() {
        assert_eq!(clamp_simulated_pressure(1100.0, 800.0, 1050.0), 1050.0);
        assert_eq!(clamp_simulated_pressure(500.0, 800.0, 1050.0), 800.0);
        assert_eq!(clamp_simulated_pressure(950.25, 800.0, 1050.0), 950.25);
        assert_eq!(clamp_simulated_pressure(800.0, 800.0, 1050.0), 800.0);
        assert_eq!(clamp_simulated_pressure(1050.0, 800.0, 1050.0), 1050.0);
    }

    #[test]
    fn test_clamp_simulated_pressure_never_leaves_range() {
        for v in [f32::NEG_INFINITY, -1.0, 0.0, 799.9, 1013.25, 1050.1, f32::INFINITY, f32::NAN] {
            let c = clamp_simulated_pressure(v, 800.0, 1050.0);
            assert!((800.0..=1050.0).contains(&c), "{v} clamped to {c}");
        }
    }

    #[test]
    fn test_clamp_simulated_pressure_nan_bounds() {
        assert_eq!(clamp_simulated_pressure(900.0, f32::NAN, 1050.0), 900.0);
        assert_eq!(clamp_simulated_pressure(500.0, f32::NAN, 1050.0), SIM_PRESSURE_MIN_HPA);
        assert_eq!(clamp_simulated_pressure(1100.0, 800.0, f32::NAN), SIM_PRESSURE_MAX_HPA);
        assert_eq!(clamp_simulated_pressure(f32::NAN, f32::NAN, f32::NAN), SIM_PRESSURE_MIN_HPA);
    }

    #[test]
    fn test_clamp_simulated_pressure_infinite_bounds() {
        assert_eq!(clamp_simulated_pressure(900.0, f32::NEG_INFINITY, 1050.0), 900.0);
        assert_eq!(clamp_simulated_pressure(5000.0, 800.0, f32::INFINITY), 5000.0);
        assert_eq!(clamp_simulated_pressure(-1.0, 800.0, f32::INFINITY), 800.0);
        assert_eq!(clamp_simulated_pressure(f32::INFINITY, f32::INFINITY, 800.0), f32::INFINITY);
    }

    #[test]
    fn test_simulated_bounds() {
        assert_eq!(simulated_bounds(800.0, 1050.0), (800.0, 1050.0));
        assert_eq!(simulated_bounds(1050.0, 800.0), (800.0, 1050.0));
        assert_eq!(simulated_bounds(f32::NAN, 900.0), (SIM_PRESSURE_MIN_HPA, 900.0));
        assert_eq!(simulated_bounds(1100.0, f32::NAN), (SIM_PRESSURE_MAX_HPA, 1100.0));
    }

    #[test]
    fn test_config_clamp_with_nan_bound() {
        let config = AltimeterConfig { sim_min_hpa: f32::NAN, ..AltimeterConfig::default() };
        assert_eq!(config.clamp_simulated(900.0), 900.0);
        assert_eq!(config.clamp_simulated(700.0), SIM_PRESSURE_MIN_HPA);
    }

    #[test]
    fn test_clamp_simulated_pressure_reversed_range() {
        assert_eq!(clamp_simulated_pressure(1100.0, 1050.0, 800.0), 1050.0);
        assert_eq!(clamp_simulated_pressure(700.0, 1050.0, 800.0), 800.0);
    }

    // -------------------------------------------------------------------------
    // estimate / config
    // -------------------------------------------------------------------------

    #[test]
    fn test_estimate_combines_altitude_and_intensity() {
        let result = estimate(900.0, &AltimeterConfig::default()).unwrap();
        assert_eq!(result.pressure_hpa, 900.0);
        assert_close(result.altitude_m, 988.65, TOLERANCE_M);
        assert_close(result.intensity, result.altitude_m / 5000.0, 1e-6);
    }

    #[test]
    fn test_estimate_propagates_errors() {
        let config = AltimeterConfig::default();
        assert_eq!(estimate(-5.0, &config), Err(AltitudeError::InvalidInput(InputField::Pressure)));

        let bad = AltimeterConfig { saturation_m: 0.0, ..config };
        assert_eq!(estimate(900.0, &bad), Err(AltitudeError::InvalidInput(InputField::Saturation)));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(AltimeterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_validation() {
        let base = AltimeterConfig::default();
        let cases = [
            (AltimeterConfig { reference_hpa: 0.0, ..base }, InputField::Reference),
            (AltimeterConfig { saturation_m: -1.0, ..base }, InputField::Saturation),
            (AltimeterConfig { sim_min_hpa: 1050.0, ..base }, InputField::SimulatedRange),
            (AltimeterConfig { sim_max_hpa: f32::NAN, ..base }, InputField::SimulatedRange),
        ];
        for (config, field) in cases {
            assert_eq!(config.validate(), Err(AltitudeError::InvalidInput(field)));
        }
    }

    #[test]
    fn test_error_display() {
        let err = AltitudeError::InvalidInput(InputField::Pressure);
        assert_eq!(format!("{err}"), "invalid input: PRESSURE");
    }
}
