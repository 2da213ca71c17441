//! Physical constants and input limits for the altimeter.
//!
//! All values are compile-time constants with ordering assertions, so a bad
//! edit (e.g. `SIM_PRESSURE_MIN_HPA > SIM_PRESSURE_MAX_HPA`) fails the build.

// =============================================================================
// Standard Atmosphere
// =============================================================================

/// Sea-level reference pressure in hPa (ISA standard atmosphere).
/// A reading equal to this value maps to 0 m.
pub const SEA_LEVEL_HPA: f32 = 1013.25;

/// Scale height of the international barometric formula in meters.
pub const BAROMETRIC_SCALE_M: f32 = 44330.0;

/// Denominator of the barometric exponent: `altitude ∝ 1 - (p/p0)^(1/5.255)`.
pub const BAROMETRIC_EXPONENT_DENOM: f32 = 5.255;

const _: () = assert!(SEA_LEVEL_HPA > 0.0);
const _: () = assert!(BAROMETRIC_EXPONENT_DENOM > 0.0);

// =============================================================================
// Presentation
// =============================================================================

/// Altitude at which the background reaches full intensity (darkest blue).
pub const DEFAULT_SATURATION_M: f32 = 5000.0;

const _: () = assert!(DEFAULT_SATURATION_M > 0.0);

// =============================================================================
// Simulated Input
// =============================================================================

/// Lowest pressure the simulation slider can reach (~1950 m).
pub const SIM_PRESSURE_MIN_HPA: f32 = 800.0;

/// Highest pressure the simulation slider can reach (~-300 m, below sea level).
pub const SIM_PRESSURE_MAX_HPA: f32 = 1050.0;

/// Pressure change for a single Up/Down key press.
pub const SIM_STEP_HPA: f32 = 0.5;

/// Pressure change for a PageUp/PageDown key press.
pub const SIM_COARSE_STEP_HPA: f32 = 10.0;

const _: () = assert!(SIM_PRESSURE_MIN_HPA > 0.0);
const _: () = assert!(SIM_PRESSURE_MIN_HPA < SIM_PRESSURE_MAX_HPA);
const _: () = assert!(SIM_PRESSURE_MIN_HPA < SEA_LEVEL_HPA);
const _: () = assert!(SEA_LEVEL_HPA < SIM_PRESSURE_MAX_HPA);
const _: () = assert!(SIM_STEP_HPA < SIM_COARSE_STEP_HPA);

// =============================================================================
// Unit Tests
// =============================================================================
