//! Barometric altimeter core.
//!
//! Platform-agnostic code shared by the desktop simulator and any embedded
//! front-end that renders the altimeter screen:
//!
//! - [`altitude`]: pressure → altitude and background intensity (the estimator)
//! - [`colors`]: RGB565 palette and the intensity → background mapping
//! - [`animations`]: smooth background fades between frames
//! - [`config`]: screen geometry and layout constants
//! - [`limits`]: physical defaults and simulated-input range
//! - [`mode`]: `Live | Simulated` pressure input mode
//! - [`pages`]: page navigation enum
//! - [`sensor`]: pressure source port and a synthetic barometer
//! - [`log`]: on-screen event log ring buffer
//! - [`styles`]: pre-computed text styles
//! - [`text`]: fixed-capacity formatting of readings
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and never allocates. It avoids
//! `std::time` so front-ends bring their own clock.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod altitude;
pub mod animations;
pub mod colors;
pub mod config;
pub mod limits;
pub mod log;
pub mod mode;
pub mod pages;
pub mod sensor;
pub mod styles;
pub mod text;

// Re-export commonly used items
pub use altitude::{AltimeterConfig, AltitudeError, AltitudeResult, InputField};
pub use mode::PressureMode;
pub use pages::Page;
