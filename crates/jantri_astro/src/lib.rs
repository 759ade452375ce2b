//! Solar and lunar event computation for a fixed observer.
//!
//! This crate provides:
//! - Low-precision analytic solar position: true longitude, declination,
//!   equation of time
//! - Truncated-series lunar longitude and the Moon−Sun phase angle
//! - Sunrise, solar noon, and sunset by the hour-angle method
//! - Phase-crossing search (next new/full moon at or after a moment)
//!
//! Accuracy is a few arcminutes in longitude, which keeps event times within
//! a couple of minutes: jantri precision, not ephemeris precision.

pub mod error;
pub mod lunar;
pub mod phase_search;
pub mod riseset;
pub mod solar;
pub(crate) mod util;

pub use error::AstroError;
pub use lunar::{lunar_longitude_deg, lunar_phase_angle};
pub use phase_search::{MEAN_SYNODIC_MONTH, new_moon_at_or_after, phase_at_or_after};
pub use riseset::{RiseSetResult, solar_noon, sunrise, sunset};
pub use solar::{
    equation_of_time_minutes, julian_centuries, solar_declination_deg, solar_true_longitude_deg,
};
