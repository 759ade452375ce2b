//! Static calendar tables and localized formatting for the jantri calculators.
//!
//! This crate provides:
//! - Bikrami month names (English transliteration and Gurmukhi)
//! - Paksh (lunar fortnight) names in both scripts
//! - Julian calendar month names
//! - The lunar-phase bucket table and angle → phase-name selection
//! - Gurmukhi numeral formatting

pub mod months;
pub mod numerals;
pub mod paksh;
pub mod phases;
pub mod util;

pub use months::{
    ALL_BIKRAMI_MONTHS, BikramiMonth, julian_month_name, month_name, month_name_gurmukhi,
};
pub use numerals::gurmukhi_numerals;
pub use paksh::Paksh;
pub use phases::{PhaseName, phase_bucket_for_angle};
pub use util::normalize_360;
