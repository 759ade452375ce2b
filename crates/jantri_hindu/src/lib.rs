//! Hindu calendrical arithmetic for Bikrami date conversion.
//!
//! This crate provides:
//! - Revolution counts per mahāyuga for the Surya Siddhanta and modern
//!   schools, with the derived yuga aggregates
//! - Saka → Kali era conversion
//! - Kali (year, month, tithi) → Ahargana civil day count
//! - Ahargana → Julian day number
//! - Julian day number → proleptic Julian calendar date
//!
//! All arithmetic is exact integer arithmetic; no I/O, no floating point.

pub mod calendar;
pub mod julian;
pub mod school;

pub use calendar::{HinduCalendar, KALI_EPOCH_JD, SAKA_KALI_OFFSET};
pub use julian::{JulianDate, julian_date_from_jd};
pub use school::{HinduSchool, Yuga, YugaRotations};
