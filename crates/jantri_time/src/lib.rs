//! Day-count and epoch conversions for the jantri calculators.
//!
//! This crate provides:
//! - Rata Die "moment" ↔ Unix epoch-second conversions
//! - Julian Date ↔ moment conversions
//! - Proleptic Gregorian calendar ↔ Julian day number conversions
//! - Observer location with standard-time ↔ universal-time shifts

pub mod gregorian;
pub mod location;
pub mod moment;

pub use gregorian::{GregorianDate, gregorian_from_jd, gregorian_from_moment, jd_from_gregorian};
pub use location::{AMRITSAR, Location, standard_from_universal, universal_from_standard};
pub use moment::{
    JD_RD_OFFSET, RD_UNIX_EPOCH, SECONDS_PER_DAY, jd_from_moment, moment_from_jd,
    moment_from_unix, unix_from_moment,
};
