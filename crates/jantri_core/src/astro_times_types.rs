//! Result records for the astronomical time calculator.

use jantri_base::PhaseName;

/// Solar event times for one civil day, as Unix epoch seconds (UT).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: i64,
    pub noon: i64,
    pub sunset: i64,
}

/// Lunar event times and the current phase bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonTimes {
    /// Next new moon at or after the input instant (Unix seconds, UT).
    pub new_moon: i64,
    /// Next full moon at or after the input instant (Unix seconds, UT).
    pub full_moon: i64,
    /// Named phase bucket at the input instant.
    pub phase: PhaseName,
}

/// Astronomical values for the Sun and Moon at the calculator's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstroTimes {
    /// The input instant the computation was evaluated at (Unix seconds).
    pub input: i64,
    pub sun: SunTimes,
    pub moon: MoonTimes,
}
