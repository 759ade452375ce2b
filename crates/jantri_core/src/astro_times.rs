//! Astronomical event times for the Sun and Moon at a fixed location.
//!
//! Sunrise and sunset come back from the rise/set collaborator in local
//! standard time and are converted to universal time before leaving as epoch
//! seconds; solar noon is already universal. The lunar events are the next
//! phase crossings at or after the input instant.

use std::time::{SystemTime, UNIX_EPOCH};

use jantri_astro::{
    AstroError, RiseSetResult, lunar_phase_angle, new_moon_at_or_after, phase_at_or_after,
    solar_noon, sunrise, sunset,
};
use jantri_base::phase_bucket_for_angle;
use jantri_time::{AMRITSAR, Location, moment_from_unix, universal_from_standard, unix_from_moment};

use crate::astro_times_types::{AstroTimes, MoonTimes, SunTimes};

/// Lunar phase angle of full moon in degrees.
const FULL_MOON_DEG: f64 = 180.0;

/// Calculator for solar and lunar event times at one observer location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroTimeCalculator {
    location: Location,
}

impl AstroTimeCalculator {
    pub const fn new(location: Location) -> Self {
        Self { location }
    }

    /// Calculator for Amritsar, the traditional jantri reference location.
    pub const fn amritsar() -> Self {
        Self::new(AMRITSAR)
    }

    /// Compute event times for the current system clock.
    pub fn compute(&self) -> Result<AstroTimes, AstroError> {
        let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        };
        self.compute_at(now)
    }

    /// Compute event times for a given instant (Unix epoch seconds).
    pub fn compute_at(&self, unix_seconds: i64) -> Result<AstroTimes, AstroError> {
        let moment = moment_from_unix(unix_seconds);
        let date = moment.floor() as i64;

        let sunrise_unix = self.standard_event_unix(sunrise(date, &self.location))?;
        let sunset_unix = self.standard_event_unix(sunset(date, &self.location))?;
        let noon_unix = unix_from_moment(solar_noon(date, &self.location));

        let new_moon = unix_from_moment(new_moon_at_or_after(moment)?);
        let full_moon = unix_from_moment(phase_at_or_after(FULL_MOON_DEG, moment)?);
        let phase = phase_bucket_for_angle(lunar_phase_angle(moment));

        Ok(AstroTimes {
            input: unix_seconds,
            sun: SunTimes {
                sunrise: sunrise_unix,
                noon: noon_unix,
                sunset: sunset_unix,
            },
            moon: MoonTimes {
                new_moon,
                full_moon,
                phase,
            },
        })
    }

    fn standard_event_unix(&self, result: RiseSetResult) -> Result<i64, AstroError> {
        match result {
            RiseSetResult::Event { moment } => {
                Ok(unix_from_moment(universal_from_standard(moment, &self.location)))
            }
            RiseSetResult::NeverRises => {
                Err(AstroError::NoConvergence("sun never rises at this location"))
            }
            RiseSetResult::NeverSets => {
                Err(AstroError::NoConvergence("sun never sets at this location"))
            }
        }
    }
}

/// Event times at Amritsar for a given instant.
pub fn calculate_astro_times(unix_seconds: i64) -> Result<AstroTimes, AstroError> {
    AstroTimeCalculator::amritsar().compute_at(unix_seconds)
}
