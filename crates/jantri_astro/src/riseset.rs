//! Sunrise, solar noon, and sunset by the hour-angle method.
//!
//! Iterative algorithm based on standard spherical astronomy formulas
//! (Meeus, NOAA): apparent solar noon from the equation of time, then the
//! hour angle at which the Sun's altitude equals the standard rise/set
//! depression, refined by recomputing the declination at the event estimate.

use jantri_time::{Location, jd_from_moment, standard_from_universal};

use crate::solar::{equation_of_time_minutes, solar_declination_deg};

/// Maximum iterations for the noon and rise/set refinement loops.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Standard rise/set altitude: 34' refraction plus 16' solar semidiameter.
const RISE_SET_ALTITUDE_DEG: f64 = -50.0 / 60.0;

/// Outcome of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// The event occurs; the moment is in local standard time.
    Event { moment: f64 },
    /// The Sun stays below the rise/set altitude all day (polar night).
    NeverRises,
    /// The Sun stays above the rise/set altitude all day (midnight sun).
    NeverSets,
}

/// Apparent solar noon for the civil day `date` (R.D. day number),
/// as a universal-time moment.
pub fn solar_noon(date: i64, location: &Location) -> f64 {
    let mean_noon = date as f64 + 0.5 - location.longitude_deg / 360.0;
    let mut noon = mean_noon;
    for _ in 0..MAX_ITERATIONS {
        let eot_days = equation_of_time_minutes(jd_from_moment(noon)) / 1440.0;
        let next = mean_noon - eot_days;
        let done = (next - noon).abs() < CONVERGENCE_DAYS;
        noon = next;
        if done {
            break;
        }
    }
    noon
}

/// Sunrise for the civil day `date`, as a local standard-time moment.
pub fn sunrise(date: i64, location: &Location) -> RiseSetResult {
    rise_set_event(date, location, true)
}

/// Sunset for the civil day `date`, as a local standard-time moment.
pub fn sunset(date: i64, location: &Location) -> RiseSetResult {
    rise_set_event(date, location, false)
}

fn rise_set_event(date: i64, location: &Location, rising: bool) -> RiseSetResult {
    let noon = solar_noon(date, location);
    let phi = location.latitude_rad();
    let h0 = RISE_SET_ALTITUDE_DEG.to_radians();

    let mut event = noon;
    for _ in 0..MAX_ITERATIONS {
        let dec = solar_declination_deg(jd_from_moment(event)).to_radians();
        let cos_ha = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_ha > 1.0 {
            return RiseSetResult::NeverRises;
        }
        if cos_ha < -1.0 {
            return RiseSetResult::NeverSets;
        }

        let ha_days = cos_ha.acos().to_degrees() / 360.0;
        let next = if rising { noon - ha_days } else { noon + ha_days };
        let done = (next - event).abs() < CONVERGENCE_DAYS;
        event = next;
        if done {
            break;
        }
    }

    RiseSetResult::Event {
        moment: standard_from_universal(event, location),
    }
}
