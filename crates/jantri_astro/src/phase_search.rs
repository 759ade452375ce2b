//! Search for lunar phase crossings.
//!
//! Estimates the crossing from the mean synodic rate, then bisects on the
//! signed phase difference inside a ±2 day bracket. The elongation changes
//! about 12.2°/day, so the difference is monotonic within the bracket and
//! never wraps.

use crate::error::AstroError;
use crate::lunar::lunar_phase_angle;
use crate::util::{normalize_360, normalize_pm180};

/// Mean length of the synodic month in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_861;

/// Bisection tolerance in days (~1 second).
const PHASE_TOLERANCE_DAYS: f64 = 1.0e-5;

/// Maximum bisection iterations before giving up.
const MAX_BISECTIONS: usize = 50;

/// Moment of the first time at or after `moment` that the lunar phase angle
/// equals `target_deg`.
pub fn phase_at_or_after(target_deg: f64, moment: f64) -> Result<f64, AstroError> {
    let target = normalize_360(target_deg);
    let phase = lunar_phase_angle(moment);
    let delta = normalize_360(target - phase);
    if delta == 0.0 {
        return Ok(moment);
    }

    let tau = moment + MEAN_SYNODIC_MONTH * delta / 360.0;
    let mut lo = moment.max(tau - 2.0);
    let mut hi = tau + 2.0;

    let diff = |t: f64| normalize_pm180(lunar_phase_angle(t) - target);

    if diff(lo) > 0.0 || diff(hi) < 0.0 {
        return Err(AstroError::NoConvergence("phase crossing not bracketed"));
    }

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if diff(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        if hi - lo < PHASE_TOLERANCE_DAYS {
            return Ok(0.5 * (lo + hi));
        }
    }

    Err(AstroError::NoConvergence("phase bisection did not converge"))
}

/// Moment of the first new moon at or after `moment`.
pub fn new_moon_at_or_after(moment: f64) -> Result<f64, AstroError> {
    phase_at_or_after(0.0, moment)
}
