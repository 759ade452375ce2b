//! Low-precision solar position.
//!
//! Standard short-series solar theory (Meeus, NOAA): mean elements plus the
//! equation of center, good to well under an arcminute over several
//! millennia around the present.

use crate::util::normalize_360;

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian centuries since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Geometric mean longitude of the Sun in degrees.
fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.46646 + t * (36_000.76983 + t * 0.000_303_2))
}

/// Mean anomaly of the Sun in degrees.
fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.52911 + t * (35_999.05029 - t * 0.000_153_7))
}

/// Eccentricity of Earth's orbit.
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7)
}

/// Equation of center in degrees.
fn equation_of_center_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914_602 - t * (0.004_817 + t * 0.000_014)) * m.sin()
        + (0.019_993 - t * 0.000_101) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Geometric true ecliptic longitude of the Sun in degrees [0, 360).
pub fn solar_true_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    normalize_360(mean_longitude_deg(t) + equation_of_center_deg(t))
}

/// Mean obliquity of the ecliptic in degrees.
fn mean_obliquity_deg(t: f64) -> f64 {
    // 23°26'21.448" - 46.8150"T - 0.00059"T² + 0.001813"T³
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813))) / 60.0) / 60.0
}

/// Longitude of the ascending lunar node in degrees (for apparent place).
fn node_longitude_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Apparent declination of the Sun in degrees.
pub fn solar_declination_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let omega = node_longitude_deg(t).to_radians();
    let lambda =
        (solar_true_longitude_deg(jd) - 0.005_69 - 0.004_78 * omega.sin()).to_radians();
    let eps = (mean_obliquity_deg(t) + 0.002_56 * omega.cos()).to_radians();
    (eps.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
pub fn equation_of_time_minutes(jd: f64) -> f64 {
    let t = julian_centuries(jd);
    let l0 = mean_longitude_deg(t).to_radians();
    let m = mean_anomaly_deg(t).to_radians();
    let e = eccentricity(t);
    let eps = mean_obliquity_deg(t).to_radians();
    let y = (eps / 2.0).tan().powi(2);

    let etime = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    etime.to_degrees() * 4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centuries_at_epoch() {
        assert!((julian_centuries(J2000_JD)).abs() < 1e-15);
    }

    #[test]
    fn true_longitude_near_equinox() {
        // 2024-03-20 ~03:06 UT was the March equinox: longitude ≈ 0°
        let jd = 2_460_389.63;
        let lon = solar_true_longitude_deg(jd);
        let dist = lon.min(360.0 - lon);
        assert!(dist < 0.05, "longitude at equinox = {lon}");
    }

    #[test]
    fn declination_bounded_by_obliquity() {
        for k in 0..366 {
            let jd = 2_460_310.5 + k as f64;
            let dec = solar_declination_deg(jd);
            assert!(dec.abs() < 23.5, "dec = {dec} at jd = {jd}");
        }
    }

    #[test]
    fn declination_sign_at_solstices() {
        // 2024-06-20 (June solstice): max northern declination
        let june = solar_declination_deg(2_460_482.0);
        assert!(june > 23.0, "june dec = {june}");
        // 2024-12-21 (December solstice): max southern declination
        let december = solar_declination_deg(2_460_666.0);
        assert!(december < -23.0, "december dec = {december}");
    }

    #[test]
    fn equation_of_time_bounds() {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for k in 0..366 {
            let eot = equation_of_time_minutes(2_460_310.5 + k as f64);
            min = min.min(eot);
            max = max.max(eot);
        }
        // Annual extremes: about -14 min (February) and +16 min (November)
        assert!(min < -13.0 && min > -15.5, "min EoT = {min}");
        assert!(max > 15.0 && max < 17.5, "max EoT = {max}");
    }

    #[test]
    fn equation_of_time_november_peak() {
        // Early November: EoT ≈ +16.4 minutes
        let eot = equation_of_time_minutes(2_460_617.5);
        assert!(eot > 15.5 && eot < 17.0, "EoT = {eot}");
    }
}
