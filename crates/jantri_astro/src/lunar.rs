//! Truncated-series lunar longitude and the Moon−Sun phase angle.
//!
//! The longitude series keeps the principal periodic terms of the standard
//! lunar theory (Meeus ch. 47 ordering) plus the Venus/Jupiter additive
//! terms. Worst-case error is a few hundredths of a degree, i.e. phase-event
//! times good to a handful of minutes.

use jantri_time::jd_from_moment;

use crate::solar::{julian_centuries, solar_true_longitude_deg};
use crate::util::normalize_360;

/// One periodic term: multiples of (D, M, M', F) and the coefficient in
/// millionths of a degree. Terms involving M are scaled by E^|M| for the
/// secular change in Earth's orbital eccentricity.
struct LongitudeTerm {
    d: i32,
    m: i32,
    mp: i32,
    f: i32,
    coeff: f64,
}

const LONGITUDE_TERMS: [LongitudeTerm; 30] = [
    LongitudeTerm { d: 0, m: 0, mp: 1, f: 0, coeff: 6_288_774.0 },
    LongitudeTerm { d: 2, m: 0, mp: -1, f: 0, coeff: 1_274_027.0 },
    LongitudeTerm { d: 2, m: 0, mp: 0, f: 0, coeff: 658_314.0 },
    LongitudeTerm { d: 0, m: 0, mp: 2, f: 0, coeff: 213_618.0 },
    LongitudeTerm { d: 0, m: 1, mp: 0, f: 0, coeff: -185_116.0 },
    LongitudeTerm { d: 0, m: 0, mp: 0, f: 2, coeff: -114_332.0 },
    LongitudeTerm { d: 2, m: 0, mp: -2, f: 0, coeff: 58_793.0 },
    LongitudeTerm { d: 2, m: -1, mp: -1, f: 0, coeff: 57_066.0 },
    LongitudeTerm { d: 2, m: 0, mp: 1, f: 0, coeff: 53_322.0 },
    LongitudeTerm { d: 2, m: -1, mp: 0, f: 0, coeff: 45_758.0 },
    LongitudeTerm { d: 0, m: 1, mp: -1, f: 0, coeff: -40_923.0 },
    LongitudeTerm { d: 1, m: 0, mp: 0, f: 0, coeff: -34_720.0 },
    LongitudeTerm { d: 0, m: 1, mp: 1, f: 0, coeff: -30_383.0 },
    LongitudeTerm { d: 2, m: 0, mp: 0, f: -2, coeff: 15_327.0 },
    LongitudeTerm { d: 0, m: 0, mp: 1, f: 2, coeff: -12_528.0 },
    LongitudeTerm { d: 0, m: 0, mp: 1, f: -2, coeff: 10_980.0 },
    LongitudeTerm { d: 4, m: 0, mp: -1, f: 0, coeff: 10_675.0 },
    LongitudeTerm { d: 0, m: 0, mp: 3, f: 0, coeff: 10_034.0 },
    LongitudeTerm { d: 4, m: 0, mp: -2, f: 0, coeff: 8_548.0 },
    LongitudeTerm { d: 2, m: 1, mp: -1, f: 0, coeff: -7_888.0 },
    LongitudeTerm { d: 2, m: 1, mp: 0, f: 0, coeff: -6_766.0 },
    LongitudeTerm { d: 1, m: 0, mp: -1, f: 0, coeff: -5_163.0 },
    LongitudeTerm { d: 1, m: 1, mp: 0, f: 0, coeff: 4_987.0 },
    LongitudeTerm { d: 2, m: -1, mp: 1, f: 0, coeff: 4_036.0 },
    LongitudeTerm { d: 2, m: 0, mp: 2, f: 0, coeff: 3_994.0 },
    LongitudeTerm { d: 4, m: 0, mp: 0, f: 0, coeff: 3_861.0 },
    LongitudeTerm { d: 2, m: 0, mp: -3, f: 0, coeff: 3_665.0 },
    LongitudeTerm { d: 0, m: 1, mp: -2, f: 0, coeff: -2_689.0 },
    LongitudeTerm { d: 2, m: 0, mp: -1, f: 2, coeff: -2_602.0 },
    LongitudeTerm { d: 2, m: -1, mp: -2, f: 0, coeff: 2_390.0 },
];

/// Geocentric ecliptic longitude of the Moon in degrees [0, 360).
pub fn lunar_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    // Fundamental arguments, degrees
    let lp = 218.316_447_7
        + t * (481_267.881_234_21 + t * (-0.001_578_6 + t * (1.0 / 538_841.0 - t / 65_194_000.0)));
    let d = 297.850_192_1
        + t * (445_267.111_403_4 + t * (-0.001_881_9 + t * (1.0 / 545_868.0 - t / 113_065_000.0)));
    let m = 357.529_109_2 + t * (35_999.050_290_9 + t * (-0.000_153_6 + t / 24_490_000.0));
    let mp = 134.963_396_4
        + t * (477_198.867_505_5 + t * (0.008_741_4 + t * (1.0 / 69_699.0 - t / 14_712_000.0)));
    let f = 93.272_095_0
        + t * (483_202.017_523_3 + t * (-0.003_653_9 + t * (-1.0 / 3_526_000.0 + t / 863_310_000.0)));

    let e = 1.0 - t * (0.002_516 + t * 0.000_007_4);

    let (lp, d, m, mp, f) = (
        lp.to_radians(),
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sum = 0.0;
    for term in &LONGITUDE_TERMS {
        let arg = term.d as f64 * d + term.m as f64 * m + term.mp as f64 * mp + term.f as f64 * f;
        let scale = match term.m.abs() {
            0 => 1.0,
            1 => e,
            _ => e * e,
        };
        sum += term.coeff * scale * arg.sin();
    }

    // Additive terms: Venus (A1), Jupiter (A2), and the flattening term
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3_958.0 * a1.sin() + 1_962.0 * (lp - f).sin() + 318.0 * a2.sin();

    normalize_360(lp.to_degrees() + sum / 1.0e6)
}

/// Lunar phase angle at a moment: Moon minus Sun longitude, degrees [0, 360).
///
/// 0 is new moon, 180 full moon.
pub fn lunar_phase_angle(moment: f64) -> f64 {
    let jd = jd_from_moment(moment);
    normalize_360(lunar_longitude_deg(jd) - solar_true_longitude_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jantri_time::moment_from_unix;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12T00:00 TD: longitude 133.162655° (full theory).
        // The truncated series must land within a few hundredths of a degree.
        let lon = lunar_longitude_deg(2_448_724.5);
        assert!((lon - 133.1626).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn phase_near_new_moon() {
        // 2024-01-11T11:57Z was a new moon
        let moment = moment_from_unix(1_704_974_220);
        let phase = lunar_phase_angle(moment);
        let dist = phase.min(360.0 - phase);
        assert!(dist < 1.0, "phase at new moon = {phase}");
    }

    #[test]
    fn phase_near_full_moon() {
        // 2024-01-25T17:54Z was a full moon
        let moment = moment_from_unix(1_706_205_240);
        let phase = lunar_phase_angle(moment);
        assert!((phase - 180.0).abs() < 1.0, "phase at full moon = {phase}");
    }

    #[test]
    fn phase_advances_daily() {
        let m0 = moment_from_unix(1_704_974_220);
        let p0 = lunar_phase_angle(m0);
        let p1 = lunar_phase_angle(m0 + 1.0);
        // Mean elongation rate ≈ 12.19°/day
        let advance = (p1 - p0).rem_euclid(360.0);
        assert!(advance > 10.0 && advance < 15.0, "advance = {advance}");
    }
}
