//! Proleptic Gregorian calendar ↔ Julian day number conversions.
//!
//! Integer Julian day numbers label civil days by their noon: JDN 2451545
//! is 2000-01-01. The conversions are the Fliegel–Van Flandern integer
//! algorithms, valid across the whole era range this workspace touches.

use crate::moment::jd_from_moment;

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Convert an integer Julian day number to the proleptic Gregorian date
/// containing that JD's noon.
pub fn gregorian_from_jd(jd: i64) -> GregorianDate {
    let mut l = jd + 68_569;
    let n = 4 * l / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = 4000 * (l + 1) / 1_461_001;
    l = l - 1461 * i / 4 + 31;
    let j = 80 * l / 2447;
    let day = l - 2447 * j / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    GregorianDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

/// Convert a proleptic Gregorian date to its integer Julian day number.
pub fn jd_from_gregorian(date: GregorianDate) -> i64 {
    let y = date.year as i64;
    let m = date.month as i64;
    let d = date.day as i64;
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12 - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32_075
}

/// Convert a continuous moment to its Gregorian date and day fraction.
///
/// The fraction is in [0, 1): 0 is midnight, 0.5 is noon.
pub fn gregorian_from_moment(moment: f64) -> (GregorianDate, f64) {
    let jd = jd_from_moment(moment);
    let jdn = (jd + 0.5).floor();
    let frac = jd + 0.5 - jdn;
    (gregorian_from_jd(jdn as i64), frac)
}
