//! Result records for the Bikrami → Gregorian conversion.
//!
//! The display records always carry the caller's original (year, month,
//! tithi, paksh) values; the internally adjusted Saka year, month index,
//! and tithi day used for the ahargana never appear here.

use jantri_hindu::JulianDate;
use jantri_time::GregorianDate;

/// English-script display form of the input Bikrami date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnglishDate {
    pub year: i32,
    pub month: i32,
    pub month_name: &'static str,
    pub paksh: &'static str,
    pub tithi: i32,
}

/// Gurmukhi-script display form of the input Bikrami date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunjabiDate {
    pub year: String,
    pub month: String,
    pub month_name: &'static str,
    pub paksh: &'static str,
    pub tithi: String,
}

/// Round-trip metadata for the converted lunar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarDate {
    /// Civil days since the Kali epoch.
    pub ahargana: i64,
    pub english_date: EnglishDate,
    pub punjabi_date: PunjabiDate,
    /// True exactly when the input is Sudi tithi 15 (full-moon day).
    pub pooranmashi: bool,
}

/// Julian calendar date attached for dates before the Gregorian adoption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JulianCalendarDate {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub day: u32,
}

impl JulianCalendarDate {
    pub fn from_julian_date(date: JulianDate, month_name: &'static str) -> Self {
        Self {
            year: date.year,
            month: date.month,
            month_name,
            day: date.day,
        }
    }
}

/// Full conversion result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GregorianResult {
    pub gregorian_date: GregorianDate,
    /// Integer Julian day number of the converted date.
    pub julian_day: i64,
    pub lunar_date: LunarDate,
    /// Present only when `julian_day` precedes the Gregorian adoption.
    pub julian_date: Option<JulianCalendarDate>,
}
