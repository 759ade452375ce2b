//! Bikrami lunar date → Gregorian conversion.
//!
//! The pipeline: Bikrami year → Saka year → Kali year → ahargana → Julian
//! day number → Gregorian date, with the Purnimanta month shift applied for
//! the dark half. Accuracy is that of the positional school, about ±1 day
//! against published jantris.

use jantri_base::{
    Paksh, gurmukhi_numerals, julian_month_name, month_name, month_name_gurmukhi,
};
use jantri_hindu::{HinduCalendar, HinduSchool, julian_date_from_jd};
use jantri_time::gregorian_from_jd;

use crate::bikrami_types::{
    EnglishDate, GregorianResult, JulianCalendarDate, LunarDate, PunjabiDate,
};

/// Years between the Bikrami and Saka epochs.
const BIKRAMI_SAKA_OFFSET: i32 = 135;

/// First Julian day number of the Gregorian civil calendar (1752-09-14).
/// Earlier results carry a Julian calendar date alongside the Gregorian one.
pub const GREGORIAN_ADOPTION_JD: i64 = 2_361_221;

/// Converter from Bikrami lunar dates to the Gregorian calendar.
///
/// Holds the injected calendrical collaborator; construct one per school or
/// reuse freely, there is no per-call state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BikramiConverter {
    calendar: HinduCalendar,
}

impl BikramiConverter {
    pub const fn new(calendar: HinduCalendar) -> Self {
        Self { calendar }
    }

    /// Converter using the classical Surya Siddhanta revolution counts,
    /// the school traditional Punjab jantris are reckoned against.
    pub const fn surya_siddhanta() -> Self {
        Self::new(HinduCalendar::new(HinduSchool::SuryaSiddhanta))
    }

    /// Convert a Bikrami (year, month, tithi, paksh) to the Gregorian
    /// calendar.
    ///
    /// `month` is 1-based (1 = Chet), `tithi` 1-based within the paksh
    /// (1–15). Out-of-range month or tithi values are not rejected; they
    /// flow through the day-count arithmetic and yield a deterministic but
    /// unspecified date. The display records always reflect the inputs
    /// as given.
    pub fn convert(&self, year: i32, month: i32, tithi: i32, paksh: Paksh) -> GregorianResult {
        let mut saka_year = year - BIKRAMI_SAKA_OFFSET;
        let mut month_index = month - 1;
        let mut tithi_day = tithi;

        if paksh.is_vadi() {
            // The dark half is counted past the full moon: tithis 16-30.
            tithi_day += 15;
            // Purnimanta naming: the dark half belongs to the month that
            // *ends* at the coming full moon, so step back one amanta month,
            // wrapping across the year boundary at Chet.
            if month_index <= 0 {
                month_index += 11;
                saka_year -= 1;
            } else {
                month_index -= 1;
            }
        }

        let kali_year = HinduCalendar::saka_to_kali(saka_year);
        let ahargana = self.calendar.kali_to_ahargana(kali_year, month_index, tithi_day);
        let julian_day = HinduCalendar::ahargana_to_julian_day(ahargana);

        let gregorian_date = gregorian_from_jd(julian_day);
        let pooranmashi = !paksh.is_vadi() && tithi == 15;

        let english_date = EnglishDate {
            year,
            month,
            month_name: month_name(month),
            paksh: paksh.name(),
            tithi,
        };
        let punjabi_date = PunjabiDate {
            year: gurmukhi_numerals(year as i64),
            month: gurmukhi_numerals(month as i64),
            month_name: month_name_gurmukhi(month),
            paksh: paksh.name_gurmukhi(),
            tithi: gurmukhi_numerals(tithi as i64),
        };

        GregorianResult {
            gregorian_date,
            julian_day,
            lunar_date: LunarDate {
                ahargana,
                english_date,
                punjabi_date,
                pooranmashi,
            },
            julian_date: julian_attachment(julian_day),
        }
    }
}

impl Default for BikramiConverter {
    fn default() -> Self {
        Self::surya_siddhanta()
    }
}

/// Julian calendar date for results before the Gregorian adoption; absent
/// from the adoption day onward.
fn julian_attachment(julian_day: i64) -> Option<JulianCalendarDate> {
    if julian_day < GREGORIAN_ADOPTION_JD {
        let date = julian_date_from_jd(julian_day);
        let month_name = julian_month_name(date.month);
        Some(JulianCalendarDate::from_julian_date(date, month_name))
    } else {
        None
    }
}

/// Convert with a fresh Surya Siddhanta converter.
pub fn gregorian_from_bikrami(year: i32, month: i32, tithi: i32, paksh: Paksh) -> GregorianResult {
    BikramiConverter::surya_siddhanta().convert(year, month, tithi, paksh)
}
