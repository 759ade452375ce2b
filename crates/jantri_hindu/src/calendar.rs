//! Era conversion and the Kali → Ahargana day-count chain.
//!
//! The ahargana is the count of civil days elapsed since the Kali epoch
//! (18 February 3102 BCE). The chain counts expired saura months, inserts
//! the intercalary months earned so far, expands to tithis, and removes the
//! omitted days; every division truncates toward zero, matching the
//! traditional positional tables.

use crate::school::{HinduSchool, Yuga};

/// Julian day number of the Kali epoch civil day.
pub const KALI_EPOCH_JD: i64 = 588_465;

/// Years between the Saka and Kali epochs.
pub const SAKA_KALI_OFFSET: i32 = 3_179;

/// Calendar arithmetic for a chosen positional school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HinduCalendar {
    yuga: Yuga,
}

impl HinduCalendar {
    pub const fn new(school: HinduSchool) -> Self {
        Self {
            yuga: Yuga::for_school(school),
        }
    }

    /// Convert an expired Saka year to the expired Kali year.
    pub const fn saka_to_kali(year: i32) -> i32 {
        year + SAKA_KALI_OFFSET
    }

    /// Civil days from the Kali epoch to the given tithi.
    ///
    /// `month_index` is 0-based within the Kali year; `tithi_day` is the
    /// 1-based tithi counted over the whole month (1–30, the dark half
    /// occupying 16–30). Out-of-range values are folded into the day count
    /// arithmetically rather than rejected.
    pub fn kali_to_ahargana(&self, kali_year: i32, month_index: i32, tithi_day: i32) -> i64 {
        let saura_masas = kali_year as i64 * 12 + month_index as i64;
        let adhimasas = saura_masas * self.yuga.adhimasas / self.yuga.saura_masas;
        let candra_masas = saura_masas + adhimasas;
        let tithis = candra_masas * 30 + tithi_day as i64 - 1;
        let ksaya_days = tithis * self.yuga.ksaya_days / self.yuga.tithis;
        tithis - ksaya_days
    }

    /// Convert an ahargana to a Julian day number.
    pub const fn ahargana_to_julian_day(ahargana: i64) -> i64 {
        KALI_EPOCH_JD + ahargana
    }
}

impl Default for HinduCalendar {
    fn default() -> Self {
        Self::new(HinduSchool::SuryaSiddhanta)
    }
}
