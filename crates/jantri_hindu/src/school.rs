//! Positional schools and their yuga revolution counts.
//!
//! A mahāyuga spans 4,320,000 solar years. Each school fixes how many
//! revolutions the Sun, the Moon, and the star sphere complete in that span;
//! every other quantity of the calendar arithmetic derives from those three.

/// Revolutions of a body in one mahāyuga.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YugaRotations {
    pub sun: i64,
    pub moon: i64,
    pub star: i64,
}

/// The positional school selecting the revolution counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HinduSchool {
    /// Classical Surya Siddhanta revolution counts.
    #[default]
    SuryaSiddhanta,
    /// Revised counts used by modern pancanga computations.
    Modern,
}

impl HinduSchool {
    pub const fn rotations(self) -> YugaRotations {
        match self {
            Self::SuryaSiddhanta => YugaRotations {
                sun: 4_320_000,
                moon: 57_753_336,
                star: 1_582_237_800,
            },
            Self::Modern => YugaRotations {
                sun: 4_320_000,
                moon: 57_753_336,
                star: 1_582_237_828,
            },
        }
    }
}

/// Aggregates over one mahāyuga derived from the revolution counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yuga {
    /// Civil days: star revolutions minus sun revolutions.
    pub civil_days: i64,
    /// Synodic (candra) months: moon minus sun revolutions.
    pub synodic_months: i64,
    /// Solar (saura) months: twelve per solar year.
    pub saura_masas: i64,
    /// Intercalary (adhika) months: synodic minus saura months.
    pub adhimasas: i64,
    /// Tithis: thirty per synodic month.
    pub tithis: i64,
    /// Omitted (kṣaya) days: tithis minus civil days.
    pub ksaya_days: i64,
}

impl Yuga {
    pub const fn for_school(school: HinduSchool) -> Self {
        let r = school.rotations();
        let synodic_months = r.moon - r.sun;
        let saura_masas = r.sun * 12;
        let civil_days = r.star - r.sun;
        let tithis = synodic_months * 30;
        Self {
            civil_days,
            synodic_months,
            saura_masas,
            adhimasas: synodic_months - saura_masas,
            tithis,
            ksaya_days: tithis - civil_days,
        }
    }
}
