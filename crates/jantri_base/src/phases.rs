//! Lunar-phase bucket table and angle → phase-name selection.
//!
//! The 360° phase circle is partitioned proportionally to per-bucket weights,
//! in table order. Principal phases (new, quarters, full) get weight 1 and
//! the intermediate crescent/gibbous phases 6.5, so the weights total 30:
//! one weight unit per tithi of the synodic month.

use crate::util::normalize_360;

/// One row of the phase table. The weight is internal partitioning data and
/// never leaves this module.
struct PhaseBucket {
    en: &'static str,
    pa: &'static str,
    weight: f64,
}

const LUNAR_PHASES: [PhaseBucket; 8] = [
    PhaseBucket { en: "New Moon", pa: "ਮੱਸਿਆ", weight: 1.0 },
    PhaseBucket { en: "Waxing Crescent", pa: "ਚੜ੍ਹਦਾ ਚੰਦ", weight: 6.5 },
    PhaseBucket { en: "First Quarter", pa: "ਪਹਿਲੀ ਚੌਥਾਈ", weight: 1.0 },
    PhaseBucket { en: "Waxing Gibbous", pa: "ਵਧਦਾ ਚੰਦ", weight: 6.5 },
    PhaseBucket { en: "Full Moon", pa: "ਪੂਰਨਮਾਸ਼ੀ", weight: 1.0 },
    PhaseBucket { en: "Waning Gibbous", pa: "ਘਟਦਾ ਚੰਦ", weight: 6.5 },
    PhaseBucket { en: "Last Quarter", pa: "ਆਖਰੀ ਚੌਥਾਈ", weight: 1.0 },
    PhaseBucket { en: "Waning Crescent", pa: "ਲਹਿੰਦਾ ਚੰਦ", weight: 6.5 },
];

/// Caller-facing phase name in both scripts.
///
/// Freshly constructed per call; the static table is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhaseName {
    pub en: &'static str,
    pub pa: &'static str,
}

/// Select the phase bucket for a lunar phase angle in degrees.
///
/// Walks the table subtracting weights from the angle's share of the total;
/// the first bucket driving the remainder to zero or below is selected. An
/// angle that exhausts the walk (floating point at the top of the range)
/// selects the last bucket.
pub fn phase_bucket_for_angle(angle_deg: f64) -> PhaseName {
    let angle = normalize_360(angle_deg);
    let total: f64 = LUNAR_PHASES.iter().map(|p| p.weight).sum();
    let mut remaining = angle / 360.0 * total;

    for bucket in &LUNAR_PHASES {
        remaining -= bucket.weight;
        if remaining <= 0.0 {
            return PhaseName { en: bucket.en, pa: bucket.pa };
        }
    }

    let last = &LUNAR_PHASES[LUNAR_PHASES.len() - 1];
    PhaseName { en: last.en, pa: last.pa }
}
