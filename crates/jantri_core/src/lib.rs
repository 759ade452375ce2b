//! The two jantri operations: astronomical event times for Amritsar and
//! Bikrami lunar date → Gregorian conversion.
//!
//! Both operations are stateless request/response computations. The
//! calculators hold only their injected collaborators (observer location,
//! positional school), never cached results, so concurrent use needs no
//! locking.

pub mod astro_times;
pub mod astro_times_types;
pub mod bikrami;
pub mod bikrami_types;

pub use astro_times::{AstroTimeCalculator, calculate_astro_times};
pub use astro_times_types::{AstroTimes, MoonTimes, SunTimes};
pub use bikrami::{BikramiConverter, GREGORIAN_ADOPTION_JD, gregorian_from_bikrami};
pub use bikrami_types::{
    EnglishDate, GregorianResult, JulianCalendarDate, LunarDate, PunjabiDate,
};
