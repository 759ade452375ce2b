//! Observer location and local standard-time handling.
//!
//! The zone offset is a fixed statutory offset (no DST); standard time at a
//! location is universal time plus that offset.

/// Geographic location of an observer with its civil time zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Elevation above sea level in meters.
    pub elevation_m: f64,
    /// Civil zone offset from universal time in hours, east positive.
    pub zone_hours: f64,
}

impl Location {
    pub const fn latitude_rad(&self) -> f64 {
        self.latitude_deg * (std::f64::consts::PI / 180.0)
    }

    pub const fn longitude_rad(&self) -> f64 {
        self.longitude_deg * (std::f64::consts::PI / 180.0)
    }
}

/// Amritsar (31°38′ N, 74°52′ E, 230 m), Indian Standard Time (UTC+5:30).
pub const AMRITSAR: Location = Location {
    latitude_deg: 31.0 + 38.0 / 60.0,
    longitude_deg: 74.0 + 52.0 / 60.0,
    elevation_m: 230.0,
    zone_hours: 5.5,
};

/// Convert a local standard-time moment to universal time.
pub fn universal_from_standard(moment: f64, location: &Location) -> f64 {
    moment - location.zone_hours / 24.0
}

/// Convert a universal-time moment to local standard time.
pub fn standard_from_universal(moment: f64, location: &Location) -> f64 {
    moment + location.zone_hours / 24.0
}
