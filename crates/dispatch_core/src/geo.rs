//! Geographic primitives: fixed-precision coordinates and haversine distance.
//!
//! Coordinates are carried as integer micro-degrees (six fractional digits) so
//! that "the same" location reported by different callers compares equal after
//! rounding. Distances use a spherical Earth of radius 6371 km.

use crate::error::InputError;

/// Mean Earth radius used by the haversine formula (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Micro-degrees per degree (six fractional digits).
const MICROS_PER_DEGREE: f64 = 1_000_000.0;

/// A validated latitude/longitude pair at six-digit fixed precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    lat_micros: i64,
    lon_micros: i64,
}

impl Coordinate {
    /// Build a coordinate from decimal degrees, rounding half away from zero.
    ///
    /// Rejects non-finite values and values outside `[-90, 90]` latitude /
    /// `[-180, 180]` longitude.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InputError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InputError::NonFiniteCoordinate { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(InputError::CoordinateOutOfRange { lat, lon });
        }
        Ok(Self {
            lat_micros: to_micros(lat),
            lon_micros: to_micros(lon),
        })
    }

    pub fn lat(&self) -> f64 {
        self.lat_micros as f64 / MICROS_PER_DEGREE
    }

    pub fn lon(&self) -> f64 {
        self.lon_micros as f64 / MICROS_PER_DEGREE
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_meters(&self, other: &Coordinate) -> f64 {
        distance_meters(*self, *other)
    }
}

fn to_micros(degrees: f64) -> i64 {
    (degrees * MICROS_PER_DEGREE).round() as i64
}

/// Round a decimal-degree value to six fractional digits.
///
/// Non-finite values pass through unchanged.
pub fn round_to_fixed(degrees: f64) -> f64 {
    if degrees.is_finite() {
        to_micros(degrees) as f64 / MICROS_PER_DEGREE
    } else {
        degrees
    }
}

/// Haversine distance between two coordinates in meters.
pub fn distance_meters(a: Coordinate, b: Coordinate) -> f64 {
    haversine_meters(a.lat(), a.lon(), b.lat(), b.lon())
}

/// Haversine distance over raw decimal degrees, in meters.
///
/// Returns `f64::INFINITY` when any input is non-finite so that callers
/// holding unvalidated data never see a pair as "close".
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if !(lat1.is_finite() && lon1.is_finite() && lat2.is_finite() && lon2.is_finite()) {
        return f64::INFINITY;
    }
    let (lat1_rad, lat2_rad) = (lat1.to_radians(), lat2.to_radians());
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let sin_dlat = (dlat * 0.5).sin();
    let sin_dlon = (dlon * 0.5).sin();
    // rounding can push `h` just past 1 for near-antipodal pairs
    let h = (sin_dlat * sin_dlat + lat1_rad.cos() * lat2_rad.cos() * sin_dlon * sin_dlon)
        .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c * 1000.0
}
