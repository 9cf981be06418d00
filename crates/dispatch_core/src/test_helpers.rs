//! Test helpers for common test setup and utilities.
//!
//! Fixtures sit around a fixed base point so every test reuses the same
//! geography. 0.01 degrees of latitude is roughly 1.1 km.

use crate::model::{Destination, Incident, Responder};

pub const BASE_LAT: f64 = 34.0;
pub const BASE_LON: f64 = -77.0;

/// Latitude `dlat` degrees north of the base point.
pub fn offset_north(dlat: f64) -> f64 {
    BASE_LAT + dlat
}

/// Incident with no medical need.
pub fn incident_at(id: &str, num_people: i64, lat: f64, lon: f64) -> Incident {
    Incident {
        id: id.to_string(),
        num_people,
        medical_needed: false,
        lat,
        lon,
        reported_time: 0,
        reporter_id: "reporter-1".to_string(),
    }
}

/// Unmanned responder without medical capability.
pub fn responder_at(id: &str, boat_capacity: i64, lat: f64, lon: f64) -> Responder {
    Responder {
        id: id.to_string(),
        full_name: format!("Responder {id}"),
        boat_capacity,
        has_medical: false,
        lat,
        lon,
        phone_number: String::new(),
        is_person: false,
    }
}

pub fn destination_at(name: &str, lat: f64, lon: f64) -> Destination {
    Destination {
        name: name.to_string(),
        lat,
        lon,
    }
}
