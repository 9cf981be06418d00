#![allow(dead_code)]

use dispatch_core::model::{Destination, Incident, Responder};
use dispatch_core::test_helpers::{offset_north, BASE_LAT, BASE_LON};

/// Builder for incident fixtures placed around the shared base point.
#[derive(Clone, Debug)]
pub struct IncidentBuilder {
    id: String,
    num_people: i64,
    medical_needed: bool,
    lat: f64,
    lon: f64,
    reported_time: u64,
}

impl IncidentBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            num_people: 2,
            medical_needed: false,
            lat: BASE_LAT,
            lon: BASE_LON,
            reported_time: 0,
        }
    }

    pub fn with_people(mut self, count: i64) -> Self {
        self.num_people = count;
        self
    }

    pub fn needing_medical(mut self) -> Self {
        self.medical_needed = true;
        self
    }

    /// Move the incident `dlat` degrees north of the base point.
    pub fn north(mut self, dlat: f64) -> Self {
        self.lat = offset_north(dlat);
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn reported_at(mut self, timestamp_ms: u64) -> Self {
        self.reported_time = timestamp_ms;
        self
    }

    pub fn build(self) -> Incident {
        Incident {
            id: self.id,
            num_people: self.num_people,
            medical_needed: self.medical_needed,
            lat: self.lat,
            lon: self.lon,
            reported_time: self.reported_time,
            reporter_id: "reporter-1".to_string(),
        }
    }
}

/// Builder for responder fixtures; defaults to an unmanned boat without medical kit.
#[derive(Clone, Debug)]
pub struct ResponderBuilder {
    id: String,
    capacity: i64,
    has_medical: bool,
    is_person: bool,
    lat: f64,
    lon: f64,
}

impl ResponderBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            capacity: 4,
            has_medical: false,
            is_person: false,
            lat: BASE_LAT,
            lon: BASE_LON,
        }
    }

    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_medical(mut self) -> Self {
        self.has_medical = true;
        self
    }

    pub fn as_person(mut self) -> Self {
        self.is_person = true;
        self
    }

    pub fn north(mut self, dlat: f64) -> Self {
        self.lat = offset_north(dlat);
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn build(self) -> Responder {
        Responder {
            full_name: format!("Volunteer {}", self.id),
            id: self.id,
            boat_capacity: self.capacity,
            has_medical: self.has_medical,
            lat: self.lat,
            lon: self.lon,
            phone_number: "(910) 555-0100".to_string(),
            is_person: self.is_person,
        }
    }
}

pub fn destination_north(name: &str, dlat: f64) -> Destination {
    Destination {
        name: name.to_string(),
        lat: offset_north(dlat),
        lon: BASE_LON,
    }
}
