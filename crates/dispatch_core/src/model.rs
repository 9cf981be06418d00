//! Input records and the mission output of one dispatch cycle.
//!
//! Field names serialize in camelCase to match the external snapshot format.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::geo::{round_to_fixed, Coordinate};

/// A reported location with people requiring rescue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub num_people: i64,
    #[serde(default)]
    pub medical_needed: bool,
    pub lat: f64,
    pub lon: f64,
    /// Report timestamp (epoch milliseconds).
    #[serde(default)]
    pub reported_time: u64,
    #[serde(default)]
    pub reporter_id: String,
}

impl Incident {
    pub fn coordinate(&self) -> Result<Coordinate, InputError> {
        Coordinate::new(self.lat, self.lon)
    }

    /// Check the record can take part in matching and return its coordinate.
    pub fn validate(&self) -> Result<Coordinate, InputError> {
        if self.num_people <= 0 {
            return Err(InputError::NonPositivePeopleCount(self.num_people));
        }
        self.coordinate()
    }
}

/// A boat, vehicle or volunteer able to perform a rescue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responder {
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    pub boat_capacity: i64,
    #[serde(default)]
    pub has_medical: bool,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub phone_number: String,
    /// Human volunteer rather than an unmanned asset.
    #[serde(default)]
    pub is_person: bool,
}

impl Responder {
    pub fn coordinate(&self) -> Result<Coordinate, InputError> {
        Coordinate::new(self.lat, self.lon)
    }

    pub fn validate(&self) -> Result<Coordinate, InputError> {
        if self.boat_capacity <= 0 {
            return Err(InputError::NonPositiveCapacity(self.boat_capacity));
        }
        self.coordinate()
    }
}

/// A drop-off point. Never consumed; several missions may share one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Destination {
    pub fn coordinate(&self) -> Result<Coordinate, InputError> {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Pre-computed priority statistics for one incident.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentPriorityStats {
    pub priority: f64,
    pub average_priority: f64,
    pub incidents_waiting: u32,
    /// Incident lies inside a declared priority zone.
    #[serde(default)]
    pub escalated: bool,
}

impl IncidentPriorityStats {
    pub fn new(priority: f64, average_priority: f64, incidents_waiting: u32) -> Self {
        Self {
            priority,
            average_priority,
            incidents_waiting,
            escalated: false,
        }
    }

    pub fn escalated(mut self) -> Self {
        self.escalated = true;
        self
    }

    /// Stats with non-finite or negative numbers are unusable.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.priority.is_finite() || !self.average_priority.is_finite() {
            return Err(InputError::MalformedPriorityStats(format!(
                "non-finite priority {} / average {}",
                self.priority, self.average_priority
            )));
        }
        if self.priority < 0.0 || self.average_priority < 0.0 {
            return Err(InputError::MalformedPriorityStats(format!(
                "negative priority {} / average {}",
                self.priority, self.average_priority
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatus {
    Unassigned,
    Assigned,
}

/// Outcome record for one incident in one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub incident_id: String,
    pub incident_lat: f64,
    pub incident_lon: f64,
    pub responder_id: Option<String>,
    pub responder_start_lat: Option<f64>,
    pub responder_start_lon: Option<f64>,
    pub destination_lat: Option<f64>,
    pub destination_lon: Option<f64>,
    pub distance_meters: Option<f64>,
    pub score: Option<u32>,
    pub status: MissionStatus,
}

impl Mission {
    /// A fresh, unassigned mission for `incident`.
    pub fn unassigned(incident: &Incident) -> Self {
        Self {
            incident_id: incident.id.clone(),
            incident_lat: round_to_fixed(incident.lat),
            incident_lon: round_to_fixed(incident.lon),
            responder_id: None,
            responder_start_lat: None,
            responder_start_lon: None,
            destination_lat: None,
            destination_lon: None,
            distance_meters: None,
            score: None,
            status: MissionStatus::Unassigned,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.status == MissionStatus::Assigned
    }

    /// Bind a responder to this mission. A mission is assigned at most once.
    pub(crate) fn assign(
        &mut self,
        responder: &Responder,
        responder_start: Coordinate,
        distance_meters: f64,
        score: u32,
        destination: Option<Coordinate>,
    ) {
        debug_assert_eq!(self.status, MissionStatus::Unassigned);
        self.responder_id = Some(responder.id.clone());
        self.responder_start_lat = Some(responder_start.lat());
        self.responder_start_lon = Some(responder_start.lon());
        self.distance_meters = Some(distance_meters);
        self.score = Some(score);
        if let Some(dest) = destination {
            self.destination_lat = Some(dest.lat());
            self.destination_lon = Some(dest.lon());
        }
        self.status = MissionStatus::Assigned;
    }
}
