use crate::config::ScoringConfig;
use crate::geo::distance_meters;
use crate::model::{Incident, Responder};

use super::scorer::CompatibilityScorer;
use super::types::{Score, ScoreBreakdown};

/// Additive scorer: distance tier + capacity tightness + medical + human responder.
#[derive(Debug, Clone, Default)]
pub struct TieredScorer {
    pub config: ScoringConfig,
}

impl TieredScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a pair and keep the individual components.
    pub fn breakdown(&self, incident: &Incident, responder: &Responder) -> Option<ScoreBreakdown> {
        if incident.num_people <= 0 || responder.boat_capacity < incident.num_people {
            return None;
        }
        let incident_pos = incident.coordinate().ok()?;
        let responder_pos = responder.coordinate().ok()?;
        let distance = distance_meters(incident_pos, responder_pos);

        Some(ScoreBreakdown {
            distance_meters: distance,
            distance_points: self.distance_points(distance),
            capacity_points: self.capacity_points(responder.boat_capacity, incident.num_people),
            medical_points: if incident.medical_needed && responder.has_medical {
                self.config.medical_points
            } else {
                0
            },
            person_points: if responder.is_person {
                self.config.person_points
            } else {
                0
            },
        })
    }

    fn distance_points(&self, distance_m: f64) -> u32 {
        self.config
            .tier_bounds_m
            .iter()
            .zip(self.config.tier_points.iter())
            .find(|(bound, _)| distance_m < **bound)
            .map(|(_, points)| *points)
            .unwrap_or(self.config.remote_points)
    }

    /// Tightest fit first; callers guarantee `capacity >= people`.
    fn capacity_points(&self, capacity: i64, people: i64) -> u32 {
        let spare = capacity - people;
        if spare == 0 {
            self.config.exact_capacity_points
        } else if spare <= i64::from(self.config.tight_capacity_slack) {
            self.config.tight_capacity_points
        } else if spare <= i64::from(self.config.loose_capacity_slack) {
            self.config.loose_capacity_points
        } else {
            0
        }
    }
}

impl CompatibilityScorer for TieredScorer {
    fn score(&self, incident: &Incident, responder: &Responder) -> Option<Score> {
        self.breakdown(incident, responder).map(|b| b.score())
    }
}
