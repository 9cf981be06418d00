//! Dispatch configuration: scoring points, admission thresholds, execution knobs.
//!
//! Every struct has a `Default` carrying the standard constants and is
//! `#[serde(default)]`, so a partial JSON file overrides only what it names.

use serde::{Deserialize, Serialize};

/// Points and distance thresholds used by [`crate::matching::TieredScorer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Upper bounds (exclusive, meters) of the near, mid and far distance tiers.
    pub tier_bounds_m: [f64; 3],
    /// Points for the near, mid and far tiers.
    pub tier_points: [u32; 3],
    /// Points when the pair is beyond the last tier bound.
    pub remote_points: u32,
    pub exact_capacity_points: u32,
    /// Spare seats allowed for the "tight" bonus.
    pub tight_capacity_slack: u32,
    pub tight_capacity_points: u32,
    pub loose_capacity_slack: u32,
    pub loose_capacity_points: u32,
    pub medical_points: u32,
    pub person_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tier_bounds_m: [5_000.0, 10_000.0, 15_000.0],
            tier_points: [100, 75, 50],
            remote_points: 25,
            exact_capacity_points: 100,
            tight_capacity_slack: 2,
            tight_capacity_points: 50,
            loose_capacity_slack: 4,
            loose_capacity_points: 25,
            medical_points: 100,
            person_points: 100,
        }
    }
}

/// Thresholds for [`crate::admission::AdmissionGate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    /// Below-average incidents with priority up to this value use the waiting ratio check.
    pub low_priority_ceiling: f64,
    /// Available responders required per waiting incident for low-priority admission.
    pub responders_per_waiting_incident: f64,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            low_priority_ceiling: 5.0,
            responders_per_waiting_incident: 1.5,
        }
    }
}

/// Top-level configuration for one dispatch cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub scoring: ScoringConfig,
    pub admission: AdmissionConfig,
    /// Remaining responder pools at least this large are scored on the rayon pool.
    pub parallel_scoring_threshold: usize,
    /// Abort the pass (and discard its output) after this many milliseconds.
    pub deadline_ms: Option<u64>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            admission: AdmissionConfig::default(),
            parallel_scoring_threshold: 256,
            deadline_ms: None,
        }
    }
}

impl DispatchConfig {
    pub fn with_deadline_ms(mut self, deadline_ms: u64) -> Self {
        self.deadline_ms = Some(deadline_ms);
        self
    }

    pub fn with_parallel_scoring_threshold(mut self, threshold: usize) -> Self {
        self.parallel_scoring_threshold = threshold;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_admission(mut self, admission: AdmissionConfig) -> Self {
        self.admission = admission;
        self
    }

    /// Parse a (possibly partial) JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
