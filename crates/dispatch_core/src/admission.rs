//! Priority-based admission: decides whether an incident competes for a
//! responder in the current cycle, independently of capacity or distance fit.

use crate::config::AdmissionConfig;
use crate::model::IncidentPriorityStats;

/// Outcome of the admission check, with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdmissionDecision {
    /// No stats supplied for the incident.
    NoStats,
    /// Stats present but unusable; treated like no stats.
    MalformedStats,
    /// Priority 0 is a hard block, escalated or not.
    ZeroPriority,
    Escalated,
    AtOrAboveAverage,
    /// Low below-average priority with few enough incidents waiting.
    WaitingRatioOk,
    WaitingRatioExceeded,
    /// Low below-average priority while no responder is left in the pool.
    NoRespondersAvailable,
    /// Higher below-average priority still above half the average.
    HalfAverageOk,
    BelowHalfAverage,
}

impl AdmissionDecision {
    pub fn is_eligible(self) -> bool {
        matches!(
            self,
            AdmissionDecision::NoStats
                | AdmissionDecision::MalformedStats
                | AdmissionDecision::Escalated
                | AdmissionDecision::AtOrAboveAverage
                | AdmissionDecision::WaitingRatioOk
                | AdmissionDecision::HalfAverageOk
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdmissionGate {
    config: AdmissionConfig,
}

impl AdmissionGate {
    pub fn new(config: AdmissionConfig) -> Self {
        Self { config }
    }

    /// `available_responders` is the size of the unassigned pool at the time
    /// of the check, not the pool size at the start of the cycle.
    pub fn evaluate(
        &self,
        stats: Option<&IncidentPriorityStats>,
        available_responders: usize,
    ) -> AdmissionDecision {
        let Some(stats) = stats else {
            return AdmissionDecision::NoStats;
        };
        if stats.validate().is_err() {
            return AdmissionDecision::MalformedStats;
        }
        if stats.priority == 0.0 {
            return AdmissionDecision::ZeroPriority;
        }
        if stats.escalated {
            return AdmissionDecision::Escalated;
        }
        if stats.priority >= stats.average_priority {
            return AdmissionDecision::AtOrAboveAverage;
        }

        if stats.priority <= self.config.low_priority_ceiling {
            if available_responders == 0 {
                return AdmissionDecision::NoRespondersAvailable;
            }
            let allowed_waiting =
                available_responders as f64 / self.config.responders_per_waiting_incident;
            if f64::from(stats.incidents_waiting) <= allowed_waiting {
                AdmissionDecision::WaitingRatioOk
            } else {
                AdmissionDecision::WaitingRatioExceeded
            }
        } else if stats.priority > stats.average_priority / 2.0 {
            AdmissionDecision::HalfAverageOk
        } else {
            AdmissionDecision::BelowHalfAverage
        }
    }

    pub fn is_eligible(
        &self,
        stats: Option<&IncidentPriorityStats>,
        available_responders: usize,
    ) -> bool {
        self.evaluate(stats, available_responders).is_eligible()
    }
}
