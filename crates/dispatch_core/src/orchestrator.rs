//! One dispatch cycle: admission, pairwise scoring, greedy consumption of
//! responders and destination attachment.
//!
//! Incidents are visited escalated-first, then by descending priority, so the
//! most urgent incidents get first pick of scarce responders. Each responder is
//! consumed at most once per pass; the pass-local `available` set is the only
//! mutable shared state and is owned by the loop below.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::admission::AdmissionGate;
use crate::config::DispatchConfig;
use crate::destination;
use crate::error::{DispatchError, InputError};
use crate::matching::{score_available, select_best, CompatibilityScorer, TieredScorer};
use crate::model::{Destination, Incident, IncidentPriorityStats, Mission, Responder};
use crate::snapshot::DispatchSnapshot;

/// Kind of input record that was excluded from matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Incident,
    Responder,
    Destination,
    PriorityStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedRecord {
    pub kind: RecordKind,
    pub id: String,
    pub reason: String,
    #[serde(skip)]
    pub error: InputError,
}

impl RejectedRecord {
    fn new(kind: RecordKind, id: &str, error: InputError) -> Self {
        Self {
            kind,
            id: id.to_string(),
            reason: error.to_string(),
            error,
        }
    }
}

/// Counters for one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchSummary {
    pub incidents: usize,
    pub responders: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub gate_blocked: usize,
    pub no_compatible_responder: usize,
    pub rejected_incidents: usize,
    pub rejected_responders: usize,
}

/// Full outcome of one cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    /// One mission per input incident, in input order.
    pub missions: Vec<Mission>,
    pub summary: DispatchSummary,
    pub rejected: Vec<RejectedRecord>,
}

pub struct AssignmentOrchestrator {
    scorer: Box<dyn CompatibilityScorer>,
    gate: AdmissionGate,
    config: DispatchConfig,
}

impl Default for AssignmentOrchestrator {
    fn default() -> Self {
        Self::new(DispatchConfig::default())
    }
}

impl AssignmentOrchestrator {
    /// Orchestrator using [`TieredScorer`] configured from `config.scoring`.
    pub fn new(config: DispatchConfig) -> Self {
        let scorer = TieredScorer::new(config.scoring.clone());
        Self::with_scorer(config, Box::new(scorer))
    }

    pub fn with_scorer(config: DispatchConfig, scorer: Box<dyn CompatibilityScorer>) -> Self {
        Self {
            scorer,
            gate: AdmissionGate::new(config.admission.clone()),
            config,
        }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Run one cycle over a loaded snapshot.
    pub fn dispatch(&self, snapshot: &DispatchSnapshot) -> Result<DispatchReport, DispatchError> {
        self.run(
            &snapshot.incidents,
            &snapshot.responders,
            &snapshot.destinations,
            &snapshot.priority_stats,
        )
    }

    /// Run one cycle and return only the missions.
    pub fn assign(
        &self,
        incidents: &[Incident],
        responders: &[Responder],
        destinations: &[Destination],
        priority_stats: &BTreeMap<String, IncidentPriorityStats>,
    ) -> Result<Vec<Mission>, DispatchError> {
        self.run(incidents, responders, destinations, priority_stats)
            .map(|report| report.missions)
    }

    /// Run one cycle. On deadline expiry no partial output is returned.
    pub fn run(
        &self,
        incidents: &[Incident],
        responders: &[Responder],
        destinations: &[Destination],
        priority_stats: &BTreeMap<String, IncidentPriorityStats>,
    ) -> Result<DispatchReport, DispatchError> {
        let started = Instant::now();
        let deadline = self.config.deadline_ms.map(Duration::from_millis);

        let mut missions: Vec<Mission> = incidents.iter().map(Mission::unassigned).collect();
        let mut rejected = Vec::new();
        let mut summary = DispatchSummary {
            incidents: incidents.len(),
            responders: responders.len(),
            ..Default::default()
        };

        let mut incident_positions = Vec::with_capacity(incidents.len());
        let mut incident_stats = Vec::with_capacity(incidents.len());
        for incident in incidents {
            match incident.validate() {
                Ok(position) => incident_positions.push(Some(position)),
                Err(error) => {
                    warn!(incident = %incident.id, %error, "incident excluded from matching");
                    summary.rejected_incidents += 1;
                    rejected.push(RejectedRecord::new(RecordKind::Incident, &incident.id, error));
                    incident_positions.push(None);
                }
            }
            let stats = priority_stats.get(&incident.id).copied();
            let stats = match stats.map(|s| s.validate().map(|_| s)) {
                Some(Err(error)) => {
                    warn!(incident = %incident.id, %error, "ignoring priority stats");
                    rejected.push(RejectedRecord::new(
                        RecordKind::PriorityStats,
                        &incident.id,
                        error,
                    ));
                    None
                }
                Some(Ok(stats)) => Some(stats),
                None => None,
            };
            incident_stats.push(stats);
        }

        let mut responder_positions = Vec::with_capacity(responders.len());
        for responder in responders {
            match responder.validate() {
                Ok(position) => responder_positions.push(Some(position)),
                Err(error) => {
                    warn!(responder = %responder.id, %error, "responder excluded from matching");
                    summary.rejected_responders += 1;
                    rejected.push(RejectedRecord::new(
                        RecordKind::Responder,
                        &responder.id,
                        error,
                    ));
                    responder_positions.push(None);
                }
            }
        }
        for destination in destinations {
            if let Err(error) = destination.coordinate() {
                warn!(destination = %destination.name, %error, "destination skipped");
                rejected.push(RejectedRecord::new(
                    RecordKind::Destination,
                    &destination.name,
                    error,
                ));
            }
        }

        let mut available: Vec<bool> = responder_positions.iter().map(Option::is_some).collect();
        let mut remaining = available.iter().filter(|free| **free).count();

        let order = precedence_order(&incident_stats);
        let total = order.len();
        for (processed, &incident_index) in order.iter().enumerate() {
            if let Some(limit) = deadline {
                if started.elapsed() >= limit {
                    warn!(processed, total, "dispatch deadline exceeded; discarding pass");
                    return Err(DispatchError::DeadlineExceeded { processed, total });
                }
            }

            let incident = &incidents[incident_index];
            let Some(incident_pos) = incident_positions[incident_index] else {
                continue;
            };

            let decision = self
                .gate
                .evaluate(incident_stats[incident_index].as_ref(), remaining);
            if !decision.is_eligible() {
                debug!(incident = %incident.id, ?decision, "incident held back by admission gate");
                summary.gate_blocked += 1;
                continue;
            }

            let candidates = score_available(
                self.scorer.as_ref(),
                incident_index,
                incident,
                responders,
                &available,
                self.config.parallel_scoring_threshold,
            );
            let Some(best) = select_best(&candidates) else {
                debug!(incident = %incident.id, "no compatible responder");
                summary.no_compatible_responder += 1;
                continue;
            };
            let Some(responder_pos) = responder_positions[best.responder_index] else {
                continue;
            };

            available[best.responder_index] = false;
            remaining -= 1;

            let responder = &responders[best.responder_index];
            let drop_off = destination::nearest(incident_pos, destinations).map(|(_, pos)| pos);
            debug!(
                incident = %incident.id,
                responder = %responder.id,
                score = best.score,
                distance_m = best.distance_meters,
                "responder assigned"
            );
            missions[incident_index].assign(
                responder,
                responder_pos,
                best.distance_meters,
                best.score,
                drop_off,
            );
            summary.assigned += 1;
        }

        summary.unassigned = summary.incidents - summary.assigned;
        info!(
            incidents = summary.incidents,
            responders = summary.responders,
            assigned = summary.assigned,
            gate_blocked = summary.gate_blocked,
            no_compatible = summary.no_compatible_responder,
            rejected = rejected.len(),
            "dispatch cycle complete"
        );

        Ok(DispatchReport {
            missions,
            summary,
            rejected,
        })
    }
}

/// Visit order: escalated incidents with non-zero priority, then other incidents
/// with stats, then incidents without stats. The first two groups sort by
/// descending priority; everything else keeps input order.
fn precedence_order(stats: &[Option<IncidentPriorityStats>]) -> Vec<usize> {
    let group = |s: &Option<IncidentPriorityStats>| match s {
        Some(s) if s.escalated && s.priority != 0.0 => 0u8,
        Some(_) => 1,
        None => 2,
    };
    let priority = |s: &Option<IncidentPriorityStats>| s.map(|s| s.priority).unwrap_or(0.0);

    let mut order: Vec<usize> = (0..stats.len()).collect();
    order.sort_by(|&a, &b| {
        group(&stats[a])
            .cmp(&group(&stats[b]))
            .then_with(|| match (&stats[a], &stats[b]) {
                (Some(_), Some(_)) => priority(&stats[b]).total_cmp(&priority(&stats[a])),
                _ => Ordering::Equal,
            })
    });
    order
}
