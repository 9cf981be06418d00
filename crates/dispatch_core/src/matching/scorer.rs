use crate::model::{Incident, Responder};

use super::types::Score;

/// Pairwise compatibility between one incident and one responder.
///
/// Implementations know nothing about other incidents or responders: they are
/// pure functions of the pair and must be safe to call from several threads at
/// once, since the orchestrator may fan scoring out over a thread pool.
///
/// # Examples
///
/// ```rust
/// use dispatch_core::matching::{CompatibilityScorer, TieredScorer};
/// use dispatch_core::model::{Incident, Responder};
///
/// let incident = Incident {
///     id: "inc-1".into(),
///     num_people: 2,
///     medical_needed: false,
///     lat: 34.0,
///     lon: -77.0,
///     reported_time: 0,
///     reporter_id: "reporter-1".into(),
/// };
/// let responder = Responder {
///     id: "resp-1".into(),
///     full_name: "Kimberely Keefe".into(),
///     boat_capacity: 2,
///     has_medical: false,
///     lat: 34.01,
///     lon: -77.0,
///     phone_number: String::new(),
///     is_person: false,
/// };
/// let score = TieredScorer::default().score(&incident, &responder).unwrap();
/// assert_eq!(score.points, 200);
/// ```
pub trait CompatibilityScorer: Send + Sync {
    /// Score a pair, or return `None` when the responder cannot serve the incident.
    ///
    /// A pair is incompatible when the responder's capacity is below the number
    /// of people to rescue, or when either record has an unusable coordinate.
    fn score(&self, incident: &Incident, responder: &Responder) -> Option<Score>;
}
