//! Scoring fan-out over the available responder pool and best-candidate selection.

use rayon::prelude::*;

use crate::model::{Incident, Responder};

use super::scorer::CompatibilityScorer;
use super::types::CandidateMatch;

/// Score `incident` against every responder still marked available.
///
/// Pools of at least `parallel_threshold` available responders are scored on
/// the rayon pool. Either way the candidates come back in responder input
/// order, so selection is identical on both paths.
pub fn score_available(
    scorer: &dyn CompatibilityScorer,
    incident_index: usize,
    incident: &Incident,
    responders: &[Responder],
    available: &[bool],
    parallel_threshold: usize,
) -> Vec<CandidateMatch> {
    let to_candidate = |(responder_index, responder): (usize, &Responder)| {
        if !available[responder_index] {
            return None;
        }
        scorer
            .score(incident, responder)
            .map(|score| CandidateMatch {
                incident_index,
                responder_index,
                distance_meters: score.distance_meters,
                score: score.points,
            })
    };

    let pool_size = available.iter().filter(|free| **free).count();
    if pool_size >= parallel_threshold {
        responders
            .par_iter()
            .enumerate()
            .filter_map(to_candidate)
            .collect()
    } else {
        responders.iter().enumerate().filter_map(to_candidate).collect()
    }
}

/// Highest score wins; ties go to the shorter distance, then to input order.
///
/// A non-finite distance ranks behind every finite one.
pub fn select_best(candidates: &[CandidateMatch]) -> Option<CandidateMatch> {
    let mut best: Option<CandidateMatch> = None;
    for candidate in candidates {
        match best {
            None => best = Some(*candidate),
            Some(current)
                if candidate.score > current.score
                    || (candidate.score == current.score
                        && tie_distance(candidate) < tie_distance(&current)) =>
            {
                best = Some(*candidate)
            }
            _ => {}
        }
    }
    best
}

fn tie_distance(candidate: &CandidateMatch) -> f64 {
    if candidate.distance_meters.is_finite() {
        candidate.distance_meters
    } else {
        f64::INFINITY
    }
}
