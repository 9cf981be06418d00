//! Error types for the dispatch engine.
//!
//! Record-level problems ([`InputError`]) never abort a cycle: the offending
//! record is excluded and reported. Only [`DispatchError`] ends a pass early.

use thiserror::Error;

/// Why a single input record was excluded from matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("coordinate is not finite: ({lat}, {lon})")]
    NonFiniteCoordinate { lat: f64, lon: f64 },

    #[error("coordinate out of range: ({lat}, {lon})")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("incident must report at least one person, got {0}")]
    NonPositivePeopleCount(i64),

    #[error("responder capacity must be positive, got {0}")]
    NonPositiveCapacity(i64),

    #[error("malformed priority stats: {0}")]
    MalformedPriorityStats(String),
}

/// Errors that abort a whole dispatch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The pass ran past its deadline; partial output is discarded.
    #[error("dispatch deadline exceeded after {processed} of {total} incidents")]
    DeadlineExceeded { processed: usize, total: usize },
}

/// Whole-document failures while reading a snapshot or config file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot root must be a JSON object")]
    NotAnObject,
}
