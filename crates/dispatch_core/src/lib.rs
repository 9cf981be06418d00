//! Rescue dispatch engine: matches incidents to responders for one dispatch cycle.
//!
//! # Quick Start
//!
//! ```
//! use dispatch_core::orchestrator::AssignmentOrchestrator;
//! use dispatch_core::sample::{generate_snapshot, SampleParams};
//!
//! let snapshot = generate_snapshot(&SampleParams::default().with_seed(42));
//! let report = AssignmentOrchestrator::default()
//!     .dispatch(&snapshot)
//!     .expect("no deadline configured");
//! assert_eq!(report.missions.len(), snapshot.incidents.len());
//! ```
//!
//! # Modules
//!
//! - [`geo`]: fixed-precision coordinates and haversine distance
//! - [`matching`]: pairwise compatibility scoring and best-responder selection
//! - [`admission`]: priority-based admission gate
//! - [`destination`]: nearest drop-off selection
//! - [`orchestrator`]: the dispatch pass tying the above together
//! - [`snapshot`]: JSON input/output

pub mod admission;
pub mod config;
pub mod destination;
pub mod error;
pub mod geo;
pub mod matching;
pub mod model;
pub mod orchestrator;
pub mod sample;
pub mod snapshot;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
