pub mod scorer;
pub mod selection;
pub mod tiered;
pub mod types;

pub use scorer::CompatibilityScorer;
pub use selection::{score_available, select_best};
pub use tiered::TieredScorer;
pub use types::{CandidateMatch, Score, ScoreBreakdown};
