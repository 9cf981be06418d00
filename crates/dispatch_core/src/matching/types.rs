/// Compatibility of one incident/responder pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub points: u32,
    pub distance_meters: f64,
}

/// Per-component points behind a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub distance_meters: f64,
    pub distance_points: u32,
    pub capacity_points: u32,
    pub medical_points: u32,
    pub person_points: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.distance_points + self.capacity_points + self.medical_points + self.person_points
    }

    pub fn score(&self) -> Score {
        Score {
            points: self.total(),
            distance_meters: self.distance_meters,
        }
    }
}

/// A scored pairing considered during one orchestration pass.
///
/// Indices refer to positions in the input incident and responder slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMatch {
    pub incident_index: usize,
    pub responder_index: usize,
    pub distance_meters: f64,
    pub score: u32,
}
