//! Seeded sample snapshots for demos, benchmarks and determinism tests.
//!
//! Responders start from a fixed roster of volunteers around Wilmington, NC;
//! incidents, destinations and priority stats are sampled uniformly inside the
//! roster's bounding box.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geo::round_to_fixed;
use crate::model::{Destination, Incident, IncidentPriorityStats, Responder};
use crate::snapshot::DispatchSnapshot;

const DEFAULT_LAT_MIN: f64 = 34.11;
const DEFAULT_LAT_MAX: f64 = 34.30;
const DEFAULT_LON_MIN: f64 = -78.00;
const DEFAULT_LON_MAX: f64 = -77.81;

/// Reports arrive within this window (ms) before `base_time_ms`.
const REPORT_WINDOW_MS: u64 = 60 * 60 * 1000;

/// Volunteer roster: (name, lat, lon).
pub const ROSTER: [(&str, f64, f64); 40] = [
    ("Kimberely Keefe", 34.15684, -77.82525),
    ("Antonina Aguirre", 34.23519, -77.8718),
    ("Zachery Zerr", 34.11331, -77.81316),
    ("Marlyn Mitschke", 34.19219, -77.86253),
    ("Noe Nam", 34.25192, -77.83706),
    ("Theola Truax", 34.19492, -77.89356),
    ("Maribeth Mccord", 34.28068, -77.85109),
    ("Ellis Eckles", 34.27507, -77.86321),
    ("Major Mccowan", 34.1794, -77.87239),
    ("Ricarda Reina", 34.29284, -77.8365),
    ("Noah Nemitz", 34.26321, -77.85343),
    ("Rod Rezentes", 34.23318, -77.89284),
    ("Emory Earley", 34.23372, -77.82005),
    ("Hilario Harrel", 34.22722, -77.84538),
    ("Stephan Shilling", 34.16975, -77.82043),
    ("Ward Well", 34.13922, -77.82019),
    ("Tomeka Trainor", 34.14513, -77.89158),
    ("Hal Hazlewood", 34.29158, -77.84821),
    ("Kittie Kreutzer", 34.27239, -77.83318),
    ("Felisa Fendley", 34.15726, -77.82722),
    ("Glory Geary", 34.16587, -77.88068),
    ("Bethany Bellino", 34.15214, -77.81702),
    ("Marla Mcbryde", 34.13378, -77.83106),
    ("Madison Micco", 34.19452, -77.83172),
    ("Trina Traver", 34.16887, -77.89701),
    ("Larhonda Lux", 34.13664, -77.84601),
    ("Mira Mccaa", 34.15153, -77.84775),
    ("Viva Vossler", 34.17132, -77.85379),
    ("Apolonia Acton", 34.24775, -77.83437),
    ("Vicki Vire", 34.2718, -77.84209),
    ("Shaneka Shavers", 34.26253, -77.89118),
    ("Kimiko Kanner", 34.12654, -77.87507),
    ("Anja Apicella", 34.22043, -77.83372),
    ("Darcey Dedeaux", 34.13964, -77.83519),
    ("Farrah Favela", 34.2365, -77.85192),
    ("Jennell Judd", 34.25343, -77.88148),
    ("Natalia Nazzaro", 34.12611, -77.99773),
    ("Suzan Solorio", 34.11257, -77.94513),
    ("Karine Keplin", 34.29118, -77.93781),
    ("Buster Bergman", 34.163, -77.96107),
];

/// Parameters for generating a sample snapshot.
#[derive(Debug, Clone)]
pub struct SampleParams {
    pub num_incidents: usize,
    pub num_responders: usize,
    pub num_destinations: usize,
    /// Random seed for reproducibility (if None, seeds from entropy).
    pub seed: Option<u64>,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    /// Latest report timestamp (epoch ms).
    pub base_time_ms: u64,
    /// Attach priority stats to incidents.
    pub with_priority_stats: bool,
    /// Probability that an incident lies in an escalated zone.
    pub escalated_probability: f64,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            num_incidents: 25,
            num_responders: ROSTER.len(),
            num_destinations: 3,
            seed: None,
            lat_min: DEFAULT_LAT_MIN,
            lat_max: DEFAULT_LAT_MAX,
            lon_min: DEFAULT_LON_MIN,
            lon_max: DEFAULT_LON_MAX,
            base_time_ms: 1_700_000_000_000,
            with_priority_stats: true,
            escalated_probability: 0.1,
        }
    }
}

impl SampleParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_incidents(mut self, count: usize) -> Self {
        self.num_incidents = count;
        self
    }

    pub fn with_responders(mut self, count: usize) -> Self {
        self.num_responders = count;
        self
    }

    pub fn with_destinations(mut self, count: usize) -> Self {
        self.num_destinations = count;
        self
    }

    pub fn without_priority_stats(mut self) -> Self {
        self.with_priority_stats = false;
        self
    }
}

/// Build a snapshot from `params`. Same seed, same snapshot.
pub fn generate_snapshot(params: &SampleParams) -> DispatchSnapshot {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let responders: Vec<Responder> = (0..params.num_responders)
        .map(|i| {
            let (name, lat, lon) = if i < ROSTER.len() {
                ROSTER[i]
            } else {
                let (name, _, _) = ROSTER[i % ROSTER.len()];
                let (lat, lon) = random_point(&mut rng, params);
                (name, lat, lon)
            };
            Responder {
                id: format!("responder-{}", i + 1),
                full_name: name.to_string(),
                boat_capacity: rng.gen_range(2..=12),
                has_medical: rng.gen_bool(0.3),
                lat: round_to_fixed(lat),
                lon: round_to_fixed(lon),
                phone_number: format!("(910) 555-{:04}", rng.gen_range(0..10_000)),
                is_person: rng.gen_bool(0.8),
            }
        })
        .collect();

    let incidents: Vec<Incident> = (0..params.num_incidents)
        .map(|i| {
            let (lat, lon) = random_point(&mut rng, params);
            Incident {
                id: format!("incident-{}", i + 1),
                num_people: rng.gen_range(1..=10),
                medical_needed: rng.gen_bool(0.25),
                lat,
                lon,
                reported_time: params
                    .base_time_ms
                    .saturating_sub(rng.gen_range(0..=REPORT_WINDOW_MS)),
                reporter_id: format!("reporter-{}", rng.gen_range(1..=500)),
            }
        })
        .collect();

    let destinations: Vec<Destination> = (0..params.num_destinations)
        .map(|i| {
            let (lat, lon) = random_point(&mut rng, params);
            Destination {
                name: format!("Shelter {}", i + 1),
                lat,
                lon,
            }
        })
        .collect();

    let mut snapshot = DispatchSnapshot::new(incidents, responders).with_destinations(destinations);
    if params.with_priority_stats && !snapshot.incidents.is_empty() {
        let priorities: Vec<f64> = snapshot
            .incidents
            .iter()
            .map(|_| f64::from(rng.gen_range(0..=15u32)))
            .collect();
        let average = priorities.iter().sum::<f64>() / priorities.len() as f64;
        let waiting = snapshot.incidents.len() as u32;
        for (incident, priority) in snapshot.incidents.iter().zip(priorities) {
            let mut stats = IncidentPriorityStats::new(priority, average, waiting);
            stats.escalated = rng.gen_bool(params.escalated_probability.clamp(0.0, 1.0));
            snapshot.priority_stats.insert(incident.id.clone(), stats);
        }
    }
    snapshot
}

fn random_point<R: Rng>(rng: &mut R, params: &SampleParams) -> (f64, f64) {
    let lat = rng.gen_range(params.lat_min..=params.lat_max);
    let lon = rng.gen_range(params.lon_min..=params.lon_max);
    (round_to_fixed(lat), round_to_fixed(lon))
}
