//! Nearest drop-off selection.

use crate::geo::{distance_meters, Coordinate};
use crate::model::Destination;

/// Destination closest to `incident`, with its validated coordinate.
///
/// Ties keep the earliest destination in input order. Destinations with an
/// unusable coordinate are skipped; `None` when nothing usable remains.
pub fn nearest(
    incident: Coordinate,
    destinations: &[Destination],
) -> Option<(&Destination, Coordinate)> {
    let mut best: Option<(&Destination, Coordinate, f64)> = None;
    for destination in destinations {
        let Ok(position) = destination.coordinate() else {
            continue;
        };
        let distance = distance_meters(incident, position);
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, _, best_distance)) if distance >= best_distance => {}
            _ => best = Some((destination, position, distance)),
        }
    }
    best.map(|(destination, position, _)| (destination, position))
}
