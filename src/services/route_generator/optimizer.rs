use crate::models::Place;

/// Order places into a walking sequence with the nearest-neighbor heuristic.
///
/// The first place is always the start; from there the closest remaining
/// place is appended until none are left. On an exact distance tie the place
/// that came earlier in the input wins. The result is a permutation of the
/// input; inputs of zero or one place are returned unchanged.
pub fn optimize_route(places: Vec<Place>) -> Vec<Place> {
    if places.len() <= 1 {
        return places;
    }

    let mut path = Vec::with_capacity(places.len());
    let mut remaining = places;
    let mut current = remaining.remove(0);

    while !remaining.is_empty() {
        let next = remaining.remove(nearest_index(&current, &remaining));
        path.push(std::mem::replace(&mut current, next));
    }
    path.push(current);

    path
}

/// Index of the candidate closest to `from`. Only a strictly smaller distance
/// replaces the current best, so ties keep the earliest candidate.
/// `candidates` must not be empty.
fn nearest_index(from: &Place, candidates: &[Place]) -> usize {
    let mut nearest_index = 0;
    let mut nearest_distance = from.distance_to(&candidates[0]);

    for (i, candidate) in candidates.iter().enumerate().skip(1) {
        let distance = from.distance_to(candidate);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest_index = i;
        }
    }

    nearest_index
}
