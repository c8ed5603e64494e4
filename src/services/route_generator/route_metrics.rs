use crate::config::RouteGeneratorConfig;
use crate::models::{Difficulty, DistanceKm, Place};
use serde::Serialize;

/// Length, time and difficulty of an ordered place sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteMetrics {
    pub distance_km: DistanceKm,
    pub duration_minutes: f64,
    pub difficulty: Difficulty,
}

impl RouteMetrics {
    /// Compute metrics for `places` in the given order.
    ///
    /// Duration is walking time at the speed implied by `format_tag_id` plus
    /// a fixed dwell time for every place in `places`.
    pub fn compute(
        places: &[Place],
        format_tag_id: Option<&str>,
        config: &RouteGeneratorConfig,
    ) -> Self {
        let distance_km = path_length(places);
        let duration_minutes = estimate_duration_minutes(distance_km, places.len(), format_tag_id, config);

        RouteMetrics {
            distance_km,
            duration_minutes,
            difficulty: Difficulty::from_distance(distance_km),
        }
    }
}

/// Sum of great-circle distances between consecutive places. Zero for fewer
/// than two places.
pub fn path_length(places: &[Place]) -> DistanceKm {
    places
        .windows(2)
        .map(|w| DistanceKm::from_raw(w[0].distance_to(&w[1])))
        .sum()
}

pub fn estimate_duration_minutes(
    distance: DistanceKm,
    place_count: usize,
    format_tag_id: Option<&str>,
    config: &RouteGeneratorConfig,
) -> f64 {
    let walking = distance.walking_minutes(config.walking_speed_kmh(format_tag_id));
    let sightseeing = place_count as f64 * config.sightseeing_minutes_per_place;
    walking + sightseeing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, PlaceCategory};

    fn place(id: &str, lat: f64, lng: f64) -> Place {
        Place::new(id, id, PlaceCategory::Culture, Coordinates { lat, lng }, vec![])
    }

    #[test]
    fn test_path_length_of_short_sequences_is_zero() {
        assert_eq!(path_length(&[]), DistanceKm::ZERO);
        assert_eq!(path_length(&[place("a", 51.5, 46.0)]), DistanceKm::ZERO);
    }

    #[test]
    fn test_path_length_sums_consecutive_legs() {
        let a = place("a", 51.5336, 46.0343);
        let b = place("b", 51.5339, 46.0080);
        let c = place("c", 51.5318, 46.0052);

        let expected = a.distance_to(&b) + b.distance_to(&c);
        let actual = path_length(&[a, b, c]).as_km();
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn test_duration_uses_format_speed() {
        let config = RouteGeneratorConfig::default();
        let distance = DistanceKm(3.0);

        // 3 km at 4 km/h = 45 min, plus 2 stops * 20 min
        assert_eq!(estimate_duration_minutes(distance, 2, None, &config), 85.0);
        // 3 km at 5 km/h = 36 min
        assert_eq!(estimate_duration_minutes(distance, 2, Some("active"), &config), 76.0);
        // 3 km at 3 km/h = 60 min
        assert_eq!(estimate_duration_minutes(distance, 2, Some("leisurely"), &config), 100.0);
        assert_eq!(estimate_duration_minutes(distance, 2, Some("photo"), &config), 85.0);
    }

    #[test]
    fn test_single_place_is_dwell_time_only() {
        let config = RouteGeneratorConfig::default();
        let metrics = RouteMetrics::compute(&[place("a", 51.5, 46.0)], None, &config);

        assert_eq!(metrics.distance_km, DistanceKm::ZERO);
        assert_eq!(metrics.duration_minutes, 20.0);
        assert_eq!(metrics.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_empty_sequence() {
        let config = RouteGeneratorConfig::default();
        let metrics = RouteMetrics::compute(&[], Some("active"), &config);
        assert_eq!(metrics.duration_minutes, 0.0);
        assert_eq!(metrics.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_long_route_is_hard() {
        let config = RouteGeneratorConfig::default();
        // ~11 km apart
        let metrics = RouteMetrics::compute(
            &[place("a", 51.50, 46.00), place("b", 51.60, 46.00)],
            None,
            &config,
        );
        assert!(metrics.distance_km.as_km() > 5.0);
        assert_eq!(metrics.difficulty, Difficulty::Hard);
    }
}
