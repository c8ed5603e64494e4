use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Route length in kilometers. Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceKm(pub f64);

impl DistanceKm {
    pub const ZERO: DistanceKm = DistanceKm(0.0);

    pub fn as_km(self) -> f64 {
        self.0
    }

    /// Wrap a haversine result. No validation: a leg length is never negative.
    pub fn from_raw(km: f64) -> Self {
        DistanceKm(km)
    }

    /// Minutes needed to cover this distance at `speed_kmh`.
    pub fn walking_minutes(self, speed_kmh: f64) -> f64 {
        self.0 / speed_kmh * 60.0
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}km", self.0)
    }
}

impl Add for DistanceKm {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceKm(self.0 + other.0)
    }
}

impl Sum for DistanceKm {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DistanceKm::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legs_sum_to_route_length() {
        let legs = [DistanceKm(1.25), DistanceKm(0.5), DistanceKm(2.0)];
        let total: DistanceKm = legs.into_iter().sum();
        assert_eq!(total.as_km(), 3.75);

        let none: DistanceKm = std::iter::empty().sum();
        assert_eq!(none, DistanceKm::ZERO);
    }

    #[test]
    fn test_walking_minutes() {
        assert_eq!(DistanceKm(4.0).walking_minutes(4.0), 60.0);
        assert_eq!(DistanceKm(1.5).walking_minutes(3.0), 30.0);
        assert_eq!(DistanceKm::ZERO.walking_minutes(5.0), 0.0);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(DistanceKm(2.12283).to_string(), "2.12km");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_value(DistanceKm(2.5)).unwrap();
        assert_eq!(json, serde_json::json!(2.5));
    }
}
