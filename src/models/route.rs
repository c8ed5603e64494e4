use crate::constants::{DIFFICULTY_EASY_BELOW_KM, DIFFICULTY_HARD_ABOVE_KM};
use crate::models::{DistanceKm, Place};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Classify a route by its length. Both band edges (2 km and 5 km) are
    /// medium.
    pub fn from_distance(distance: DistanceKm) -> Self {
        let km = distance.as_km();
        if km < DIFFICULTY_EASY_BELOW_KM {
            Difficulty::Easy
        } else if km > DIFFICULTY_HARD_ABOVE_KM {
            Difficulty::Hard
        } else {
            Difficulty::Medium
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: '{}'", s)),
        }
    }
}

/// A walking route. Built once by the route generator and never mutated;
/// a new generation yields a new `Route` with a new id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub name: String,
    /// Visiting order
    pub places: Vec<Place>,
    pub distance_km: DistanceKm,
    pub duration_minutes: f64,
    pub difficulty: Difficulty,
    /// Identifiers of the tags the route was built from
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    /// Set when the route was built from a curated predefined route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_id: Option<String>,
}

impl Route {
    pub fn new(
        name: String,
        places: Vec<Place>,
        distance_km: DistanceKm,
        duration_minutes: f64,
        difficulty: Difficulty,
        tags: Vec<String>,
    ) -> Self {
        Route {
            id: Uuid::new_v4(),
            name,
            places,
            distance_km,
            duration_minutes,
            difficulty,
            tags,
            description: None,
            created_at: Some(OffsetDateTime::now_utc()),
            predefined_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_predefined_id(mut self, predefined_id: impl Into<String>) -> Self {
        self.predefined_id = Some(predefined_id.into());
        self
    }

    /// Export for map layers: a LineString through the stops in visiting
    /// order, followed by one Point per stop.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.places.len() + 1);

        if self.places.len() >= 2 {
            let line = self
                .places
                .iter()
                .map(|p| p.coordinates.to_position())
                .collect();
            let mut properties = JsonObject::new();
            properties.insert("route_id".to_string(), json!(self.id));
            properties.insert("name".to_string(), json!(self.name));
            properties.insert("distance_km".to_string(), json!(self.distance_km));
            properties.insert("difficulty".to_string(), json!(self.difficulty));
            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::LineString(line))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }

        for (order, place) in self.places.iter().enumerate() {
            let mut properties = JsonObject::new();
            properties.insert("id".to_string(), json!(place.id));
            properties.insert("name".to_string(), json!(place.name));
            properties.insert("order".to_string(), json!(order));
            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(
                    place.coordinates.to_position(),
                ))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

/// A curated route as stored in the catalog: places are referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredefinedRouteRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-form grouping label shown next to the route
    pub category: String,
    pub rating: f32,
    pub duration_minutes: f64,
    pub difficulty: Difficulty,
    pub place_ids: Vec<String>,
    pub tags: Vec<String>,
}

/// A curated route whose place ids were resolved against the catalog. The
/// place order is authoritative.
#[derive(Debug, Clone)]
pub struct PredefinedRoute {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: f64,
    pub difficulty: Difficulty,
    pub places: Vec<Place>,
    pub tags: Vec<String>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct GenerateRouteRequest {
    pub tag_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub route: Route,
}
