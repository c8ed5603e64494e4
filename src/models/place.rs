use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Gastronomy,
    Attractions,
    Culture,
    Nature,
    Shopping,
    Nightlife,
    Interesting,
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaceCategory::Gastronomy => "gastronomy",
            PlaceCategory::Attractions => "attractions",
            PlaceCategory::Culture => "culture",
            PlaceCategory::Nature => "nature",
            PlaceCategory::Shopping => "shopping",
            PlaceCategory::Nightlife => "nightlife",
            PlaceCategory::Interesting => "interesting",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gastronomy" => Ok(PlaceCategory::Gastronomy),
            "attractions" => Ok(PlaceCategory::Attractions),
            "culture" => Ok(PlaceCategory::Culture),
            "nature" => Ok(PlaceCategory::Nature),
            "shopping" => Ok(PlaceCategory::Shopping),
            "nightlife" => Ok(PlaceCategory::Nightlife),
            "interesting" => Ok(PlaceCategory::Interesting),
            _ => Err(format!("Invalid place category: {}", s)),
        }
    }
}

/// Contact and opening details for places run by a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BusinessInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub category: PlaceCategory,
    /// Tag identifiers; order is kept but carries no meaning
    pub tags: Vec<String>,
    /// Rating from 0 to 5
    pub rating: f32,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_info: Option<BusinessInfo>,
}

impl Place {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: PlaceCategory,
        coordinates: Coordinates,
        tags: Vec<String>,
    ) -> Self {
        Place {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            coordinates,
            category,
            tags,
            rating: 0.0,
            photos: Vec::new(),
            business_info: None,
        }
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t == tag_id)
    }

    /// True when at least one of `tag_ids` is attached to this place.
    pub fn matches_any<S: AsRef<str>>(&self, tag_ids: &[S]) -> bool {
        tag_ids.iter().any(|id| self.has_tag(id.as_ref()))
    }

    pub fn distance_to(&self, other: &Place) -> f64 {
        self.coordinates.distance_to(&other.coordinates)
    }

    /// Checks applied to places submitted through the catalog API.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err("rating must be between 0 and 5".to_string());
        }
        Coordinates::new(self.coordinates.lat, self.coordinates.lng)?;
        Ok(())
    }
}
