use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Personalities,
    Themes,
    /// Walking formats; some of them change the assumed walking speed
    Formats,
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagCategory::Personalities => write!(f, "personalities"),
            TagCategory::Themes => write!(f, "themes"),
            TagCategory::Formats => write!(f, "formats"),
        }
    }
}

impl FromStr for TagCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personalities" => Ok(TagCategory::Personalities),
            "themes" => Ok(TagCategory::Themes),
            "formats" => Ok(TagCategory::Formats),
            _ => Err(format!("Invalid tag category: '{}'", s)),
        }
    }
}

/// An interest tag users pick to build a route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub category: TagCategory,
    pub icon: String,
}

impl Tag {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: TagCategory,
        icon: impl Into<String>,
    ) -> Self {
        Tag {
            id: id.into(),
            name: name.into(),
            category,
            icon: icon.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        self.category == TagCategory::Formats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_category_round_trip_through_str() {
        for category in [
            TagCategory::Personalities,
            TagCategory::Themes,
            TagCategory::Formats,
        ] {
            assert_eq!(category.to_string().parse::<TagCategory>().unwrap(), category);
        }
        assert!("moods".parse::<TagCategory>().is_err());
    }

    #[test]
    fn test_is_format() {
        assert!(Tag::new("active", "Active", TagCategory::Formats, "🏃").is_format());
        assert!(!Tag::new("gagarin", "Gagarin", TagCategory::Personalities, "🚀").is_format());
    }

    #[test]
    fn test_tag_serialization() {
        let tag = Tag::new("volga", "Volga walks", TagCategory::Themes, "🌊");
        let json = serde_json::to_value(&tag).unwrap();
        assert_eq!(json["category"], "themes");
        assert_eq!(json["id"], "volga");
    }
}
