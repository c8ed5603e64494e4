use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{Place, PredefinedRouteRecord, Tag};

use super::catalog_repository::CatalogRepository;

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Initial catalog contents, loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub predefined_routes: Vec<PredefinedRouteRecord>,
}

impl CatalogSeed {
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: CatalogSeed = serde_json::from_str(json)
            .map_err(|e| AppError::Seed(format!("Invalid catalog JSON: {}", e)))?;
        seed.validate()?;
        Ok(seed)
    }

    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Seed(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Reject duplicate ids and invalid places. Dangling tag and place
    /// references are only logged.
    pub fn validate(&self) -> Result<()> {
        let mut tag_ids = HashSet::new();
        for tag in &self.tags {
            if !tag_ids.insert(tag.id.as_str()) {
                return Err(AppError::Seed(format!("Duplicate tag id '{}'", tag.id)));
            }
        }

        let mut place_ids = HashSet::new();
        for place in &self.places {
            if !place_ids.insert(place.id.as_str()) {
                return Err(AppError::Seed(format!("Duplicate place id '{}'", place.id)));
            }
            place
                .validate()
                .map_err(|e| AppError::Seed(format!("Invalid place '{}': {}", place.id, e)))?;
            for tag in place.tags.iter().filter(|t| !tag_ids.contains(t.as_str())) {
                tracing::warn!("Place '{}' references unknown tag '{}'", place.id, tag);
            }
        }

        let mut route_ids = HashSet::new();
        for route in &self.predefined_routes {
            if !route_ids.insert(route.id.as_str()) {
                return Err(AppError::Seed(format!(
                    "Duplicate predefined route id '{}'",
                    route.id
                )));
            }
            for id in route.place_ids.iter().filter(|id| !place_ids.contains(id.as_str())) {
                tracing::warn!(
                    "Predefined route '{}' references unknown place '{}'",
                    route.id,
                    id
                );
            }
        }

        Ok(())
    }

    /// Load the seed into `repo` unless it already holds places. Tags and
    /// predefined routes that already exist are left alone. Returns whether
    /// the seed was applied.
    pub async fn apply_if_empty(&self, repo: &dyn CatalogRepository) -> Result<bool> {
        let existing = repo.count_places().await?;
        if existing > 0 {
            tracing::info!("Catalog already has {} places, skipping seed", existing);
            return Ok(false);
        }

        for tag in &self.tags {
            skip_existing(repo.insert_tag(tag).await)?;
        }
        for place in &self.places {
            skip_existing(repo.insert_place(place).await)?;
        }
        for route in &self.predefined_routes {
            skip_existing(repo.insert_predefined_route(route).await)?;
        }

        tracing::info!(
            tags = self.tags.len(),
            places = self.places.len(),
            predefined_routes = self.predefined_routes.len(),
            "Catalog seeded"
        );
        Ok(true)
    }
}

fn skip_existing(result: Result<()>) -> Result<()> {
    match result {
        Err(AppError::Conflict(message)) => {
            tracing::debug!("Seed record skipped: {}", message);
            Ok(())
        }
        other => other,
    }
}
