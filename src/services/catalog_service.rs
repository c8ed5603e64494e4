use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::models::{Place, PlaceCategory, PredefinedRoute, PredefinedRouteRecord, Tag, UserStats};
use std::collections::HashMap;
use std::sync::Arc;

/// Catalog access for the HTTP layer: validation, filtering and the
/// id-to-record resolution the route generator needs.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn CatalogRepository>) -> Self {
        CatalogService { repo }
    }

    /// Every place in catalog order, as fed to route generation.
    pub async fn catalog_places(&self) -> Result<Vec<Place>> {
        self.repo.list_places().await
    }

    /// Places filtered by category and by any of `tag_ids`, best rated first.
    /// Equal ratings keep catalog order.
    pub async fn list_places(
        &self,
        category: Option<PlaceCategory>,
        tag_ids: &[String],
    ) -> Result<Vec<Place>> {
        let mut places: Vec<Place> = self
            .repo
            .list_places()
            .await?
            .into_iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| tag_ids.is_empty() || p.matches_any(tag_ids))
            .collect();

        places.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(places)
    }

    pub async fn get_place(&self, id: &str) -> Result<Place> {
        self.repo
            .get_place(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Place '{}' not found", id)))
    }

    pub async fn create_place(&self, place: &Place) -> Result<()> {
        place.validate().map_err(AppError::InvalidRequest)?;
        self.repo.insert_place(place).await?;
        tracing::info!(place_id = %place.id, "Place created");
        Ok(())
    }

    /// Replace the place stored under `id`. The stored id always wins over
    /// the one in the body.
    pub async fn update_place(&self, id: &str, mut place: Place) -> Result<u64> {
        place.id = id.to_string();
        place.validate().map_err(AppError::InvalidRequest)?;

        let changes = self.repo.update_place(id, &place).await?;
        if changes == 0 {
            return Err(AppError::NotFound(format!("Place '{}' not found", id)));
        }
        tracing::info!(place_id = %id, "Place updated");
        Ok(changes)
    }

    pub async fn delete_place(&self, id: &str) -> Result<u64> {
        let changes = self.repo.delete_place(id).await?;
        tracing::info!(place_id = %id, changes, "Place deleted");
        Ok(changes)
    }

    pub async fn count_places(&self) -> Result<i64> {
        self.repo.count_places().await
    }

    /// All tags ordered by category name, then tag name.
    pub async fn list_tags(&self) -> Result<Vec<Tag>> {
        let mut tags = self.repo.list_tags().await?;
        tags.sort_by(|a, b| {
            a.category
                .to_string()
                .cmp(&b.category.to_string())
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(tags)
    }

    /// Look up the tags behind `tag_ids`, keeping request order and dropping
    /// repeats. Any unknown id fails the whole request.
    pub async fn resolve_tags(&self, tag_ids: &[String]) -> Result<Vec<Tag>> {
        let known: HashMap<String, Tag> = self
            .repo
            .list_tags()
            .await?
            .into_iter()
            .map(|t| (t.id.clone(), t))
            .collect();

        let mut resolved: Vec<Tag> = Vec::with_capacity(tag_ids.len());
        for id in tag_ids {
            if resolved.iter().any(|t| &t.id == id) {
                continue;
            }
            match known.get(id) {
                Some(tag) => resolved.push(tag.clone()),
                None => {
                    return Err(AppError::InvalidRequest(format!("Unknown tag id: '{}'", id)))
                }
            }
        }

        Ok(resolved)
    }

    pub async fn list_predefined_routes(&self) -> Result<Vec<PredefinedRouteRecord>> {
        self.repo.list_predefined_routes().await
    }

    /// Resolve a predefined route's place ids against the catalog. Ids that
    /// no longer exist are dropped; the remaining order is kept.
    pub async fn resolve_predefined_route(&self, id: &str) -> Result<PredefinedRoute> {
        let record = self
            .repo
            .get_predefined_route(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Predefined route '{}' not found", id)))?;

        let mut catalog: HashMap<String, Place> = self
            .repo
            .list_places()
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let mut places = Vec::with_capacity(record.place_ids.len());
        for place_id in &record.place_ids {
            match catalog.remove(place_id) {
                Some(place) => places.push(place),
                None => tracing::warn!(
                    "Predefined route '{}' references missing place '{}', skipping",
                    record.id,
                    place_id
                ),
            }
        }

        Ok(PredefinedRoute {
            id: record.id,
            name: record.name,
            description: record.description,
            duration_minutes: record.duration_minutes,
            difficulty: record.difficulty,
            places,
            tags: record.tags,
        })
    }

    pub async fn get_user_stats(&self, user_id: &str) -> Result<UserStats> {
        self.repo
            .get_user_stats(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No stats for user '{}'", user_id)))
    }

    pub async fn save_user_stats(&self, user_id: &str, stats: &UserStats) -> Result<()> {
        stats.validate().map_err(AppError::InvalidRequest)?;
        self.repo.upsert_user_stats(user_id, stats).await?;
        tracing::debug!(user_id = %user_id, "User stats saved");
        Ok(())
    }
}
