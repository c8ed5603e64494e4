use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{AppError, Result};
use crate::models::{Place, PredefinedRouteRecord, Tag, UserStats};

use super::catalog_repository::CatalogRepository;

#[derive(Default)]
struct MemoryCatalog {
    places: Vec<Place>,
    tags: Vec<Tag>,
    predefined_routes: Vec<PredefinedRouteRecord>,
    user_stats: HashMap<String, UserStats>,
}

/// Catalog held in process memory. Vectors keep insertion order so listing
/// matches the SQLite backend.
#[derive(Default)]
pub struct MemoryCatalogRepository {
    catalog: RwLock<MemoryCatalog>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn list_places(&self) -> Result<Vec<Place>> {
        Ok(self.catalog.read().await.places.clone())
    }

    async fn get_place(&self, id: &str) -> Result<Option<Place>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.places.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_place(&self, place: &Place) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        if catalog.places.iter().any(|p| p.id == place.id) {
            return Err(AppError::Conflict(format!(
                "Place '{}' already exists",
                place.id
            )));
        }
        catalog.places.push(place.clone());
        Ok(())
    }

    async fn update_place(&self, id: &str, place: &Place) -> Result<u64> {
        let mut catalog = self.catalog.write().await;
        match catalog.places.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                *existing = place.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_place(&self, id: &str) -> Result<u64> {
        let mut catalog = self.catalog.write().await;
        let before = catalog.places.len();
        catalog.places.retain(|p| p.id != id);
        Ok((before - catalog.places.len()) as u64)
    }

    async fn count_places(&self) -> Result<i64> {
        Ok(self.catalog.read().await.places.len() as i64)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.catalog.read().await.tags.clone())
    }

    async fn insert_tag(&self, tag: &Tag) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        if catalog.tags.iter().any(|t| t.id == tag.id) {
            return Err(AppError::Conflict(format!("Tag '{}' already exists", tag.id)));
        }
        catalog.tags.push(tag.clone());
        Ok(())
    }

    async fn list_predefined_routes(&self) -> Result<Vec<PredefinedRouteRecord>> {
        Ok(self.catalog.read().await.predefined_routes.clone())
    }

    async fn get_predefined_route(&self, id: &str) -> Result<Option<PredefinedRouteRecord>> {
        let catalog = self.catalog.read().await;
        Ok(catalog
            .predefined_routes
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn insert_predefined_route(&self, route: &PredefinedRouteRecord) -> Result<()> {
        let mut catalog = self.catalog.write().await;
        if catalog.predefined_routes.iter().any(|r| r.id == route.id) {
            return Err(AppError::Conflict(format!(
                "Predefined route '{}' already exists",
                route.id
            )));
        }
        catalog.predefined_routes.push(route.clone());
        Ok(())
    }

    async fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        Ok(self.catalog.read().await.user_stats.get(user_id).cloned())
    }

    async fn upsert_user_stats(&self, user_id: &str, stats: &UserStats) -> Result<()> {
        self.catalog
            .write()
            .await
            .user_stats
            .insert(user_id.to_string(), stats.clone());
        Ok(())
    }
}
