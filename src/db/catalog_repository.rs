use crate::error::Result;
use crate::models::{Place, PredefinedRouteRecord, Tag, UserStats};
use async_trait::async_trait;

/// Storage for the place catalog, tags, curated routes and per-user stats.
///
/// Listing methods return records in catalog order, which is insertion order.
/// Replacing a place keeps its position.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_places(&self) -> Result<Vec<Place>>;

    async fn get_place(&self, id: &str) -> Result<Option<Place>>;

    /// Fails with `AppError::Conflict` when a place with the same id exists.
    async fn insert_place(&self, place: &Place) -> Result<()>;

    /// Replace the place stored under `id`. Returns the number of changed rows.
    async fn update_place(&self, id: &str, place: &Place) -> Result<u64>;

    /// Returns the number of deleted rows.
    async fn delete_place(&self, id: &str) -> Result<u64>;

    async fn count_places(&self) -> Result<i64>;

    async fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Fails with `AppError::Conflict` when a tag with the same id exists.
    async fn insert_tag(&self, tag: &Tag) -> Result<()>;

    async fn list_predefined_routes(&self) -> Result<Vec<PredefinedRouteRecord>>;

    async fn get_predefined_route(&self, id: &str) -> Result<Option<PredefinedRouteRecord>>;

    /// Fails with `AppError::Conflict` when a route with the same id exists.
    async fn insert_predefined_route(&self, route: &PredefinedRouteRecord) -> Result<()>;

    async fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>>;

    async fn upsert_user_stats(&self, user_id: &str, stats: &UserStats) -> Result<()>;
}
