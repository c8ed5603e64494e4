use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{
    BusinessInfo, Coordinates, Difficulty, Place, PlaceCategory, PredefinedRouteRecord, Tag,
    TagCategory, UserStats,
};

use super::catalog_repository::CatalogRepository;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct SqlitePlaceRow {
    id: String,
    name: String,
    description: String,
    lat: f64,
    lng: f64,
    category: String,
    tags: String,
    rating: f64, // SQLite REAL is always f64
    photos: String,
    business_info: Option<String>,
}

impl SqlitePlaceRow {
    fn into_place(self) -> Place {
        let category = self.category.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid place category '{}' for place '{}', defaulting to interesting",
                self.category,
                self.id
            );
            PlaceCategory::Interesting
        });

        let business_info = self
            .business_info
            .as_deref()
            .map(|json| decode_json::<Option<BusinessInfo>>(json, "business_info", &self.id))
            .unwrap_or_default();

        Place {
            tags: decode_json(&self.tags, "tags", &self.id),
            photos: decode_json(&self.photos, "photos", &self.id),
            business_info,
            category,
            // Stored coordinates are not re-validated; degenerate values still
            // produce a usable (if odd) route.
            coordinates: Coordinates {
                lat: self.lat,
                lng: self.lng,
            },
            rating: self.rating as f32,
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SqliteTagRow {
    id: String,
    name: String,
    category: String,
    icon: String,
}

impl SqliteTagRow {
    fn into_tag(self) -> Tag {
        let category = self.category.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid tag category '{}' for tag '{}', defaulting to themes",
                self.category,
                self.id
            );
            TagCategory::Themes
        });

        Tag {
            id: self.id,
            name: self.name,
            category,
            icon: self.icon,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SqlitePredefinedRouteRow {
    id: String,
    name: String,
    description: String,
    category: String,
    rating: f64,
    duration_minutes: f64,
    difficulty: String,
    place_ids: String,
    tags: String,
}

impl SqlitePredefinedRouteRow {
    fn into_record(self) -> PredefinedRouteRecord {
        let difficulty = self.difficulty.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid difficulty '{}' for predefined route '{}', defaulting to medium",
                self.difficulty,
                self.id
            );
            Difficulty::Medium
        });

        PredefinedRouteRecord {
            place_ids: decode_json(&self.place_ids, "place_ids", &self.id),
            tags: decode_json(&self.tags, "tags", &self.id),
            difficulty,
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            rating: self.rating as f32,
            duration_minutes: self.duration_minutes,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Lists and nested objects are kept as JSON text columns.
fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Failed to encode column: {}", e)))
}

fn decode_json<T: DeserializeOwned + Default>(json: &str, column: &str, id: &str) -> T {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!(
            "Unreadable {} column for '{}': {}. Using empty value.",
            column,
            id,
            e
        );
        T::default()
    })
}

fn decode_counter(value: i64, column: &str, id: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| {
        tracing::warn!(
            "Out of range {} value {} for '{}'. Using 0.",
            column,
            value,
            id
        );
        0
    })
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the catalog tables. Idempotent.
    pub async fn create_schema(pool: &SqlitePool) -> std::result::Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS places (
                rowid INTEGER PRIMARY KEY,
                id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                lat REAL NOT NULL,
                lng REAL NOT NULL,
                category TEXT NOT NULL,
                tags TEXT NOT NULL DEFAULT '[]',
                rating REAL NOT NULL DEFAULT 0.0,
                photos TEXT NOT NULL DEFAULT '[]',
                business_info TEXT
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tags (
                rowid INTEGER PRIMARY KEY,
                id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                icon TEXT NOT NULL DEFAULT ''
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS predefined_routes (
                rowid INTEGER PRIMARY KEY,
                id TEXT UNIQUE NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT '',
                rating REAL NOT NULL DEFAULT 0.0,
                duration_minutes REAL NOT NULL,
                difficulty TEXT NOT NULL,
                place_ids TEXT NOT NULL DEFAULT '[]',
                tags TEXT NOT NULL DEFAULT '[]'
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS user_stats (
                user_id TEXT PRIMARY KEY,
                total_scanned INTEGER NOT NULL DEFAULT 0,
                routes_completed INTEGER NOT NULL DEFAULT 0,
                distance_walked REAL NOT NULL DEFAULT 0.0
            )",
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_places_category ON places(category)")
            .execute(pool)
            .await?;

        Ok(())
    }
}

const PLACE_COLUMNS: &str =
    "id, name, description, lat, lng, category, tags, rating, photos, business_info";

const PREDEFINED_ROUTE_COLUMNS: &str =
    "id, name, description, category, rating, duration_minutes, difficulty, place_ids, tags";

#[async_trait]
impl CatalogRepository for SqliteCatalogRepository {
    async fn list_places(&self) -> Result<Vec<Place>> {
        let rows: Vec<SqlitePlaceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM places ORDER BY rowid",
            PLACE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SqlitePlaceRow::into_place).collect())
    }

    async fn get_place(&self, id: &str) -> Result<Option<Place>> {
        let row: Option<SqlitePlaceRow> = sqlx::query_as(&format!(
            "SELECT {} FROM places WHERE id = ?1",
            PLACE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SqlitePlaceRow::into_place))
    }

    async fn insert_place(&self, place: &Place) -> Result<()> {
        let business_info = place.business_info.as_ref().map(encode_json).transpose()?;

        let result = sqlx::query(
            "INSERT OR IGNORE INTO places (id, name, description, lat, lng, category,
                                           tags, rating, photos, business_info)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(&place.id)
        .bind(&place.name)
        .bind(&place.description)
        .bind(place.coordinates.lat)
        .bind(place.coordinates.lng)
        .bind(place.category.to_string())
        .bind(encode_json(&place.tags)?)
        .bind(place.rating as f64)
        .bind(encode_json(&place.photos)?)
        .bind(business_info)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Place '{}' already exists",
                place.id
            )));
        }
        Ok(())
    }

    async fn update_place(&self, id: &str, place: &Place) -> Result<u64> {
        let business_info = place.business_info.as_ref().map(encode_json).transpose()?;

        let result = sqlx::query(
            "UPDATE places
             SET id = ?1, name = ?2, description = ?3, lat = ?4, lng = ?5, category = ?6,
                 tags = ?7, rating = ?8, photos = ?9, business_info = ?10
             WHERE id = ?11",
        )
        .bind(&place.id)
        .bind(&place.name)
        .bind(&place.description)
        .bind(place.coordinates.lat)
        .bind(place.coordinates.lng)
        .bind(place.category.to_string())
        .bind(encode_json(&place.tags)?)
        .bind(place.rating as f64)
        .bind(encode_json(&place.photos)?)
        .bind(business_info)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_place(&self, id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM places WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn count_places(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM places")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_tags(&self) -> Result<Vec<Tag>> {
        let rows: Vec<SqliteTagRow> =
            sqlx::query_as("SELECT id, name, category, icon FROM tags ORDER BY rowid")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(SqliteTagRow::into_tag).collect())
    }

    async fn insert_tag(&self, tag: &Tag) -> Result<()> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO tags (id, name, category, icon) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&tag.id)
        .bind(&tag.name)
        .bind(tag.category.to_string())
        .bind(&tag.icon)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!("Tag '{}' already exists", tag.id)));
        }
        Ok(())
    }

    async fn list_predefined_routes(&self) -> Result<Vec<PredefinedRouteRecord>> {
        let rows: Vec<SqlitePredefinedRouteRow> = sqlx::query_as(&format!(
            "SELECT {} FROM predefined_routes ORDER BY rowid",
            PREDEFINED_ROUTE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(SqlitePredefinedRouteRow::into_record)
            .collect())
    }

    async fn get_predefined_route(&self, id: &str) -> Result<Option<PredefinedRouteRecord>> {
        let row: Option<SqlitePredefinedRouteRow> = sqlx::query_as(&format!(
            "SELECT {} FROM predefined_routes WHERE id = ?1",
            PREDEFINED_ROUTE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SqlitePredefinedRouteRow::into_record))
    }

    async fn insert_predefined_route(&self, route: &PredefinedRouteRecord) -> Result<()> {
        let result = sqlx::query(
            "INSERT OR IGNORE INTO predefined_routes (id, name, description, category, rating,
                                                      duration_minutes, difficulty, place_ids, tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&route.id)
        .bind(&route.name)
        .bind(&route.description)
        .bind(&route.category)
        .bind(route.rating as f64)
        .bind(route.duration_minutes)
        .bind(route.difficulty.to_string())
        .bind(encode_json(&route.place_ids)?)
        .bind(encode_json(&route.tags)?)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Predefined route '{}' already exists",
                route.id
            )));
        }
        Ok(())
    }

    async fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        let row: Option<(i64, i64, f64)> = sqlx::query_as(
            "SELECT total_scanned, routes_completed, distance_walked
             FROM user_stats WHERE user_id = ?1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(total_scanned, routes_completed, distance_walked)| UserStats {
            total_scanned: decode_counter(total_scanned, "total_scanned", user_id),
            routes_completed: decode_counter(routes_completed, "routes_completed", user_id),
            distance_walked,
        }))
    }

    async fn upsert_user_stats(&self, user_id: &str, stats: &UserStats) -> Result<()> {
        sqlx::query(
            "INSERT OR REPLACE INTO user_stats (user_id, total_scanned, routes_completed, distance_walked)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(user_id)
        .bind(i64::from(stats.total_scanned))
        .bind(i64::from(stats.routes_completed))
        .bind(stats.distance_walked)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "sqlite_repo_tests.rs"]
mod sqlite_repo_tests;
