use crate::error::{AppError, Result};
use crate::models::{Place, PlaceCategory};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for place listing
#[derive(Debug, Default, Deserialize)]
pub struct PlaceQueryParams {
    /// Exact category to keep
    #[serde(default)]
    pub category: Option<String>,
    /// Comma-separated tag ids; a place matches if it has any of them
    #[serde(default)]
    pub tags: Option<String>,
}

impl PlaceQueryParams {
    pub fn parse_category(&self) -> Result<Option<PlaceCategory>> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(AppError::InvalidRequest),
        }
    }

    pub fn parse_tags(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChangesResponse {
    pub changes: u64,
    pub success: bool,
}

/// GET /places - List catalog places, best rated first
pub async fn list_places(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PlaceQueryParams>,
) -> Result<Json<Vec<Place>>> {
    let category = params.parse_category()?;
    let tags = params.parse_tags();

    let places = state.catalog.list_places(category, &tags).await?;

    tracing::info!(
        category = ?category,
        tags = ?tags,
        count = places.len(),
        "Place listing"
    );

    Ok(Json(places))
}

/// GET /places/{id}
pub async fn get_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Place>> {
    Ok(Json(state.catalog.get_place(&id).await?))
}

/// POST /places
pub async fn create_place(
    State(state): State<Arc<AppState>>,
    Json(place): Json<Place>,
) -> Result<Json<CreatedResponse>> {
    state.catalog.create_place(&place).await?;
    Ok(Json(CreatedResponse {
        id: place.id,
        success: true,
    }))
}

/// PUT /places/{id}
pub async fn update_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(place): Json<Place>,
) -> Result<Json<ChangesResponse>> {
    let changes = state.catalog.update_place(&id, place).await?;
    Ok(Json(ChangesResponse {
        changes,
        success: true,
    }))
}

/// DELETE /places/{id}
pub async fn delete_place(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ChangesResponse>> {
    let changes = state.catalog.delete_place(&id).await?;
    Ok(Json(ChangesResponse {
        changes,
        success: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        let params = PlaceQueryParams {
            category: None,
            tags: Some("space, art,,volga ".to_string()),
        };
        assert_eq!(params.parse_tags(), vec!["space", "art", "volga"]);
        assert!(PlaceQueryParams::default().parse_tags().is_empty());
    }

    #[test]
    fn test_parse_category() {
        let params = PlaceQueryParams {
            category: Some("nature".to_string()),
            tags: None,
        };
        assert_eq!(params.parse_category().unwrap(), Some(PlaceCategory::Nature));

        let params = PlaceQueryParams {
            category: Some(String::new()),
            tags: None,
        };
        assert_eq!(params.parse_category().unwrap(), None);

        let params = PlaceQueryParams {
            category: Some("museum".to_string()),
            tags: None,
        };
        assert!(matches!(
            params.parse_category(),
            Err(AppError::InvalidRequest(_))
        ));
    }
}
