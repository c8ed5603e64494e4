use crate::error::Result;
use crate::models::Tag;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /tags - All tags, grouped by category
pub async fn list_tags(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Tag>>> {
    Ok(Json(state.catalog.list_tags().await?))
}
