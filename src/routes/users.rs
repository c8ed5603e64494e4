use crate::error::Result;
use crate::models::UserStats;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /users/{id}/stats
pub async fn get_user_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserStats>> {
    Ok(Json(state.catalog.get_user_stats(&user_id).await?))
}

/// POST /users/{id}/stats - Create or replace a user's counters
pub async fn save_user_stats(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(stats): Json<UserStats>,
) -> Result<Json<Value>> {
    state.catalog.save_user_stats(&user_id, &stats).await?;
    Ok(Json(json!({ "success": true })))
}
