use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check that the catalog is reachable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    match state.catalog.count_places().await {
        Ok(count) => {
            status["checks"]["catalog"] = json!("ok");
            status["checks"]["place_count"] = json!(count);
        }
        Err(e) => {
            status["checks"]["catalog"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    match state.catalog.list_tags().await {
        Ok(tags) => {
            status["checks"]["tag_count"] = json!(tags.len());
        }
        Err(e) => {
            status["checks"]["tag_count"] = json!({"error": e.to_string()});
        }
    }

    match state.catalog.list_predefined_routes().await {
        Ok(routes) => {
            status["checks"]["predefined_route_count"] = json!(routes.len());
        }
        Err(e) => {
            status["checks"]["predefined_route_count"] = json!({"error": e.to_string()});
        }
    }

    status["checks"]["max_route_places"] =
        json!(state.route_generator.config().max_route_places);

    Json(status)
}
