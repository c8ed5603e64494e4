use crate::error::Result;
use crate::models::route::{GenerateRouteRequest, RouteResponse};
use crate::models::{PredefinedRouteRecord, Route};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use geojson::FeatureCollection;
use std::sync::Arc;

async fn build_route(state: &AppState, request: &GenerateRouteRequest) -> Result<Route> {
    let tags = state.catalog.resolve_tags(&request.tag_ids).await?;
    let catalog = state.catalog.catalog_places().await?;

    let route = state.route_generator.generate(&tags, &catalog)?;

    tracing::info!(
        route_id = %route.id,
        tags = ?route.tags,
        places = route.places.len(),
        distance_km = route.distance_km.as_km(),
        duration_minutes = route.duration_minutes,
        difficulty = %route.difficulty,
        "Route generated from {} tags",
        route.tags.len()
    );

    Ok(route)
}

/// POST /routes/generate
/// Build a personalized route through places matching any of the selected tags
pub async fn generate_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRouteRequest>,
) -> Result<Json<RouteResponse>> {
    let route = build_route(&state, &request).await?;
    Ok(Json(RouteResponse { route }))
}

/// POST /routes/generate/geojson
/// Same as `/routes/generate`, returned as a GeoJSON FeatureCollection
pub async fn generate_route_geojson(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRouteRequest>,
) -> Result<Json<FeatureCollection>> {
    let route = build_route(&state, &request).await?;
    Ok(Json(route.to_geojson()))
}

/// GET /routes/predefined
pub async fn list_predefined_routes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PredefinedRouteRecord>>> {
    Ok(Json(state.catalog.list_predefined_routes().await?))
}

/// POST /routes/predefined/{id}
/// Build the route for a curated predefined route, keeping its place order
pub async fn build_predefined_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RouteResponse>> {
    let predefined = state.catalog.resolve_predefined_route(&id).await?;
    let route = state.route_generator.generate_from_predefined(&predefined);

    tracing::info!(
        route_id = %route.id,
        predefined_id = %id,
        places = route.places.len(),
        distance_km = route.distance_km.as_km(),
        "Predefined route built"
    );

    Ok(Json(RouteResponse { route }))
}
