pub mod debug;
pub mod places;
pub mod route_builder;
pub mod tags;
pub mod users;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/places", get(places::list_places).post(places::create_place))
        .route(
            "/places/{id}",
            get(places::get_place)
                .put(places::update_place)
                .delete(places::delete_place),
        )
        .route("/tags", get(tags::list_tags))
        .route("/routes/generate", post(route_builder::generate_route))
        .route(
            "/routes/generate/geojson",
            post(route_builder::generate_route_geojson),
        )
        .route(
            "/routes/predefined",
            get(route_builder::list_predefined_routes),
        )
        .route(
            "/routes/predefined/{id}",
            post(route_builder::build_predefined_route),
        )
        .route(
            "/users/{id}/stats",
            get(users::get_user_stats).post(users::save_user_stats),
        )
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
