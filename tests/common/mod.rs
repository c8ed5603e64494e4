use cityroute::config::RouteGeneratorConfig;
use cityroute::db::{CatalogRepository, CatalogSeed, MemoryCatalogRepository};
use cityroute::models::{Coordinates, Place, PlaceCategory, Tag, TagCategory};
use cityroute::services::catalog_service::CatalogService;
use cityroute::services::route_generator::RouteGenerator;
use cityroute::AppState;
use std::sync::Arc;

/// Create a test place
#[allow(dead_code)]
pub fn create_test_place(id: &str, lat: f64, lng: f64, tags: &[&str]) -> Place {
    let mut place = Place::new(
        id,
        format!("Test place {}", id),
        PlaceCategory::Culture,
        Coordinates::new(lat, lng).unwrap(),
        tags.iter().map(|t| t.to_string()).collect(),
    );
    place.rating = 4.0;
    place
}

#[allow(dead_code)]
pub fn create_test_tag(id: &str, category: TagCategory) -> Tag {
    Tag::new(id, id, category, "")
}

/// Three `culture` places in central Saratov, in catalog order A, B, C
#[allow(dead_code)]
pub fn culture_fixture() -> Vec<Place> {
    vec![
        create_test_place("a", 51.5336, 46.0343, &["culture"]),
        create_test_place("b", 51.5339, 46.0080, &["culture"]),
        create_test_place("c", 51.5318, 46.0052, &["culture"]),
    ]
}

/// In-memory catalog loaded with the bundled seed
#[allow(dead_code)]
pub async fn seeded_repository() -> Arc<MemoryCatalogRepository> {
    let repo = Arc::new(MemoryCatalogRepository::new());
    CatalogSeed::bundled()
        .expect("Bundled catalog should parse")
        .apply_if_empty(repo.as_ref())
        .await
        .expect("Failed to seed catalog");
    repo
}

#[allow(dead_code)]
pub fn create_test_state(repo: Arc<dyn CatalogRepository>) -> Arc<AppState> {
    Arc::new(AppState {
        catalog: CatalogService::new(repo),
        route_generator: RouteGenerator::new(RouteGeneratorConfig::default()),
    })
}

/// Router over the bundled catalog, without the `/api/v1` prefix
#[allow(dead_code)]
pub async fn setup_test_app() -> axum::Router {
    let repo = seeded_repository().await;
    cityroute::routes::create_router(create_test_state(repo))
}
