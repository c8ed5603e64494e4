mod optimizer;
pub mod route_metrics;

use crate::config::RouteGeneratorConfig;
use crate::error::EmptyMatchError;
use crate::models::{Place, PredefinedRoute, Route, Tag};

pub use optimizer::optimize_route;
pub use route_metrics::RouteMetrics;

/// Builds walking routes from a catalog snapshot.
///
/// Holds only configuration: every call takes the catalog and the selection
/// as arguments and returns a fresh [`Route`].
#[derive(Debug, Clone, Default)]
pub struct RouteGenerator {
    config: RouteGeneratorConfig,
}

impl RouteGenerator {
    pub fn new(config: RouteGeneratorConfig) -> Self {
        RouteGenerator { config }
    }

    pub fn config(&self) -> &RouteGeneratorConfig {
        &self.config
    }

    /// Build a route through the catalog places tagged with any of
    /// `selected_tags`.
    ///
    /// Matching places are taken in catalog order and capped at
    /// `max_route_places` before the visiting order is optimized. The first
    /// selected tag from the formats category, if any, sets the walking speed.
    pub fn generate(
        &self,
        selected_tags: &[Tag],
        catalog: &[Place],
    ) -> Result<Route, EmptyMatchError> {
        let tags = dedup_tags(selected_tags);
        if tags.is_empty() {
            return Err(EmptyMatchError::NoTagsSelected);
        }

        let candidates = self.select_candidates(&tags, catalog);
        if candidates.is_empty() {
            tracing::debug!(
                tags = ?tag_ids(&tags),
                catalog_size = catalog.len(),
                "No catalog places match the selected tags"
            );
            return Err(EmptyMatchError::NoMatchingPlaces);
        }

        let places = optimize_route(candidates);

        let format_tag = tags.iter().find(|t| t.is_format());
        let metrics = RouteMetrics::compute(
            &places,
            format_tag.map(|t| t.id.as_str()),
            &self.config,
        );

        tracing::debug!(
            places = places.len(),
            distance_km = metrics.distance_km.as_km(),
            duration_minutes = metrics.duration_minutes,
            difficulty = %metrics.difficulty,
            format = ?format_tag.map(|t| t.id.as_str()),
            "Route generated"
        );

        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        let description = format!("Personalized route through {} places", places.len());

        Ok(Route::new(
            format!("Route \"{}\"", names.join(", ")),
            places,
            metrics.distance_km,
            metrics.duration_minutes,
            metrics.difficulty,
            tag_ids(&tags),
        )
        .with_description(description))
    }

    /// Build the route for a curated predefined route.
    ///
    /// The curated place order is kept as-is. Only the distance is recomputed;
    /// duration, difficulty and tags come from the definition.
    pub fn generate_from_predefined(&self, predefined: &PredefinedRoute) -> Route {
        let distance_km = route_metrics::path_length(&predefined.places);

        tracing::debug!(
            predefined_id = %predefined.id,
            places = predefined.places.len(),
            distance_km = distance_km.as_km(),
            "Predefined route built"
        );

        Route::new(
            predefined.name.clone(),
            predefined.places.clone(),
            distance_km,
            predefined.duration_minutes,
            predefined.difficulty,
            predefined.tags.clone(),
        )
        .with_description(predefined.description.clone())
        .with_predefined_id(predefined.id.clone())
    }

    /// Catalog places matching any of `tags`, in catalog order, capped.
    fn select_candidates(&self, tags: &[&Tag], catalog: &[Place]) -> Vec<Place> {
        let ids: Vec<&str> = tags.iter().map(|t| t.id.as_str()).collect();
        catalog
            .iter()
            .filter(|place| place.matches_any(&ids))
            .take(self.config.max_route_places)
            .cloned()
            .collect()
    }
}

/// Drop repeated tags (by id), keeping the first occurrence.
fn dedup_tags(tags: &[Tag]) -> Vec<&Tag> {
    let mut unique: Vec<&Tag> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.iter().any(|t| t.id == tag.id) {
            unique.push(tag);
        }
    }
    unique
}

fn tag_ids(tags: &[&Tag]) -> Vec<String> {
    tags.iter().map(|t| t.id.clone()).collect()
}
