// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use services::catalog_service::CatalogService;
use services::route_generator::RouteGenerator;

pub struct AppState {
    pub catalog: CatalogService,
    pub route_generator: RouteGenerator,
}
