use axum::Router;
use cityroute::config::Config;
use cityroute::db::{CatalogRepository, CatalogSeed, MemoryCatalogRepository, SqliteCatalogRepository};
use cityroute::services::catalog_service::CatalogService;
use cityroute::services::route_generator::RouteGenerator;
use cityroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cityroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting cityroute API server");
    tracing::info!(
        max_route_places = config.route_generator.max_route_places,
        "Configuration loaded successfully"
    );

    // Catalog storage: SQLite when configured, in-memory otherwise
    let repo: Arc<dyn CatalogRepository> = if let Some(ref database_url) = config.database_url {
        tracing::info!("Opening SQLite catalog at {}", database_url);
        let pool = cityroute::db::create_pool(database_url).await?;
        SqliteCatalogRepository::create_schema(&pool).await?;
        tracing::info!("Catalog schema ready");
        Arc::new(SqliteCatalogRepository::new(pool))
    } else {
        tracing::info!("DATABASE_URL not configured. Using in-memory catalog.");
        Arc::new(MemoryCatalogRepository::new())
    };

    // Seed an empty catalog
    let seed = match config.catalog_seed_path {
        Some(ref path) => {
            tracing::info!("Loading catalog seed from {}", path);
            CatalogSeed::from_path(path).await?
        }
        None => CatalogSeed::bundled()?,
    };
    seed.apply_if_empty(repo.as_ref()).await?;

    // Create application state
    let state = Arc::new(AppState {
        catalog: CatalogService::new(repo),
        route_generator: RouteGenerator::new(config.route_generator.clone()),
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", cityroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
