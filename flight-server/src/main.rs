use flight_server::catalog::FlightCatalog;
use flight_server::config::ServerConfig;
use flight_server::domain::CategoryTable;
use flight_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("Failed to read configuration");

    // Load the catalog (fail fast if the file is unreadable or malformed)
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading flight catalog");
            FlightCatalog::load(path).expect("Failed to load flight catalog")
        }
        None => FlightCatalog::builtin().expect("Built-in flight catalog is invalid"),
    };
    let categories = CategoryTable::standard();

    let gaps = catalog.price_gaps(&categories);
    if !gaps.is_empty() {
        warn!(
            flights = gaps.len(),
            "some flights are missing prices and will be flagged"
        );
    }
    info!(
        flights = catalog.len(),
        categories = categories.len(),
        "catalog loaded"
    );

    // Build app state
    let state = AppState::new(catalog, categories);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.bind_addr;
    info!("Flight search listening on http://{addr}");
    info!("  GET  /health                - Health check");
    info!("  GET  /categories            - Fare categories");
    info!("  GET  /flights               - List flights");
    info!("  GET  /search                - Search flights (validated)");
    info!("  GET  /flights/:index/fare   - Price a flight");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
