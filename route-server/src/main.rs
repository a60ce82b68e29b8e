use std::net::SocketAddr;
use std::process;

use route_server::catalog::load_catalog;
use route_server::planner::SearchConfig;
use route_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG: &str = "catalog.json";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let catalog_path =
        std::env::var("ROUTE_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG.to_string());
    let addr_text = std::env::var("ROUTE_SERVER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let addr: SocketAddr = match addr_text.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(addr = %addr_text, error = %e, "Invalid ROUTE_SERVER_ADDR");
            process::exit(1);
        }
    };

    // Fail fast if the catalog is unusable
    let catalog = match load_catalog(&catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(path = %catalog_path, error = %e, "Failed to load catalog");
            process::exit(1);
        }
    };
    info!(
        locations = catalog.locations().len(),
        legs = catalog.legs().len(),
        "Catalog ready"
    );

    let state = AppState::new(catalog, SearchConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            process::exit(1);
        }
    };

    info!("Itinerary planner listening on http://{addr}");
    info!("  GET  /health              - Health check");
    info!("  GET  /api/locations       - List catalog locations");
    info!("  POST /itineraries/search  - Search itineraries");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server stopped");
        process::exit(1);
    }
}
