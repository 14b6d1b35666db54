use std::net::SocketAddr;

use circuit_server::catalog::karnataka_catalog;
use circuit_server::export::ReportConfig;
use circuit_server::web::{AppState, create_router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // The catalog is embedded; a validation failure is a build defect,
    // so fail fast.
    let catalog = karnataka_catalog().expect("embedded catalog is valid");
    tracing::info!(sites = catalog.len(), "catalog loaded");

    // Where the external renderer's bundle is served from.
    let static_dir = std::env::var("CIRCUIT_STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let state = AppState::new(catalog, ReportConfig::default());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Heritage Circuit Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                        - Health check");
    println!("  GET    /api/sites                     - Catalog with visibility");
    println!("  GET    /api/sites/:key                - Site detail");
    println!("  PUT    /api/filter                    - Set filter state");
    println!("  GET    /api/itinerary                 - Itinerary snapshot");
    println!("  POST   /api/itinerary/stops           - Add a stop");
    println!("  DELETE /api/itinerary/stops/:index    - Remove a stop");
    println!("  PUT    /api/itinerary/order           - Reorder stops");
    println!("  POST   /api/itinerary/sort            - Nearest-neighbor sort");
    println!("  GET    /api/itinerary/export          - Download JSON document");
    println!("  GET    /api/itinerary/export/report   - Download text report");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
