use std::net::SocketAddr;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use taxi_server::cache::{CacheConfig, CachedGeocoder};
use taxi_server::catalog::TerminalCatalog;
use taxi_server::geocode::{GeocodeConfig, LocationIqClient};
use taxi_server::routing::{OsrmClient, OsrmConfig};
use taxi_server::search::{SearchConfig, SearchOrchestrator};
use taxi_server::web::{AppState, create_router};

/// Default catalog location, relative to the working directory.
const DEFAULT_CATALOG_PATH: &str = "data/terminals.json";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// How often to reload the terminal catalog, unless overridden.
const DEFAULT_CATALOG_REFRESH_SECS: u64 = 60 * 60;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    // Get credentials from environment
    let api_key = std::env::var("LOCATIONIQ_KEY").unwrap_or_else(|_| {
        warn!("LOCATIONIQ_KEY not set. Place-name searches will fail.");
        String::new()
    });

    // Create geocoder with cache
    let geocoder = LocationIqClient::new(GeocodeConfig::new(api_key))?;
    let geocoder = CachedGeocoder::new(geocoder, &CacheConfig::default());

    // Create routing client
    let mut osrm_config = OsrmConfig::default();
    if let Ok(url) = std::env::var("OSRM_BASE_URL") {
        osrm_config = osrm_config.with_base_url(url);
    }
    let engine = OsrmClient::new(osrm_config)?;

    // Load terminal catalog (fail fast if unavailable)
    let catalog_path =
        std::env::var("TERMINAL_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    let catalog = TerminalCatalog::load(&catalog_path).await.inspect_err(|e| {
        error!(path = %catalog_path, error = %e, "failed to load terminal catalog");
    })?;
    info!(path = %catalog_path, terminals = catalog.len().await, "loaded terminal catalog");

    // Spawn background task to reload the catalog
    let refresh_secs = std::env::var("CATALOG_REFRESH_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&s| s > 0)
        .unwrap_or(DEFAULT_CATALOG_REFRESH_SECS);
    let catalog_refresh = catalog.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match catalog_refresh.reload().await {
                Ok(count) => info!(terminals = count, "reloaded terminal catalog"),
                Err(e) => warn!(error = %e, "failed to reload terminal catalog, keeping previous"),
            }
        }
    });

    // Build app state
    let search = SearchOrchestrator::new(geocoder, catalog, engine, SearchConfig::default());
    let state = AppState::new(search);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "taxi terminal finder listening");
    info!("  GET  /health                 - Health check");
    info!("  POST /api/terminals/search   - Find and rank nearby terminals");
    info!("  GET  /api/terminals/suggest  - Terminal name suggestions");

    axum::serve(listener, app).await?;

    Ok(())
}
