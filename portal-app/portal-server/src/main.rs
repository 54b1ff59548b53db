use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use portal_api::{app_router, AppState};
use portal_core::navigation::{MenuCatalog, PermissionGate, RouteTable};
use portal_core::repositories::UserRepository;
use portal_core::services::NavigationService;
use portal_infrastructure::InMemoryUserRepository;
use portal_shared::config::AppConfig;
use portal_shared::constants::USER_ID_HEADER;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry
    let _log_guard = portal_shared::telemetry::init_telemetry(config.app.log_dir.as_deref())?;

    info!("Portal server starting...");

    // Menu catalog
    let catalog = match &config.navigation.menu_file {
        Some(path) => MenuCatalog::from_file(path)?,
        None => MenuCatalog::builtin(),
    };

    // Route table
    let routes = RouteTable::from_patterns(&config.routes)?;
    if routes.is_empty() {
        warn!("No routes configured; every link will fall back to '#'");
    }
    info!("Loaded {} routes.", routes.len());

    // User directory
    let users = match &config.directory.users_file {
        Some(path) => InMemoryUserRepository::from_json_file(path).await?,
        None => InMemoryUserRepository::new(),
    };
    let users: Arc<dyn UserRepository> = Arc::new(users);

    // Permission gate
    let gate = PermissionGate::from_settings(&config.navigation);
    info!(
        "Permission domain '{}', anonymous default {}",
        config.navigation.permission_domain,
        gate.allow_anonymous_default()
    );

    // Create App State
    let state = AppState {
        navigation: Arc::new(NavigationService::new(
            users,
            Arc::new(catalog),
            Arc::new(routes),
            gate,
        )),
    };

    // Build router
    let app = app_router(state).layer(
        CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:5173"))
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]),
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
