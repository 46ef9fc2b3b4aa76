//! Skybridge HTTP Server
//!
//! Main entry point for the forecast API server.

use std::sync::Arc;

use application::ForecastService;
use application::ports::{ForecastProviderPort, ZoneResolverPort};
use infrastructure::{AppConfig, GmtZoneResolver, WeatherKitForecastAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybridge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Skybridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        weatherkit = %config.weatherkit.base_url,
        "Configuration loaded"
    );

    let forecast_adapter = WeatherKitForecastAdapter::new(config.weatherkit.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize WeatherKit client: {e}"))?;

    let provider: Arc<dyn ForecastProviderPort> = Arc::new(forecast_adapter);
    let zones: Arc<dyn ZoneResolverPort> = Arc::new(GmtZoneResolver::new());

    let state = AppState {
        forecast_service: Arc::new(ForecastService::new(provider, zones)),
    };

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
