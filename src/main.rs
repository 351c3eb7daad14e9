use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subtrack::api::AppState;
use subtrack::config::Config;
use subtrack::services::sheet_sync::SheetSync;
use subtrack::services::snapshot::SnapshotFile;
use subtrack::services::tracker::SubscriptionTracker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subtrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting subtrack server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded successfully");

    // Wire up the subscription core
    let snapshot = SnapshotFile::new(&config.snapshot_path);
    let sheet = SheetSync::new(
        config
            .sheet_webhook_url
            .as_ref()
            .map(|url| url.expose_secret().as_str()),
    );
    if !sheet.is_configured() {
        tracing::warn!("Sheet webhook not configured, new records will not be replicated");
    }
    let tracker = Arc::new(SubscriptionTracker::open(snapshot, sheet));

    // Build application state
    let state = AppState {
        tracker,
        config: config.clone(),
    };

    // Build router; the dashboard UI is a browser client, hence CORS
    let app = subtrack::api::health::router()
        .merge(subtrack::api::subscriptions::router())
        .merge(subtrack::api::notifications::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    tracing::info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, cleaning up...");
}
