use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use log_relay::config::RelayConfig;
use log_relay::ingestion::consumer::ConsumerRegistry;
use log_relay::ingestion::handlers::handle_transfer_logs;
use log_relay::query::handlers::handle_get_logs;
use log_relay::storage::handlers::handle_delete_logs;
use log_relay::storage::mongo::MongoLogStore;
use log_relay::storage::store::LogStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Arc::new(RelayConfig::from_env()?);

    // A dead store at startup is fatal; the service is useless without it.
    tracing::info!("Connecting to document store at {}", config.mongo_uri);
    let store = MongoLogStore::connect(
        &config.mongo_uri,
        &config.mongo_db,
        &config.mongo_collection,
    )
    .await?;
    let store: Arc<dyn LogStore> = Arc::new(store);

    let registry = Arc::new(ConsumerRegistry::new());

    let app = Router::new()
        .route(
            "/logs",
            post(handle_transfer_logs).delete(handle_delete_logs),
        )
        .route("/logs/:date_from/:date_to", get(handle_get_logs))
        .layer(Extension(store))
        .layer(Extension(registry))
        .layer(Extension(config.clone()));

    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down server");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
