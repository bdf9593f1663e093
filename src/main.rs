use tracing_subscriber::EnvFilter;

use trip_planner::{
    api::{create_router, AppState},
    config::Config,
    services::DatasetStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before the log filter is read
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trip_planner=info,tower_http=info")),
        )
        .init();

    let dataset = DatasetStore::load_csv(&config.dataset_path)?;
    if dataset.is_empty() {
        tracing::warn!(path = %config.dataset_path, "Dataset has no rows; every request will find no matches");
    }

    // Initialize application state
    let state = AppState::new(dataset, &config);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
