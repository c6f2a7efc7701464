use office_tracker::{AppState, Config, FileStore, load_profiles, router};
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    fs::create_dir_all(&config.data_dir).await?;

    let store = Arc::new(FileStore::new(&config.data_dir));
    let profiles = load_profiles(store.as_ref()).await;
    info!(
        profiles = profiles.profiles().len(),
        data_dir = %config.data_dir.display(),
        "loaded profiles"
    );
    let app = router(AppState::new(store, profiles));

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
