use historical_rates::config::Config;
use historical_rates::{create_router, AppState, RateLookupService};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("historical_rates=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let state = AppState::new(RateLookupService::seeded());
    let app = create_router(state);

    let listener = TcpListener::bind(config.addr).await?;

    tracing::info!("Starting Exchange Rates API on {}", config.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Exchange Rates API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
