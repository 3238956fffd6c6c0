//! Dispatching Dashboard API - Main Entry Point

use dispatch_api::{ApiState, DispatchConfig, InMemoryTicketRepository, TicketService};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Dispatching Dashboard API v{}", env!("CARGO_PKG_VERSION"));

    // Load config
    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "dispatch.json".into());

    let mut config = DispatchConfig::load(&config_path).unwrap_or_else(|e| {
        tracing::warn!(path = %config_path, error = %e, "Config not loaded, using defaults");
        DispatchConfig::default()
    });
    if let Ok(bind) = std::env::var("DISPATCH_BIND") {
        config.bind_addr = bind;
    }

    let mut rng = match config.seed.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Seed demo data, then build the service over it
    let repository = Arc::new(InMemoryTicketRepository::new());
    dispatch_api::seed::populate(&*repository, &config, &mut rng)?;

    let service = TicketService::new(repository, Box::new(StdRng::from_rng(&mut rng)?));
    let app = dispatch_api::build_router(ApiState::new(Arc::new(service)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Dispatch API listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
