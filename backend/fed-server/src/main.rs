use fed_server::{AppState, build_registry, build_router, logger};

use fed_config::Config;
use fed_db::{IdentityPoolOptions, IdentityRepository, IdentityStore, open_pool};

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Secrets usually arrive through .env in development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_deref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        log_file_path.as_deref(),
        config.logging.colored,
    )?;

    info!("Starting fed-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let operation_timeout = Duration::from_secs(config.database.operation_timeout_secs);
    let pool = open_pool(&IdentityPoolOptions {
        path: config.database_path()?,
        max_connections: config.database.max_connections,
        busy_timeout: operation_timeout,
    })
    .await?;

    let store: Arc<dyn IdentityStore> = Arc::new(
        IdentityRepository::new(pool)
            .with_operation_timeout(operation_timeout)
            .with_default_color(&config.profile.default_color),
    );

    let providers = build_registry(&config.providers)?;
    let state = AppState::build(&config, store, providers)?;

    // Forget idle login limiter keys once per window
    let limiter = state.login_limiter.clone();
    let prune_every = Duration::from_secs(config.rate_limit.login_window_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(prune_every);
        loop {
            interval.tick().await;
            limiter.prune();
            log::debug!("Login limiter tracking {} keys", limiter.tracked_keys());
        }
    });

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
