use fm_config::Config;
use fm_server::authorizer::build_authorizer;
use fm_server::{AppState, build_router, logger};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => Some(Config::config_dir()?.join(filename)),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = fm_db::open_pool(&database_path, config.database.max_connections).await?;

    info!("Running database migrations...");
    fm_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Authorization
    let authorizer = Arc::new(build_authorizer(&config, pool.clone())?);

    let app_state = AppState::new(pool.clone(), authorizer);
    let app = build_router(app_state, &config.server);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    // Port 0 is resolved by the OS
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Keep serving; only a signal stops the server
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
