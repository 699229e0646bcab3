use std::sync::Arc;
use tokio::signal;
use tracing::info;

use game_core::{GameStore, LocalTargetProvider, Roster, TargetProvider};
use game_persistence::{SqlGameStore, connection::connect_and_migrate};
use game_server::{
    config::{Config, TargetMode},
    create_routes,
    remote::RemoteTargetProvider,
    session_manager::SessionManager,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting RUSSELL server...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Loading players from: {}", config.players_file.display());
    let roster = match Roster::from_file(&config.players_file) {
        Ok(roster) if !roster.is_empty() => {
            info!("Loaded {} players", roster.len());
            Arc::new(roster)
        }
        Ok(_) => {
            tracing::error!("Roster '{}' has no players", config.players_file.display());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Failed to load roster: {:#}", e);
            tracing::error!("Set PLAYERS_FILE to point to a JSON array of players.");
            std::process::exit(1);
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let store: Arc<dyn GameStore> = Arc::new(SqlGameStore::new(db));

    let provider: Arc<dyn TargetProvider> = match (config.target_mode, &config.target_url) {
        (TargetMode::Remote, Some(url)) => {
            info!("Using remote player of the day from {}", url);
            Arc::new(RemoteTargetProvider::new(url.clone()))
        }
        _ => {
            info!("Using local player of the day (seed {})", config.target_seed);
            Arc::new(LocalTargetProvider::new(roster.clone(), config.target_seed))
        }
    };

    let session_manager = Arc::new(
        SessionManager::new(roster, provider, store).with_suggestion_limit(config.suggestion_limit),
    );
    let routes = create_routes(session_manager);

    let host = match config.host.parse::<std::net::IpAddr>() {
        Ok(host) => host,
        Err(e) => {
            tracing::error!("Invalid HOST '{}': {}", config.host, e);
            std::process::exit(1);
        }
    };

    info!("Server starting on {}:{}", config.host, config.port);

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown((host, config.port), async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
