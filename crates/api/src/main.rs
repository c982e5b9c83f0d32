use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gallery_api::config::ServerConfig;
use gallery_api::router::build_app_router;
use gallery_api::state::AppState;
use gallery_db::{DbPool, SqliteImageStore};

const DEFAULT_LOG_FILTER: &str = "gallery_api=debug,gallery_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    let pool = open_database(&config.database_url).await;

    let state = AppState {
        store: Arc::new(SqliteImageStore::new(pool.clone())),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let ip = config.host.parse().expect("HOST must be an IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, "Serving gallery");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Server stopped");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open (creating if needed), check, and migrate the gallery database.
async fn open_database(database_url: &str) -> DbPool {
    let pool = gallery_db::create_pool(database_url)
        .await
        .unwrap_or_else(|e| panic!("Failed to open database {database_url}: {e}"));

    gallery_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    gallery_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(database_url, "Database ready");
    pool
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.expect("Failed to install Ctrl-C handler"),
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl-C handler");

    tracing::info!("Shutdown signal received, draining connections");
}
