use std::sync::Arc;

use gallery_db::ImageStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Image data access; a SQLite store in production, a fake in tests.
    pub store: Arc<dyn ImageStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
