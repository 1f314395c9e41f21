use std::sync::Arc;

use greenlight_core::store::ProjectStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: greenlight_db::DbPool,
    /// Server configuration (JWT settings, cookie flags).
    pub config: Arc<ServerConfig>,
    /// Pitch catalog and the draft under edit. Each handler holds the lock
    /// for exactly one store operation.
    pub store: Arc<RwLock<ProjectStore>>,
}

impl AppState {
    pub fn new(pool: greenlight_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            store: Arc::new(RwLock::new(ProjectStore::new())),
        }
    }
}
