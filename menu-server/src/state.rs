//! Application state for menu-server

use sqlx::SqlitePool;

use crate::auth::AdminKey;
use crate::config::Config;
use crate::db::{self, BoxError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Configured admin credential
    pub admin_key: AdminKey,
    /// Guest session lifetime
    pub session_ttl: chrono::Duration,
}

impl AppState {
    /// Connect to the database (running migrations) and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = db::connect(&config.database_url, config.max_connections).await?;
        Ok(Self::with_pool(pool, config))
    }

    /// Build the state around an existing pool
    pub fn with_pool(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            admin_key: AdminKey::new(&config.admin_key),
            session_ttl: config.session_ttl,
        }
    }
}
