//! Application state management.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned into the readiness handler and the shutdown cleanup; clones of the
/// MongoDB client share one connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, connected before the listener binds
    pub mongo: Client,
}

impl AppState {
    /// Database holding the `items` collection
    pub fn database(&self) -> Database {
        self.mongo.database(self.config.mongo.database())
    }
}
