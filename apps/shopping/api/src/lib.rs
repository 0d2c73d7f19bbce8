//! Shopping List API
//!
//! An HTTP service over a MongoDB `items` collection, plus the static
//! front-end under `STATIC_DIR`.
//!
//! ## Architecture
//!
//! ```text
//! Browser / client
//!   ↓ HTTP + JSON
//! axum Router (api::app): /items, /health, /ready, docs, static files
//!   ↓
//! ItemService (domain_items)
//!   ↓
//! MongoItemRepository
//!   ↓
//! MongoDB
//! ```
//!
//! ## Modules
//!
//! - `config`: Configuration loaded from the environment
//! - `state`: Shared application state
//! - `api`: Router composition and readiness checks
//! - `openapi`: Combined OpenAPI document
//! - `server`: Startup and shutdown

pub mod api;
pub mod config;
pub mod openapi;
pub mod server;
pub mod state;

// Re-export for convenience
pub use config::Config;
pub use server::run;
pub use state::AppState;
