//! Items Domain
//!
//! The shopping-list item service: list, create, rename and delete items
//! kept in a MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, error collapse per route
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← id parsing, required name
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + MongoDB and in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← document, wire DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, MongoItemRepository, ItemService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoItemRepository::new(client.database("shopping-list"));
//! let service = ItemService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use crate::error::{ITEM_NOT_FOUND, ItemError, ItemResult};
pub use crate::handlers::ApiDoc;
pub use crate::memory::InMemoryItemRepository;
pub use crate::models::{CreateItem, Item, ItemChanges, ItemResponse, NewItem, UpdateItem};
pub use crate::mongodb::MongoItemRepository;
pub use crate::repository::ItemRepository;
pub use crate::service::ItemService;
