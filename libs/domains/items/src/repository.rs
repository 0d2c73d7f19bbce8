use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, NewItem};

/// Repository trait for Item persistence
///
/// Mirrors the four document-store primitives the HTTP routes need.
/// Implementations: [`crate::MongoItemRepository`], [`crate::InMemoryItemRepository`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// All items in the store's natural order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Insert one item; the id is assigned here
    async fn create(&self, input: NewItem) -> ItemResult<Item>;

    /// Apply `changes` to the item with `id` and return it **as matched**,
    /// before the update. A `None` name leaves the document untouched.
    async fn find_one_and_update(
        &self,
        id: ObjectId,
        changes: ItemChanges,
    ) -> ItemResult<Option<Item>>;

    /// Remove the item with `id` and return it
    async fn find_one_and_delete(&self, id: ObjectId) -> ItemResult<Option<Item>>;
}
