//! In-memory implementation of ItemRepository, for tests and store-less runs

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, NewItem};
use crate::repository::ItemRepository;

/// Keeps items in insertion order, like a collection without a sort.
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with `items`, in order
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items.into_iter().collect())),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let item = Item::new(input);
        self.items.write().await.push(item.clone());

        tracing::info!(item_id = %item.id, "Item created");
        Ok(item)
    }

    async fn find_one_and_update(
        &self,
        id: ObjectId,
        changes: ItemChanges,
    ) -> ItemResult<Option<Item>> {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        let matched = item.clone();
        if let Some(name) = changes.name {
            item.name = name;
        }
        Ok(Some(matched))
    }

    async fn find_one_and_delete(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        let mut items = self.items.write().await;
        let removed = items
            .iter()
            .position(|item| item.id == id)
            .map(|index| items.remove(index));
        Ok(removed)
    }
}
