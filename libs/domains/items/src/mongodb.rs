//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemChanges, NewItem};
use crate::repository::ItemRepository;

pub const COLLECTION_NAME: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<Item>,
}

impl MongoItemRepository {
    /// Repository over the `items` collection of `db`
    ///
    /// ```ignore
    /// let client = database::mongodb::connect("mongodb://localhost:27017").await?;
    /// let repo = MongoItemRepository::new(client.database("shopping-list"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<Item>(COLLECTION_NAME),
        }
    }

    pub fn collection(&self) -> &Collection<Item> {
        &self.collection
    }

    fn by_id(id: ObjectId) -> Document {
        doc! { "_id": id }
    }

    fn set_name(name: &str) -> Document {
        doc! { "$set": { "name": name } }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let items: Vec<Item> = cursor.try_collect().await?;

        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: NewItem) -> ItemResult<Item> {
        let item = Item::new(input);

        self.collection.insert_one(&item).await?;

        tracing::info!(item_id = %item.id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self, changes))]
    async fn find_one_and_update(
        &self,
        id: ObjectId,
        changes: ItemChanges,
    ) -> ItemResult<Option<Item>> {
        let matched = match changes.name {
            Some(name) => {
                self.collection
                    .find_one_and_update(Self::by_id(id), Self::set_name(&name))
                    .return_document(ReturnDocument::Before)
                    .await?
            }
            None => self.collection.find_one(Self::by_id(id)).await?,
        };

        if matched.is_some() {
            tracing::info!(item_id = %id, "Item updated successfully");
        }
        Ok(matched)
    }

    #[instrument(skip(self))]
    async fn find_one_and_delete(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        let removed = self.collection.find_one_and_delete(Self::by_id(id)).await?;

        if removed.is_some() {
            tracing::info!(item_id = %id, "Item deleted successfully");
        }
        Ok(removed)
    }
}
