//! Item Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use serde_json::{Number, Value};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemChanges, NewItem, UpdateItem};
use crate::repository::ItemRepository;

/// Item operations behind the HTTP routes
///
/// Ids arrive as raw path segments and are parsed here, so a malformed id
/// and an unknown id surface as distinct [`ItemError`]s before the handlers
/// collapse them.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// An empty name is accepted; a missing one is not.
    #[instrument(skip(self, input))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let name = cast_name(input.name)?.ok_or(ItemError::MissingName)?;
        self.repository.create(NewItem { name }).await
    }

    /// Returns the item as it was before the update.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: &str, input: UpdateItem) -> ItemResult<Item> {
        let id = parse_id(id)?;
        let changes = ItemChanges {
            name: cast_name(input.name)?,
        };
        self.repository
            .find_one_and_update(id, changes)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Returns the removed item.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> ItemResult<Item> {
        let id = parse_id(id)?;
        self.repository
            .find_one_and_delete(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn parse_id(id: &str) -> ItemResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ItemError::InvalidId(id.to_string()))
}

/// Casts a JSON `name` to its stored string form.
///
/// Strings pass through, numbers and booleans become their text, `null`
/// counts as absent. Arrays and objects have no string form.
fn cast_name(name: Option<Value>) -> ItemResult<Option<String>> {
    match name {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => Ok(Some(name)),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(Value::Number(number)) => Ok(Some(number_text(&number))),
        Some(other) => Err(ItemError::InvalidName(other.to_string())),
    }
}

// 5.0 is written "5", like the integer it equals
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}
