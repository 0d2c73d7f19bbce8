use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Item entity - the document stored in the `items` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Store-generated identifier
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Item name; missing or `null` in the stored document reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Document version marker, written as 0 and never touched afterwards
    #[serde(rename = "__v", default)]
    pub version: i32,
}

impl Item {
    pub fn new(input: NewItem) -> Self {
        Self {
            id: ObjectId::new(),
            name: input.name,
            version: 0,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Wire representation of an [`Item`]
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ItemResponse {
    /// 24-character hex ObjectId
    #[schema(example = "65f1c0ffee0ddba11ca7f00d")]
    pub id: String,
    #[schema(example = "Broad beans")]
    pub name: String,
    #[serde(rename = "__v")]
    #[schema(example = 0)]
    pub version: i32,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_hex(),
            name: item.name,
            version: item.version,
        }
    }
}

/// Body of `POST /items`. Unknown fields are ignored.
///
/// `name` is kept as raw JSON; the service casts it to a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateItem {
    #[schema(value_type = Option<String>, example = "Kale")]
    pub name: Option<Value>,
}

/// Body of `PUT /items/{id}`. Unknown fields, including any `id`, are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateItem {
    #[schema(value_type = Option<String>, example = "Banana")]
    pub name: Option<Value>,
}

/// Changes applied to a stored item; `None` leaves the field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
}

/// Insert payload handed to the repository once a name is known
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
