//! MongoDB-backed repository and router tests.
//!
//! Run with `cargo test -p domain_items -- --ignored` (requires Docker).

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use domain_items::{
    ItemChanges, ItemRepository, ItemService, MongoItemRepository, NewItem, handlers,
};
use http_body_util::BodyExt;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestMongo};
use tower::ServiceExt;

fn repository(mongo: &TestMongo, test_name: &str) -> MongoItemRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    MongoItemRepository::new(mongo.database(&builder.database_name()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_repository_round_trip() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "test_repository_round_trip");

    let created = repo.create(NewItem::new("Kale")).await.unwrap();
    assert_eq!(created.version, 0);

    let listed = repo.list().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let matched = repo
        .find_one_and_update(
            created.id,
            ItemChanges {
                name: Some("Banana".into()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(matched.name, "Kale");
    assert_eq!(repo.list().await.unwrap()[0].name, "Banana");

    let removed = repo.find_one_and_delete(created.id).await.unwrap().unwrap();
    assert_eq!(removed.name, "Banana");
    assert!(repo.find_one_and_delete(created.id).await.unwrap().is_none());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_update_without_name_does_not_write() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "test_update_without_name_does_not_write");

    let created = repo.create(NewItem::new("Tomatoes")).await.unwrap();
    let matched = repo
        .find_one_and_update(created.id, ItemChanges::default())
        .await
        .unwrap();

    assert_eq!(matched, Some(created.clone()));
    assert_eq!(repo.list().await.unwrap(), vec![created]);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_list_reads_documents_with_null_name() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "test_list_reads_documents_with_null_name");

    let id = ObjectId::new();
    repo.collection()
        .clone_with_type::<Document>()
        .insert_one(doc! { "_id": id, "name": Bson::Null, "__v": 0 })
        .await
        .unwrap();
    let kale = repo.create(NewItem::new("Kale")).await.unwrap();

    let items = repo.list().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, id);
    assert_eq!(items[0].name, "");
    assert_eq!(items[1], kale);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_shopping_list_scenarios() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "test_shopping_list_scenarios");

    let mut seeded = Vec::new();
    for name in ["Broad beans", "Tomatoes", "Peppers"] {
        seeded.push(repo.create(NewItem::new(name)).await.unwrap());
    }
    let app = handlers::router(ItemService::new(repo));

    // List
    let (status, body) = send(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["name"], "Broad beans");

    // Create
    let (status, body) = send(&app, "POST", "/items", Some(json!({ "name": "Kale" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Kale");
    assert!(ObjectId::parse_str(body["id"].as_str().unwrap()).is_ok());

    // Update returns the pre-update document
    let beans = seeded[0].id.to_hex();
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/items/{beans}"),
        Some(json!({ "name": "Banana" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Broad beans");
    assert_eq!(body["id"], beans);

    // Delete, then delete again
    let peppers = seeded[2].id.to_hex();
    let (status, body) = send(&app, "DELETE", &format!("/items/{peppers}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Peppers");
    assert_eq!(body["id"], peppers);

    let (_, body) = send(&app, "GET", "/items", None).await;
    assert!(body.as_array().unwrap().iter().all(|item| item["id"] != peppers));

    let (status, body) = send(&app, "DELETE", &format!("/items/{peppers}"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Item not found" }));

    // Malformed id
    let (status, body) = send(&app, "PUT", "/items/abc", Some(json!({ "name": "x" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Item not found" }));
}
