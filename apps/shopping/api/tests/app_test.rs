//! End-to-end checks of the composed application with an in-memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use core_config::{AppInfo, Environment, server::ServerConfig};
use database::mongodb::MongoConfig;
use domain_items::{InMemoryItemRepository, ItemService, handlers};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use shopping_api::{Config, api};
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><title>Shopping List</title>";

fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('items');").unwrap();

    let config = Config {
        app: AppInfo {
            name: "shopping_api",
            version: "0.1.0",
        },
        server: ServerConfig::default(),
        mongo: MongoConfig::default(),
        static_dir: dir.path().to_path_buf(),
        environment: Environment::Development,
    };

    let items = handlers::router(ItemService::new(InMemoryItemRepository::new()));
    (api::app(&config, items), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
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
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_reports_app_info() {
    let (app, _dir) = test_app();

    let (status, body) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "shopping_api");
}

#[tokio::test]
async fn test_serves_front_end() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), INDEX_HTML);

    let (status, _) = send(&app, "GET", "/app.js", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_paths_are_json_not_found() {
    let (app, _dir) = test_app();

    for (method, uri) in [
        ("GET", "/nope"),
        ("POST", "/index.html"),
        ("PUT", "/items"),
        ("DELETE", "/items/"),
        ("GET", "/items/64b7f0c2a1b2c3d4e5f60718"),
        ("POST", "/items/64b7f0c2a1b2c3d4e5f60718"),
    ] {
        let (status, body) = send_json(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, json!({ "message": "Not Found" }), "{} {}", method, uri);
    }
}

#[tokio::test]
async fn test_shopping_list_lifecycle() {
    let (app, _dir) = test_app();

    let (status, body) = send_json(&app, "GET", "/items", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let mut ids = Vec::new();
    for (uri, name) in [("/items", "Broad beans"), ("/items/", "Tomatoes"), ("/items", "Peppers")] {
        let (status, body) = send_json(&app, "POST", uri, Some(json!({ "name": name }))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], name);
        assert_eq!(body["__v"], 0);
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    let (_, body) = send_json(&app, "GET", "/items/", None).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Broad beans", "Tomatoes", "Peppers"]);

    // Rename answers with the document as it was before the write
    let uri = format!("/items/{}", ids[1]);
    let (status, body) =
        send_json(&app, "PUT", &uri, Some(json!({ "name": "Cherry tomatoes" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], ids[1].as_str());
    assert_eq!(body["name"], "Tomatoes");

    let (_, body) = send_json(&app, "GET", "/items", None).await;
    assert_eq!(body[1]["name"], "Cherry tomatoes");

    let uri = format!("/items/{}", ids[0]);
    let (status, body) = send_json(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Broad beans");

    let (status, body) = send_json(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Item not found" }));

    let (_, body) = send_json(&app, "GET", "/items", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_ids_are_item_not_found() {
    let (app, _dir) = test_app();

    let (status, body) =
        send_json(&app, "PUT", "/items/not-an-id", Some(json!({ "name": "Kale" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Item not found" }));

    let (status, body) = send_json(&app, "DELETE", "/items/123", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Item not found" }));
}

#[tokio::test]
async fn test_create_without_name_is_internal_error() {
    let (app, _dir) = test_app();

    let (status, body) = send_json(&app, "POST", "/items", Some(json!({}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal Server Error" }));

    let (_, body) = send_json(&app, "GET", "/items", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_openapi_document_lists_item_paths() {
    let (app, _dir) = test_app();

    let (status, body) = send_json(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Shopping List API");
    assert!(body["paths"]["/items"].is_object());
    assert!(body["paths"]["/items/{id}"]["put"].is_object());
}
