use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{MethodRouter, get, put},
};
use axum_helpers::{
    AppError, LenientJson,
    errors::{
        handlers::not_found,
        responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemError;
use crate::models::{CreateItem, ItemResponse, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, update_item, delete_item),
    components(
        schemas(ItemResponse, CreateItem, UpdateItem),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Shopping list items")
    )
)]
pub struct ApiDoc;

type ItemState<R> = State<Arc<ItemService<R>>>;

/// Create the items router
///
/// `/items` and `/items/` are the same collection route. Methods without a
/// handler answer with the JSON 404, never 405.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/items", collection_routes::<R>())
        .route("/items/", collection_routes::<R>())
        .route(
            "/items/{id}",
            put(update_item::<R>)
                .delete(delete_item::<R>)
                .fallback(not_found),
        )
        .with_state(shared_service)
}

fn collection_routes<R: ItemRepository + 'static>() -> MethodRouter<Arc<ItemService<R>>> {
    get(list_items::<R>)
        .post(create_item::<R>)
        .fallback(not_found)
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items in store order", body = Vec<ItemResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): ItemState<R>,
) -> Result<Json<Vec<ItemResponse>>, AppError> {
    let items = service
        .list_items()
        .await
        .map_err(ItemError::into_store_failure)?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): ItemState<R>,
    LenientJson(input): LenientJson<CreateItem>,
) -> Result<impl IntoResponse, AppError> {
    let item = service
        .create_item(input)
        .await
        .map_err(ItemError::into_store_failure)?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// Rename an item, returning it as it was before the rename
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ObjectId (24 hex characters)")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Matched item, pre-update values", body = ItemResponse),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): ItemState<R>,
    Path(id): Path<String>,
    LenientJson(input): LenientJson<UpdateItem>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = service
        .update_item(&id, input)
        .await
        .map_err(ItemError::into_lookup_failure)?;

    Ok(Json(item.into()))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Removed item", body = ItemResponse),
        (status = 400, response = BadRequestResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): ItemState<R>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, AppError> {
    let item = service
        .delete_item(&id)
        .await
        .map_err(ItemError::into_lookup_failure)?;

    Ok(Json(item.into()))
}
