use axum::{Router, routing::get};
use axum_helpers::{create_router, health_router};
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::config::Config;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;

/// Item routes backed by the MongoDB `items` collection.
///
/// Returns a stateless Router; the service is already applied.
pub fn routes(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(state.database());
    handlers::router(ItemService::new(repository))
}

/// `GET /ready`, pinging MongoDB.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Full application: API routes, `/health`, docs and the static front-end.
pub fn app(config: &Config, api_routes: Router) -> Router {
    create_router::<ApiDoc>(api_routes.merge(health_router(config.app)), &config.static_dir)
}
