use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use axum::{Json, Router, handler::HandlerWithoutStateExt, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Combines the API routes with documentation, static files and request tracing.
///
/// - OpenAPI JSON at `/api-docs/openapi.json`, Scalar UI at `/scalar`
/// - API routes merged at the root, with their state already applied
/// - anything else is looked up under `static_dir`; a missing file, or any
///   method other than GET/HEAD, ends in the JSON 404
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use utoipa::OpenApi;
/// use axum_helpers::server::create_router;
///
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new()
///     .route("/items", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, "public");
/// ```
pub fn create_router<T>(apis: Router, static_dir: impl AsRef<Path>) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new()
        .route("/api-docs/openapi.json", get(|| async { Json(T::openapi()) }))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Binds `server_config.address()` and serves until SIGINT/SIGTERM, with
/// nothing to clean up afterwards.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    create_production_app(router, server_config, Duration::ZERO, async {}).await
}

/// Binds `server_config.address()` and serves until SIGINT/SIGTERM.
///
/// `cleanup` starts as soon as shutdown begins and is abandoned after
/// `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// let cleanup = async move {
///     client.shutdown().await;
/// };
///
/// create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;

    serve_with_shutdown(
        listener,
        router,
        ShutdownCoordinator::new(),
        shutdown_timeout,
        cleanup,
    )
    .await
}

/// Serves on an already bound listener until `coordinator` fires.
///
/// Returns after both the server has drained and the cleanup has finished
/// or timed out.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let mut shutdown_rx = coordinator.subscribe();
    let cleanup_handle = tokio::spawn(async move {
        if shutdown_rx.recv().await.is_err() {
            return;
        }

        info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
        match tokio::time::timeout(shutdown_timeout, cleanup).await {
            Ok(()) => info!("Cleanup completed successfully"),
            Err(_) => warn!(
                "Cleanup exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            ),
        }
    });

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    // Also covers the server failing without a shutdown event
    coordinator.shutdown();
    cleanup_handle.await.ok();

    serve_result
}
