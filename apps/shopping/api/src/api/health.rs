//! Readiness check backed by a MongoDB ping.

use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;

/// `{"status": "ready", "database": "connected"}`, or 503 with
/// `"not ready"` / `"disconnected"` while MongoDB is unreachable.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            let status = check_health_detailed(&state.mongo).await;
            tracing::debug!(response_time_ms = status.response_time_ms, "MongoDB ping");

            if status.healthy {
                Ok(())
            } else {
                Err(format!(
                    "MongoDB ping failed: {}",
                    status.message.unwrap_or_default()
                ))
            }
        }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
