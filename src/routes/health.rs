//! Liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

pub const HEALTHY: &str = "Healthy";

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApi;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(get_health))
}

/// Returns `"Healthy"` whenever the process can answer. Does not touch the store.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Process is up", body = String)
    )
)]
pub async fn get_health() -> Json<&'static str> {
    Json(HEALTHY)
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn health_is_fixed() {
        let Json(body) = get_health().await;
        assert_eq!(body, "Healthy");
    }
}
