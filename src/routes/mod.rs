//! Axum router construction.
//!
//! [`build`] wires the health, message and contact routes, the optional
//! OpenAPI document, and the request-id / tracing layers.

pub mod doc;
pub mod health;
pub mod messages;

use axum::extract::Request;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info_span, Span};

use crate::state::AppState;

pub static X_REQUEST_ID: &str = "x-request-id";

pub fn build(state: AppState) -> Router {
    let mut app = Router::new()
        .merge(health::router())
        .merge(messages::router());

    if state.config.enable_openapi {
        app = app.route("/openapi.json", get(doc::openapi_json));
    }

    app.layer(
        // Outermost first: the id must exist before the span reads it.
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id()),
    )
    .with_state(state)
}

fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
