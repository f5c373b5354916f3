//! `/api/messages` and `/api/contacts`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::model::{ContactEntry, ContactMessage, CreateMessageRequest, CreatedMessage};
use crate::service;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(create_message, list_messages, list_contacts),
    components(schemas(CreateMessageRequest, CreatedMessage, ContactMessage, ContactEntry))
)]
pub struct MessagesApi;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/messages", get(list_messages).post(create_message))
        .route("/api/contacts", get(list_contacts))
}

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = CreatedMessage,
            headers(("location" = String, description = "Path of the new message"))),
        (status = 400, description = "A field is empty after trimming", body = String),
        (status = 500, description = "Storage failure", body = String),
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let id = service::create_message(
        state.store.as_ref(),
        &request,
        state.config.validation_policy(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, ContactMessage::location(id))],
        Json(CreatedMessage { id }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    responses(
        (status = 200, description = "All messages, newest first", body = [ContactMessage]),
        (status = 500, description = "Storage failure", body = String),
    )
)]
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    Ok(Json(service::list_messages(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "Directory entries sorted by name", body = [ContactEntry]),
        (status = 500, description = "Storage failure", body = String),
    )
)]
pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<ContactEntry>>, ApiError> {
    Ok(Json(service::list_contacts(state.store.as_ref()).await?))
}
