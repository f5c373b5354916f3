use axum::Json;
use utoipa::OpenApi;

use crate::routes::{health, messages};

#[derive(OpenApi)]
#[openapi(info(
    title = "contact_messages",
    description = "Contact message intake and directory API"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(messages::MessagesApi::openapi());
    root
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(get_docs())
}
