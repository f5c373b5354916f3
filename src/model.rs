//! Row and wire types for contact messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted contact message, as returned by `GET /api/messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_utc: DateTime<Utc>,
}

/// A validated, trimmed message waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub created_utc: DateTime<Utc>,
}

/// Body of `POST /api/messages`.
///
/// Every field is optional at the deserialization layer; a missing or `null`
/// field is reported through the same "All fields are required." path as an
/// empty one.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateMessageRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Body of a `201 Created` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CreatedMessage {
    pub id: i64,
}

/// Directory view entry returned by `GET /api/contacts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContactEntry {
    pub id: i64,
    pub name: String,
}

impl From<&ContactMessage> for ContactEntry {
    fn from(message: &ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.name.clone(),
        }
    }
}

impl ContactMessage {
    /// Canonical location of this record, used for the `Location` header.
    pub fn location(id: i64) -> String {
        format!("/api/messages/{id}")
    }
}
