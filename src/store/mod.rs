//! Persistence layer.
//!
//! [`ContactStore`] is the whole storage contract: append a row, read every
//! row. Ordering and projection live in [`crate::service`] so any backend that
//! can do those two things is enough. The default backend is
//! [`sqlite::SqliteStore`].

pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{ContactMessage, NewContactMessage};

pub use sqlite::SqliteStore;

/// Failure to complete a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Append-only storage for contact messages.
#[async_trait]
pub trait ContactStore: Send + Sync + 'static {
    /// Persist `record` atomically and return its newly assigned id.
    ///
    /// Ids are unique and strictly increasing across concurrent callers.
    async fn insert(&self, record: NewContactMessage) -> Result<i64, StoreError>;

    /// Every persisted row, in no particular order.
    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError>;
}
