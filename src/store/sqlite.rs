//! SQLite implementation of [`ContactStore`].
//!
//! The schema lives in `./migrations` and is embedded at compile time with
//! `sqlx::migrate!`; [`SqliteStore::connect`] applies it on startup. Queries
//! use the runtime-checked `sqlx::query` form so no `DATABASE_URL` is needed
//! at build time.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::{ContactStore, StoreError};
use crate::model::{ContactMessage, NewContactMessage};

#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `url` and run pending migrations.
    ///
    /// `url` is any sqlx SQLite URL, e.g. `"sqlite://contacts.db"` or
    /// `"sqlite::memory:"`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");

        let mut options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new();

        if in_memory {
            // Each connection to `:memory:` is a separate database, so pin one
            // connection for the lifetime of the pool.
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            options = options.journal_mode(SqliteJournalMode::Wal);
            pool_options = pool_options.max_connections(max_connections.max(1));
        }

        let pool = pool_options.connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        debug!(url, in_memory, "sqlite store ready");

        Ok(Self { pool })
    }
}

#[async_trait]
impl ContactStore for SqliteStore {
    async fn insert(&self, record: NewContactMessage) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO contact_messages (name, phone, email, message, created_utc) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&record.name)
        .bind(&record.phone)
        .bind(&record.email)
        .bind(&record.message)
        .bind(record.created_utc)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let rows = sqlx::query_as::<_, ContactMessage>(
            "SELECT id, name, phone, email, message, created_utc FROM contact_messages",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    async fn memory_store() -> SqliteStore {
        SqliteStore::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory store")
    }

    fn record(name: &str, created_utc: chrono::DateTime<Utc>) -> NewContactMessage {
        NewContactMessage {
            name: name.to_owned(),
            phone: "555-0100".to_owned(),
            email: "someone@example.com".to_owned(),
            message: "Hello".to_owned(),
            created_utc,
        }
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = memory_store().await;
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids_and_round_trips_fields() {
        let store = memory_store().await;
        let t0 = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let first = store.insert(record("Ada", t0)).await.unwrap();
        let second = store
            .insert(record("Grace", t0 + Duration::milliseconds(1)))
            .await
            .unwrap();
        assert!(second > first);

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 2);

        let ada = rows.iter().find(|r| r.id == first).unwrap();
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.phone, "555-0100");
        assert_eq!(ada.email, "someone@example.com");
        assert_eq!(ada.message, "Hello");
        assert_eq!(ada.created_utc, t0);
    }

    #[tokio::test]
    async fn sub_second_timestamps_survive_storage() {
        let store = memory_store().await;
        let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + Duration::microseconds(123_456);

        let id = store.insert(record("Ada", stamp)).await.unwrap();
        let rows = store.list_all().await.unwrap();
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].created_utc, stamp);
    }

    #[tokio::test]
    async fn concurrent_inserts_receive_unique_ids() {
        let store = std::sync::Arc::new(memory_store().await);
        let now = Utc::now();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(record(&format!("n{i}"), now)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
        assert_eq!(store.list_all().await.unwrap().len(), 16);
    }

    #[tokio::test]
    async fn file_database_persists_across_reconnects() {
        let path = std::env::temp_dir().join(format!(
            "contact_messages_{}_{}.db",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let url = format!("sqlite://{}", path.display());

        let id = {
            let store = SqliteStore::connect(&url, 2).await.unwrap();
            store.insert(record("Ada", Utc::now())).await.unwrap()
        };

        let reopened = SqliteStore::connect(&url, 2).await.unwrap();
        let rows = reopened.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);

        drop(reopened);
        for suffix in ["", "-wal", "-shm"] {
            let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
        }
    }
}
