//! Request logic shared by the HTTP handlers.
//!
//! Holds no state of its own: every operation receives the store it works on.
//! Ordering and the directory projection are plain functions over the rows the
//! store hands back.

use chrono::Utc;
use tracing::info;

use crate::error::ApiError;
use crate::model::{ContactEntry, ContactMessage, CreateMessageRequest, NewContactMessage};
use crate::store::ContactStore;
use crate::validation::{self, ValidationPolicy};

/// Validate, trim, timestamp and persist a submission. Returns the new id.
///
/// Nothing reaches the store unless validation passes.
pub async fn create_message(
    store: &dyn ContactStore,
    request: &CreateMessageRequest,
    policy: ValidationPolicy,
) -> Result<i64, ApiError> {
    let draft = validation::validate(request, policy)?;

    let record = NewContactMessage {
        name: draft.name,
        phone: draft.phone,
        email: draft.email,
        message: draft.message,
        created_utc: Utc::now(),
    };

    let id = store.insert(record).await?;
    info!(id, "contact message stored");
    Ok(id)
}

/// Every message, newest first.
pub async fn list_messages(store: &dyn ContactStore) -> Result<Vec<ContactMessage>, ApiError> {
    Ok(order_newest_first(store.list_all().await?))
}

/// The `{id, name}` directory, sorted by name.
pub async fn list_contacts(store: &dyn ContactStore) -> Result<Vec<ContactEntry>, ApiError> {
    Ok(directory(&store.list_all().await?))
}

/// Sort by `created_utc` descending. Equal timestamps fall back to the later id first.
pub fn order_newest_first(mut messages: Vec<ContactMessage>) -> Vec<ContactMessage> {
    messages.sort_by(|a, b| {
        b.created_utc
            .cmp(&a.created_utc)
            .then_with(|| b.id.cmp(&a.id))
    });
    messages
}

/// Project every message to `{id, name}` and sort by name ascending.
///
/// Names compare ordinally (byte-wise UTF-8), so `"Zoe"` sorts before `"adam"`.
/// Equal names keep id order.
pub fn directory(messages: &[ContactMessage]) -> Vec<ContactEntry> {
    let mut entries: Vec<ContactEntry> = messages.iter().map(ContactEntry::from).collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    entries
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone};

    fn at(offset_secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(offset_secs)
    }

    fn row(id: i64, name: &str, created_utc: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: name.to_owned(),
            phone: "555".to_owned(),
            email: "x@example.com".to_owned(),
            message: "hi".to_owned(),
            created_utc,
        }
    }

    #[test]
    fn newest_first_orders_by_timestamp_descending() {
        let ordered = order_newest_first(vec![row(1, "a", at(1)), row(2, "b", at(3)), row(3, "c", at(2))]);
        let ids: Vec<i64> = ordered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn newest_first_breaks_ties_by_id() {
        let ordered = order_newest_first(vec![row(4, "a", at(0)), row(9, "b", at(0)), row(6, "c", at(0))]);
        let ids: Vec<i64> = ordered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![9, 6, 4]);
    }

    #[test]
    fn newest_first_of_empty_is_empty() {
        assert!(order_newest_first(Vec::new()).is_empty());
    }

    #[test]
    fn directory_sorts_by_name_case_sensitively() {
        let rows = vec![
            row(1, "adam", at(0)),
            row(2, "Zoe", at(1)),
            row(3, "Ada Lovelace", at(2)),
            row(4, "Bob", at(3)),
        ];
        let names: Vec<String> = directory(&rows).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Bob", "Zoe", "adam"]);
    }

    #[test]
    fn directory_keeps_every_record_including_duplicate_names() {
        let rows = vec![row(7, "Sam", at(0)), row(2, "Sam", at(1)), row(5, "Al", at(2))];
        let entries = directory(&rows);
        assert_eq!(
            entries,
            vec![
                ContactEntry { id: 5, name: "Al".into() },
                ContactEntry { id: 2, name: "Sam".into() },
                ContactEntry { id: 7, name: "Sam".into() },
            ]
        );
    }
}
