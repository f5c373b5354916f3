//! Contact message intake service.
//!
//! Clients submit `{name, phone, email, message}` to `POST /api/messages`;
//! operators read them back newest first from `GET /api/messages`, or as a
//! name-sorted `{id, name}` directory from `GET /api/contacts`.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;
pub use store::{ContactStore, SqliteStore, StoreError};
