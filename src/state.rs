//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::config::Config;
use crate::store::ContactStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Storage backend; handlers receive it through `State`, never a global.
    pub store: Arc<dyn ContactStore>,
}

impl AppState {
    pub fn new(config: Config, store: impl ContactStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
