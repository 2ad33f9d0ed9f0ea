//! Shared application state handed to every route.

use crate::store::{DeveloperStore, PgDeveloperStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DeveloperStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DeveloperStore>) -> Self {
        AppState { store }
    }

    pub fn postgres(pool: PgPool) -> Self {
        AppState::new(Arc::new(PgDeveloperStore::new(pool)))
    }
}
