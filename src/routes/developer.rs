//! Developer resource routes, mounted under `/api/v1` by the app router.

use crate::handlers::developer::{create, delete as delete_handler, list, read, replace};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn developer_routes(state: AppState) -> Router {
    Router::new()
        .route("/developers", get(list).post(create))
        .route("/developers/:id", get(read).put(replace).delete(delete_handler))
        .with_state(state)
}
