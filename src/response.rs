//! Response helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

pub const DEVELOPER_DELETED: &str = "Developer deleted successfully";

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(message: &'static str) -> (StatusCode, Json<Message>) {
    ok(Message { message })
}
