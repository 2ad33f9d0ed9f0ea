//! Extract the developer id from the `:id` path segment.

use crate::error::{AppError, FieldError};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde_json::Value;

/// Integer developer id from the path. Anything that is not an `i32` is a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeveloperId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for DeveloperId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| invalid_id(e.body_text()))?;
        parse_id(&raw)
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<DeveloperId, AppError> {
    raw.parse::<i32>()
        .map(DeveloperId)
        .map_err(|_| invalid_id("Input should be a valid integer, unable to parse string as an integer"))
}

fn invalid_id(msg: impl Into<String>) -> AppError {
    AppError::Validation(vec![FieldError::new(
        vec![Value::from("path"), Value::from("developer_id")],
        msg,
        "int_parsing",
    )])
}
