//! Extract and validate a developer body before any handler logic runs.

use crate::error::{AppError, FieldError};
use crate::model::DeveloperPayload;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde_json::Value;

/// A structurally valid create/replace body.
#[derive(Clone, Debug)]
pub struct DeveloperBody(pub DeveloperPayload);

#[async_trait]
impl<S> FromRequest<S> for DeveloperBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_content_type(req.headers()) {
            return Err(AppError::Validation(vec![FieldError::new(
                vec![Value::from("body")],
                "Expected request with `Content-Type: application/json`",
                "content_type",
            )]));
        }
        // Body-limit rejections keep their own status.
        let bytes = Bytes::from_request(req, state).await?;
        parse_body(&bytes).map(DeveloperBody)
    }
}

/// `application/json` or any `application/*+json`. A missing header is read as JSON.
fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

pub(crate) fn parse_body(bytes: &[u8]) -> Result<DeveloperPayload, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(vec![FieldError::new(
            vec![Value::from("body")],
            "Field required",
            "missing",
        )]));
    }
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        AppError::Validation(vec![FieldError::new(
            vec![Value::from("body"), Value::from(byte_offset(bytes, e.line(), e.column()))],
            format!("JSON decode error: {}", e),
            "json_invalid",
        )])
    })?;
    RequestValidator::developer(&value)
}

/// Zero-based offset into `bytes` of a 1-based line/column position.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = bytes
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(bytes.len())
}
