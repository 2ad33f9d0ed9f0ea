//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),
    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// One problem found while validating a request: where it is, what is wrong, and its kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(loc: Vec<Value>, msg: impl Into<String>, kind: &'static str) -> Self {
        FieldError {
            loc,
            msg: msg.into(),
            kind,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {} field error(s)", .0.len())]
    Validation(Vec<FieldError>),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    /// The body could not be read at all (e.g. over the size limit).
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl AppError {
    pub fn developer_not_found() -> Self {
        AppError::NotFound("Developer not found".into())
    }

    /// Join two independently extracted inputs. Validation errors from both sides are reported together;
    /// any other error wins over validation errors.
    pub fn combine<A, B>(a: Result<A, AppError>, b: Result<B, AppError>) -> Result<(A, B), AppError> {
        match (a, b) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(AppError::Validation(mut first)), Err(AppError::Validation(second))) => {
                first.extend(second);
                Err(AppError::Validation(first))
            }
            (Err(AppError::Validation(_)), Err(other)) => Err(other),
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody<T: Serialize> {
    pub detail: T,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::debug!(errors = ?errors, "request rejected");
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorBody { detail: errors })).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorBody { detail: message })).into_response()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                internal_error()
            }
            AppError::Body(rejection) => rejection.into_response(),
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration failure");
                internal_error()
            }
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: "Internal Server Error",
        }),
    )
        .into_response()
}
