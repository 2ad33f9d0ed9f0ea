//! Developer CRUD handlers: list, read, create, replace, delete.

use crate::error::AppError;
use crate::extractors::{DeveloperBody, DeveloperId};
use crate::response::{message, ok, DEVELOPER_DELETED};
use crate::service::DeveloperService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let developers = DeveloperService::list(state.store.as_ref()).await?;
    Ok(ok(developers))
}

pub async fn read(
    State(state): State<AppState>,
    DeveloperId(id): DeveloperId,
) -> Result<impl IntoResponse, AppError> {
    let developer = DeveloperService::read(state.store.as_ref(), id).await?;
    Ok(ok(developer))
}

pub async fn create(
    State(state): State<AppState>,
    DeveloperBody(payload): DeveloperBody,
) -> Result<impl IntoResponse, AppError> {
    let developer = DeveloperService::create(state.store.as_ref(), payload).await?;
    Ok(ok(developer))
}

/// PUT replaces the whole record. An unknown id is echoed back without creating a row.
/// Path and body problems are reported together.
pub async fn replace(
    State(state): State<AppState>,
    id: Result<DeveloperId, AppError>,
    body: Result<DeveloperBody, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let (DeveloperId(id), DeveloperBody(payload)) = AppError::combine(id, body)?;
    let developer = DeveloperService::replace(state.store.as_ref(), id, payload).await?;
    Ok(ok(developer))
}

pub async fn delete(
    State(state): State<AppState>,
    DeveloperId(id): DeveloperId,
) -> Result<impl IntoResponse, AppError> {
    DeveloperService::delete(state.store.as_ref(), id).await?;
    Ok(message(DEVELOPER_DELETED))
}
