//! Developer CRUD on top of a `DeveloperStore`.

use crate::error::AppError;
use crate::model::{Developer, DeveloperPayload};
use crate::store::DeveloperStore;

pub struct DeveloperService;

impl DeveloperService {
    pub async fn list(store: &dyn DeveloperStore) -> Result<Vec<Developer>, AppError> {
        store.list().await
    }

    /// Fetch one developer. Absent ids are `NotFound`.
    pub async fn read(store: &dyn DeveloperStore, id: i32) -> Result<Developer, AppError> {
        store.get(id).await?.ok_or_else(AppError::developer_not_found)
    }

    /// Insert and return the stored record with its assigned id.
    pub async fn create(store: &dyn DeveloperStore, payload: DeveloperPayload) -> Result<Developer, AppError> {
        let id = store.insert(&payload).await?;
        tracing::info!(id, "developer created");
        Ok(Developer::from_payload(id, payload))
    }

    /// Overwrite row `id` and echo the payload back with that id.
    /// An absent id updates nothing and still echoes.
    pub async fn replace(
        store: &dyn DeveloperStore,
        id: i32,
        payload: DeveloperPayload,
    ) -> Result<Developer, AppError> {
        let affected = store.replace(id, &payload).await?;
        if affected == 0 {
            tracing::warn!(id, "replace matched no developer; nothing was written");
        }
        Ok(Developer::from_payload(id, payload))
    }

    /// Delete row `id`. Absent ids are not an error.
    pub async fn delete(store: &dyn DeveloperStore, id: i32) -> Result<(), AppError> {
        let affected = store.delete(id).await?;
        tracing::info!(id, affected, "developer delete");
        Ok(())
    }
}
