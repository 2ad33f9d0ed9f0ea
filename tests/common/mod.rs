#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use devfolio_api::{build_app, AppError, AppState, Developer, DeveloperPayload, DeveloperStore, Settings};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory store with auto-increment ids starting at 1.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    next_id: i32,
    rows: BTreeMap<i32, Developer>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl DeveloperStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Developer>, AppError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Developer>, AppError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn insert(&self, payload: &DeveloperPayload) -> Result<i32, AppError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(id, Developer::from_payload(id, payload.clone()));
        Ok(id)
    }

    async fn replace(&self, id: i32, payload: &DeveloperPayload) -> Result<u64, AppError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = Developer::from_payload(id, payload.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct DownStore;

#[async_trait]
impl DeveloperStore for DownStore {
    async fn list(&self) -> Result<Vec<Developer>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get(&self, _id: i32) -> Result<Option<Developer>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _payload: &DeveloperPayload) -> Result<i32, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn replace(&self, _id: i32, _payload: &DeveloperPayload) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i32) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_settings() -> Settings {
    Settings::with_database_url("postgres://localhost/devfolio_test")
}

pub fn app_with(store: Arc<dyn DeveloperStore>) -> Router {
    build_app(AppState::new(store), &test_settings())
}

pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (app_with(store.clone()), store)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, req).await
}

pub async fn send_request(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub fn ada() -> Value {
    serde_json::json!({
        "name": "Ada",
        "photoUrl": "http://x/a.png",
        "twitterUrl": "http://x.com/ada",
        "projects": [{ "name": "Engine", "url": "http://proj/1" }]
    })
}

pub fn developer(name: &str, projects: usize) -> Value {
    let projects: Vec<Value> = (0..projects)
        .map(|i| serde_json::json!({ "name": format!("{}-p{}", name, i), "url": format!("http://proj/{}/{}", name, i) }))
        .collect();
    serde_json::json!({
        "name": name,
        "photoUrl": format!("http://img/{}.png", name),
        "twitterUrl": format!("http://twitter.com/{}", name),
        "projects": projects
    })
}

/// Copy of `body` with `id` added.
pub fn with_id(body: &Value, id: i64) -> Value {
    let mut out = body.clone();
    out["id"] = Value::from(id);
    out
}
