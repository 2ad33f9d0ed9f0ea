//! Devfolio API: developer profile CRUD over PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;

pub use app::{build_app, API_PREFIX};
pub use config::Settings;
pub use error::{AppError, ConfigError, FieldError};
pub use migration::apply_migrations;
pub use model::{Developer, DeveloperPayload, Project};
pub use routes::{common_routes_with_ready, developer_routes};
pub use service::{DeveloperService, RequestValidator};
pub use state::AppState;
pub use store::{DeveloperStore, PgDeveloperStore};
