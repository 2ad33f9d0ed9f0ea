//! Router assembly: common routes at the root, the developer resource under `/api/v1`, plus CORS, tracing and a body limit.

use crate::config::Settings;
use crate::routes::{common_routes_with_ready, developer_routes};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

pub fn build_app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_PREFIX, developer_routes(state))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Allow-listed origins, any method and header, credentials permitted.
/// Methods and headers are mirrored from the preflight because wildcards are not allowed alongside credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %s, "skipping unusable CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
