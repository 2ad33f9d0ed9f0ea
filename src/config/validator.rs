//! Settings validation.

use crate::config::Settings;
use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::net::SocketAddr;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let url = settings.database_url.as_str();
    if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
        return Err(ConfigError::Invalid {
            key: "DATABASE_URL",
            reason: "expected a postgres:// or postgresql:// URL".into(),
        });
    }

    settings
        .bind_addr
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            reason: e.to_string(),
        })?;

    if settings.max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    if settings.body_limit_bytes == 0 {
        return Err(ConfigError::Invalid {
            key: "BODY_LIMIT_BYTES",
            reason: "must be at least 1".into(),
        });
    }

    if settings.cors_origins.is_empty() {
        return Err(ConfigError::Invalid {
            key: "CORS_ORIGINS",
            reason: "at least one origin required".into(),
        });
    }
    for origin in &settings.cors_origins {
        if origin == "*" || HeaderValue::from_str(origin).is_err() {
            return Err(ConfigError::Invalid {
                key: "CORS_ORIGINS",
                reason: format!("not a usable origin: {}", origin),
            });
        }
    }
    Ok(())
}
