//! Load settings from the process environment (and `.env`, if present).

use crate::config::types::Settings;
use crate::config::validate;
use crate::error::ConfigError;
use std::str::FromStr;

impl Settings {
    /// Read settings from the environment after loading `.env`. Fails when `DATABASE_URL` is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let mut settings = Settings::with_database_url(database_url);

        if let Some(addr) = get("BIND_ADDR") {
            settings.bind_addr = addr;
        }
        if let Some(n) = get("DB_MAX_CONNECTIONS") {
            settings.max_connections = parse("DB_MAX_CONNECTIONS", &n)?;
        }
        if let Some(n) = get("BODY_LIMIT_BYTES") {
            settings.body_limit_bytes = parse("BODY_LIMIT_BYTES", &n)?;
        }
        if let Some(origins) = get("CORS_ORIGINS") {
            settings.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }

        validate(&settings)?;
        Ok(settings)
    }
}

fn parse<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}
