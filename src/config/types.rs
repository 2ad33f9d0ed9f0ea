//! Process settings.

/// Origins allowed to call the API from a browser when `CORS_ORIGINS` is unset.
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://localhost:5173",
    "https://do-things.vercel.app",
    "https://main--do-thing.netlify.app",
];

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// PostgreSQL connection string. Required.
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub cors_origins: Vec<String>,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
}

impl Settings {
    /// Settings with every optional value at its default.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Settings {
            database_url: database_url.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}
