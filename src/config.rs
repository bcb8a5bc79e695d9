//! Runtime settings from the environment (`.env` is honored when present).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://questions.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Which backing store a connection string selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    /// File-based (or in-memory) SQLite, for local runs and tests.
    Sqlite,
    /// Networked PostgreSQL, for production.
    Postgres,
}

impl StoreKind {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        if url.starts_with("sqlite:") {
            Ok(StoreKind::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(StoreKind::Postgres)
        } else {
            Err(ConfigError::UnsupportedDatabaseUrl(url.to_string()))
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        StoreKind::from_url(&database_url)?;

        let bind_addr = parse_or("BIND_ADDR", lookup("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => parse_var("DB_MAX_CONNECTIONS", &v)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: max_connections.to_string(),
            });
        }
        let body_limit = match lookup("BODY_LIMIT_BYTES") {
            Some(v) => parse_var("BODY_LIMIT_BYTES", &v)?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Settings {
            database_url,
            bind_addr,
            max_connections,
            body_limit,
        })
    }

    pub fn store_kind(&self) -> Result<StoreKind, ConfigError> {
        StoreKind::from_url(&self.database_url)
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<T, ConfigError> {
    parse_var(key, value.as_deref().unwrap_or(default))
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}
