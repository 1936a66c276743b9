//! Server configuration
//!
//! Read once at startup from shuttle secrets (Secrets.toml):
//! - CORS_ALLOWED_ORIGINS: comma-separated origins, absent or `*` for any
//! - SWAGGER_UI_ENABLED: `false`/`0`/`no`/`off` hides the API docs
//! - DICE_STORAGE: `postgres` (default) or `memory` for a process-local store

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
const SWAGGER_UI_ENABLED: &str = "SWAGGER_UI_ENABLED";
const DICE_STORAGE: &str = "DICE_STORAGE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidFlag { key: &'static str, value: String },

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// Where dice are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    #[default]
    Postgres,
    /// Lost on restart
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::InvalidFlag {
                key: DICE_STORAGE,
                value: s.to_string(),
            }),
        }
    }
}

/// Which origins may call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Permissive,
    Origins(Vec<HeaderValue>),
}

impl CorsPolicy {
    pub fn layer(&self) -> CorsLayer {
        match self {
            CorsPolicy::Permissive => CorsLayer::permissive(),
            CorsPolicy::Origins(origins) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins.clone()))
                .allow_methods(Any)
                .allow_headers(Any),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cors: CorsPolicy,
    pub swagger_ui: bool,
    pub storage: StorageBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cors: CorsPolicy::Permissive,
            swagger_ui: true,
            storage: StorageBackend::default(),
        }
    }
}

impl AppConfig {
    /// Build from a key lookup, e.g. `|key| secrets.get(key)`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors = match lookup(CORS_ALLOWED_ORIGINS) {
            Some(raw) => parse_origins(&raw)?,
            None => CorsPolicy::Permissive,
        };

        let swagger_ui = match lookup(SWAGGER_UI_ENABLED) {
            Some(raw) => parse_flag(SWAGGER_UI_ENABLED, &raw)?,
            None => true,
        };

        let storage = match lookup(DICE_STORAGE) {
            Some(raw) => raw.parse()?,
            None => StorageBackend::default(),
        };

        Ok(Self {
            cors,
            swagger_ui,
            storage,
        })
    }
}

fn parse_origins(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsPolicy::Permissive);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::Origins)
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}
