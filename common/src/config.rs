//! Reader configuration.
//!
//! Configuration is an explicit value handed to the reader. Only the
//! process entry point touches the environment; everything else receives
//! an `AppConfig`.

use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Environment variable holding the connection URI.
pub const CONNECTION_ENV: &str = "atlasConnection";
/// Environment variable holding the optional cursor batch size.
pub const BATCH_SIZE_ENV: &str = "INVENTORY_BATCH_SIZE";
/// Environment variable holding the optional connect timeout in seconds.
pub const CONNECT_TIMEOUT_ENV: &str = "MONGO_CONNECT_TIMEOUT_SECS";

/// Database the inventory lives in.
pub const DATABASE_NAME: &str = "ePortfolio";
/// Collection read by the inventory reader.
pub const COLLECTION_NAME: &str = "inventory";

/// Inventory reader configuration.
#[derive(Clone, Validate)]
pub struct AppConfig {
    /// Full connection URI, credentials included.
    #[validate(length(min = 1, message = "connection URI must not be empty"))]
    pub connection_uri: String,
    /// Database name.
    #[validate(length(min = 1, message = "database name must not be empty"))]
    pub database: String,
    /// Collection name.
    #[validate(length(min = 1, message = "collection name must not be empty"))]
    pub collection: String,
    /// Cursor batch size; driver default when unset.
    #[validate(range(min = 1, message = "batch size must be at least 1"))]
    pub batch_size: Option<u32>,
    /// Connect and server selection timeout; driver default when unset.
    pub connect_timeout_secs: Option<u64>,
    /// Application name reported to the server.
    pub app_name: String,
}

// Manual impl so the URI (which carries credentials) never reaches logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("connection_uri", &"<redacted>")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("batch_size", &self.batch_size)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl AppConfig {
    /// Loads configuration for the given service from the process environment.
    pub fn load_with_service(service: &str) -> AppResult<Self> {
        Self::from_lookup(service, |key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `AppError::Configuration` if the connection URI is missing or
    /// blank, or if an optional numeric setting does not parse.
    pub fn from_lookup<F>(service: &str, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_uri = lookup(CONNECTION_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Configuration(format!("{CONNECTION_ENV} is not set")))?;

        let config = Self {
            connection_uri,
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
            batch_size: parse_optional(&lookup, BATCH_SIZE_ENV)?,
            connect_timeout_secs: parse_optional(&lookup, CONNECT_TIMEOUT_ENV)?,
            app_name: service.to_string(),
        };
        config.validate()?;

        tracing::debug!(
            service,
            database = %config.database,
            collection = %config.collection,
            batch_size = ?config.batch_size,
            "配置已加载"
        );
        Ok(config)
    }
}

fn parse_optional<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).map(|v| v.trim().to_string()) {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| AppError::Configuration(format!("{key} has invalid value: {v}"))),
    }
}
