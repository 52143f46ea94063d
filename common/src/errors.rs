//! Error types for the inventory reader.
//!
//! Driver errors are classified by the phase they occur in: anything that
//! fails while establishing the client is a connection problem, anything
//! that fails afterwards is a query problem. Rejected credentials are
//! reported as authentication failures in either phase.

use mongodb::error::{Error as MongoError, ErrorKind};
use thiserror::Error;

/// Result alias used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Application error taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The database service could not be reached or the URI is unusable.
    #[error("connection error: {0}")]
    Connection(String),

    /// The service rejected the credentials embedded in the URI.
    #[error("authentication error: {0}")]
    Authentication(String),

    /// The find command or cursor iteration failed.
    #[error("query error: {0}")]
    Query(String),

    /// A document could not be rendered.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Writing to the output stream failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Classifies a driver error raised while setting up the client.
    pub fn connection(err: MongoError) -> Self {
        if is_auth_failure(&err) {
            AppError::Authentication(err.to_string())
        } else {
            AppError::Connection(err.to_string())
        }
    }

    /// Classifies a driver error raised by the find command or the cursor.
    pub fn query(err: MongoError) -> Self {
        if is_auth_failure(&err) {
            AppError::Authentication(err.to_string())
        } else {
            AppError::Query(err.to_string())
        }
    }

    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Connection(_) => "CONNECTION_ERROR",
            AppError::Authentication(_) => "AUTHENTICATION_ERROR",
            AppError::Query(_) => "QUERY_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Output(_) => "OUTPUT_ERROR",
        }
    }
}

fn is_auth_failure(err: &MongoError) -> bool {
    matches!(err.kind.as_ref(), ErrorKind::Authentication { .. })
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Configuration(err.to_string())
    }
}
