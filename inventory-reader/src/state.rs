//! Owned database handle for the inventory reader.

use std::time::Duration;

use bson::{doc, Document};
use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use mongodb::{options::ClientOptions, Client, Collection};

/// Reader state: the configuration and the connected client.
pub struct ReaderState {
    pub config: AppConfig,
    client: Client,
}

impl ReaderState {
    /// Connects to the database service.
    ///
    /// The client is pinged before returning, so unreachable hosts and
    /// rejected credentials fail here rather than mid-read.
    ///
    /// # Errors
    /// `AppError::Connection` when the URI cannot be parsed or the service
    /// cannot be reached, `AppError::Authentication` when credentials are
    /// rejected.
    pub async fn connect(config: AppConfig) -> AppResult<Self> {
        tracing::debug!(app_name = %config.app_name, "正在连接 MongoDB");

        let mut options = ClientOptions::parse(&config.connection_uri)
            .await
            .map_err(AppError::connection)?;

        if let Some(secs) = config.connect_timeout_secs {
            let timeout = Duration::from_secs(secs);
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
        }
        options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(options).map_err(AppError::connection)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(AppError::connection)?;

        tracing::info!(database = %config.database, "已连接 MongoDB");
        Ok(Self { config, client })
    }

    /// Handle to the configured collection.
    pub fn collection(&self) -> Collection<Document> {
        self.client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection)
    }
}
