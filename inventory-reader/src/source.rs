//! Document sources.

use async_trait::async_trait;
use bson::{doc, Document};
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use mongodb::Collection;

use common::errors::{AppError, AppResult};

use crate::state::ReaderState;

/// Forward-only stream of documents in store order.
pub type DocumentStream = BoxStream<'static, AppResult<Document>>;

/// Source of the documents to print.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Database the documents come from.
    fn database(&self) -> &str;

    /// Collection the documents come from.
    fn collection(&self) -> &str;

    /// Starts an unfiltered read over every document.
    async fn find_all(&self) -> AppResult<DocumentStream>;
}

/// MongoDB collection source.
pub struct MongoSource {
    database: String,
    collection: Collection<Document>,
    batch_size: Option<u32>,
}

impl MongoSource {
    /// Creates a source over the configured collection of a connected state.
    pub fn new(state: &ReaderState) -> Self {
        Self {
            database: state.config.database.clone(),
            collection: state.collection(),
            batch_size: state.config.batch_size,
        }
    }
}

#[async_trait]
impl DocumentSource for MongoSource {
    fn database(&self) -> &str {
        &self.database
    }

    fn collection(&self) -> &str {
        self.collection.name()
    }

    async fn find_all(&self) -> AppResult<DocumentStream> {
        let mut find = self.collection.find(doc! {});
        if let Some(size) = self.batch_size {
            find = find.batch_size(size);
        }

        let cursor = find.await.map_err(AppError::query)?;
        Ok(cursor.map_err(AppError::query).boxed())
    }
}
