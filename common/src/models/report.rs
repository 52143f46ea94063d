//! Read result models.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one read-all pass over a collection.
#[derive(Debug, Clone, Serialize)]
pub struct ReadReport {
    /// Run identifier shared with the log lines of the read.
    pub run_id: String,
    /// Database that was read.
    pub database: String,
    /// Collection that was read.
    pub collection: String,
    /// Number of documents written to the output.
    pub documents: u64,
    /// When the read started.
    pub started_at: DateTime<Utc>,
    /// Wall time of the read in milliseconds.
    pub duration_ms: u64,
}

impl ReadReport {
    /// Starts a report with zero documents.
    pub fn begin(
        run_id: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            database: database.into(),
            collection: collection.into(),
            documents: 0,
            started_at: Utc::now(),
            duration_ms: 0,
        }
    }

    /// Stamps the elapsed time since `started_at`.
    pub fn finish(mut self) -> Self {
        let elapsed = Utc::now() - self.started_at;
        self.duration_ms = elapsed.num_milliseconds().max(0) as u64;
        self
    }
}
