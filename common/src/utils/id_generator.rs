//! Run identifier generator.

use uuid::Uuid;

/// Generates identifiers used to correlate log lines of a single read.
pub struct IdGenerator;

impl IdGenerator {
    /// Generates a short run ID (first 8 characters of a UUID v4).
    pub fn run_id() -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        id
    }
}
