//! Utility functions and helpers.

pub mod document_format;
pub mod id_generator;

// Re-export commonly used types
pub use document_format::DocumentFormatter;
pub use id_generator::IdGenerator;
