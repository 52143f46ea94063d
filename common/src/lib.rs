//! Shared building blocks for the inventory reader.
//!
//! - `config`: explicit reader configuration loaded from the environment
//! - `errors`: error taxonomy and driver error classification
//! - `models`: result models
//! - `utils`: id generation and document rendering

pub mod config;
pub mod errors;
pub mod models;
pub mod utils;
