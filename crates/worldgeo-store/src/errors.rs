//! Error handling for worldgeo-store
//!
//! Wraps worldgeo-core ExError with store-specific helpers

use worldgeo_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// The store file could not be opened or configured
pub fn store_open_failed(path: &str, reason: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::StoreOpenFailed)
        .with_op("store_open")
        .with_message(format!("{}: {}", path, reason))
}

/// Schema bootstrap failed
pub fn schema_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("schema_bootstrap")
        .with_message(reason.to_string())
}
