//! worldgeo store - SQLite persistence for the geographic hierarchy
//!
//! Provides:
//! - Connection open/configure with store-file checks
//! - Idempotent schema bootstrap for the continent/country/region tables
//! - Descriptor-driven repository (search, load, next id, insert, update)
//! - SQLite-backed reference index for the integrity validator

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::{SqliteReferences, SqliteRepo};
