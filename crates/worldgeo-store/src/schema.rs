//! Embedded schema bootstrap
//!
//! The schema is embedded at compile time and applied with
//! `CREATE ... IF NOT EXISTS`, so running it against an existing store is a
//! no-op. There is no versioning: the three tables are the whole schema.

use crate::errors::{from_rusqlite, schema_error, Result};
use rusqlite::Connection;
use worldgeo_core::EntityKind;

const WORLD_SCHEMA: &str = include_str!("../schema/001_world.sql");

/// Create any missing tables and indexes
pub fn bootstrap(conn: &Connection) -> Result<()> {
    conn.execute_batch(WORLD_SCHEMA)
        .map_err(|e| schema_error(&e.to_string()))?;
    tracing::debug!("schema bootstrap applied");
    Ok(())
}

/// True when the table backing `kind` exists
pub fn table_exists(conn: &Connection, kind: EntityKind) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [kind.descriptor().table],
        |row| row.get(0),
    )
    .map_err(from_rusqlite)
}
