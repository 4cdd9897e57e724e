//! Store open and close

use rusqlite::Connection;
use std::path::Path;
use worldgeo_store::errors::{from_rusqlite, Result};
use worldgeo_store::{db, schema};

use crate::config::EngineConfig;

/// Open and prepare the store file at `path`.
///
/// The extension check runs before anything touches the filesystem, so a
/// rejected path is never created.
///
/// ## Errors
///
/// - `StoreOpenFailed`: extension not accepted, or SQLite could not open the file
/// - `Persistence`: configuring the connection or bootstrapping the schema failed
pub fn open_store(path: &Path, config: &EngineConfig) -> Result<Connection> {
    db::ensure_store_file(path, &config.accepted_extensions)?;
    let conn = db::open(path)?;
    db::configure(&conn, config.enforce_foreign_keys)?;
    if config.bootstrap_schema {
        schema::bootstrap(&conn)?;
    }
    tracing::debug!(path = %path.display(), "store prepared");
    Ok(conn)
}

/// Release a store handle
pub fn close_store(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_, e)| from_rusqlite(e))?;
    tracing::debug!("store handle released");
    Ok(())
}
