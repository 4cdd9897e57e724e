//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, store_open_failed, Result};
use rusqlite::Connection;
use std::path::Path;
use worldgeo_core::errors::GeoError;

/// Reject paths whose extension is not one of `accepted`.
///
/// Matching is case-insensitive and ignores a leading dot in `accepted`.
pub fn ensure_store_file(path: &Path, accepted: &[String]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let ok = ext.is_some_and(|ext| {
        accepted
            .iter()
            .any(|a| a.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    });
    if ok {
        Ok(())
    } else {
        Err(GeoError::UnsupportedStoreFile {
            path: path.display().to_string(),
        }
        .into())
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|e| store_open_failed(&path.display().to_string(), e))
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
///
/// With `enforce_foreign_keys` the storage layer rejects dangling
/// references on its own, as a backstop behind the integrity validator.
pub fn configure(conn: &Connection, enforce_foreign_keys: bool) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", enforce_foreign_keys)
        .map_err(from_rusqlite)?;
    tracing::debug!(enforce_foreign_keys, "connection configured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldgeo_core::ExErrorKind;

    fn accepted() -> Vec<String> {
        vec!["db".to_string()]
    }

    #[test]
    fn test_db_extension_accepted() {
        assert!(ensure_store_file(Path::new("world.db"), &accepted()).is_ok());
        assert!(ensure_store_file(Path::new("data/WORLD.DB"), &accepted()).is_ok());
    }

    #[test]
    fn test_other_extensions_rejected() {
        for path in ["world.txt", "world", "world.db.bak", ".db"] {
            let err = ensure_store_file(Path::new(path), &accepted()).unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::StoreOpenFailed, "{path}");
        }
    }

    #[test]
    fn test_configure_enables_foreign_keys() {
        let conn = open_in_memory().unwrap();
        configure(&conn, true).unwrap();
        let on: bool = conn
            .query_row("PRAGMA foreign_keys", [], |r| r.get(0))
            .unwrap();
        assert!(on);
    }
}
