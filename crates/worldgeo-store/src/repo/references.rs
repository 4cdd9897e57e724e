//! SQLite-backed reference index for the integrity validator

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, Params};
use worldgeo_core::errors::ExError;
use worldgeo_core::model::descriptor::{CONTINENT, COUNTRY, REGION};
use worldgeo_core::ReferenceIndex;

/// Answers existence questions against the live store
pub struct SqliteReferences<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteReferences<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    fn exists<P: Params>(&self, sql: &str, params: P) -> Result<bool> {
        self.conn
            .query_row(sql, params, |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

impl ReferenceIndex for SqliteReferences<'_> {
    type Error = ExError;

    fn continent_exists(&self, continent_id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
            CONTINENT.table,
            CONTINENT.id_column()
        );
        self.exists(&sql, [continent_id])
    }

    fn country_exists(&self, country_id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1)",
            COUNTRY.table,
            COUNTRY.id_column()
        );
        self.exists(&sql, [country_id])
    }

    fn country_in_continent(&self, country_id: i64, continent_id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?1 AND continent_id = ?2)",
            COUNTRY.table,
            COUNTRY.id_column()
        );
        self.exists(&sql, [country_id, continent_id])
    }

    fn regions_outside_continent(&self, country_id: i64, continent_id: i64) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE country_id = ?1 AND continent_id <> ?2)",
            REGION.table
        );
        self.exists(&sql, [country_id, continent_id])
    }
}
