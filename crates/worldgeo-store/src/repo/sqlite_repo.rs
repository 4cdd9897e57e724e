//! SQLite repository implementation
//!
//! Search, load, id generation and writes for any `Record` type. Table and
//! column names come from the record's descriptor; every user-supplied value
//! is bound as a parameter.

use crate::errors::{from_rusqlite, Result};
use crate::repo::mapper::{row_fields, to_params};
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use worldgeo_core::errors::ExError;
use worldgeo_core::{EntityDescriptor, Predicate, Record};

/// SQLite repository for continents, countries and regions
pub struct SqliteRepo;

impl SqliteRepo {
    fn select_list(desc: &EntityDescriptor) -> String {
        desc.columns.join(", ")
    }

    /// All records matching `predicate`, in store iteration order
    pub fn search<R: Record>(conn: &Connection, predicate: &Predicate) -> Result<Vec<R>> {
        let desc = R::DESCRIPTOR;
        let sql = format!(
            "SELECT {} FROM {} {}",
            Self::select_list(desc),
            desc.table,
            predicate.where_clause()
        );
        tracing::debug!(entity = %desc.kind, sql = %sql, "search");

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params_from_iter(predicate.values()), |row| {
                row_fields(row, desc.arity())
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        rows.into_iter()
            .map(|fields| R::from_fields(fields).map_err(ExError::from))
            .collect()
    }

    /// Record with this surrogate id, if any
    pub fn load<R: Record>(conn: &Connection, id: i64) -> Result<Option<R>> {
        let desc = R::DESCRIPTOR;
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            Self::select_list(desc),
            desc.table,
            desc.id_column()
        );

        let fields = conn
            .query_row(&sql, [id], |row| row_fields(row, desc.arity()))
            .optional()
            .map_err(from_rusqlite)?;

        fields
            .map(|f| R::from_fields(f).map_err(ExError::from))
            .transpose()
    }

    /// Next surrogate id: current maximum + 1, or 1 for an empty collection
    pub fn next_id(conn: &Connection, desc: &EntityDescriptor) -> Result<i64> {
        let sql = format!(
            "SELECT COALESCE(MAX({}), 0) + 1 FROM {}",
            desc.id_column(),
            desc.table
        );
        let id: i64 = conn
            .query_row(&sql, [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        tracing::debug!(entity = %desc.kind, next_id = id, "next id");
        Ok(id)
    }

    /// Insert a record as-is, id included
    pub fn insert<R: Record>(conn: &Connection, record: &R) -> Result<()> {
        let desc = R::DESCRIPTOR;
        let placeholders: Vec<String> = (1..=desc.arity()).map(|i| format!("?{}", i)).collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            desc.table,
            Self::select_list(desc),
            placeholders.join(", ")
        );

        conn.execute(&sql, params_from_iter(to_params(record.to_fields())))
            .map_err(from_rusqlite)?;
        tracing::debug!(entity = %desc.kind, record_id = record.id(), "inserted");
        Ok(())
    }

    /// Overwrite every non-id column of the row keyed by the record's id.
    ///
    /// Returns the number of rows changed (0 when no row has that id).
    pub fn update<R: Record>(conn: &Connection, record: &R) -> Result<usize> {
        let desc = R::DESCRIPTOR;
        // Column 0 is the id and binds as ?1; the rest follow in order.
        let assignments: Vec<String> = desc
            .columns
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?1",
            desc.table,
            assignments.join(", "),
            desc.id_column()
        );

        let changed = conn
            .execute(&sql, params_from_iter(to_params(record.to_fields())))
            .map_err(from_rusqlite)?;
        tracing::debug!(entity = %desc.kind, record_id = record.id(), changed = changed as u64, "updated");
        Ok(changed)
    }
}
