//! Search, load and save for any entity kind
//!
//! One generic handler per operation; the record type's descriptor supplies
//! the table, columns and reference positions.

use rusqlite::Connection;
use worldgeo_core::{
    normalize, validate_dependents, validate_references, GeoError, Record, SearchFields,
};
use worldgeo_store::errors::{from_rusqlite, Result};
use worldgeo_store::{SqliteReferences, SqliteRepo};

/// Records matching every non-empty search field
pub fn search<S: SearchFields>(conn: &Connection, search: &S) -> Result<Vec<S::Record>> {
    let desc = <S::Record as Record>::DESCRIPTOR;
    let predicate = search.predicate();
    let found = SqliteRepo::search::<S::Record>(conn, &predicate)?;
    tracing::debug!(
        entity = %desc.kind,
        clauses = predicate.clauses().len() as u64,
        result_count = found.len() as u64,
        "search complete"
    );
    Ok(found)
}

/// The record with this id
///
/// ## Errors
///
/// - `NotFound`: no row has this id
pub fn load<R: Record>(conn: &Connection, id: i64) -> Result<R> {
    SqliteRepo::load::<R>(conn, id)?.ok_or_else(|| {
        GeoError::RecordNotFound {
            kind: R::DESCRIPTOR.kind,
            id,
        }
        .into()
    })
}

/// Validate, assign the next id, normalize and insert.
///
/// The incoming id is ignored. Returns the record as stored.
///
/// ## Errors
///
/// - `UnknownContinent`, `UnknownCountry`, `CountryContinentMismatch`
/// - `Persistence`: database error
pub fn save_new<R: Record>(conn: &Connection, record: R) -> Result<R> {
    let tx = conn.unchecked_transaction().map_err(from_rusqlite)?;

    validate_references(&record, &SqliteReferences::new(&tx))?;
    let id = SqliteRepo::next_id(&tx, R::DESCRIPTOR)?;
    let stored = normalize(record.with_id(id))?;
    SqliteRepo::insert(&tx, &stored)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(stored)
}

/// Validate, normalize and overwrite the row with the record's id.
///
/// ## Errors
///
/// - `UnknownContinent`, `UnknownCountry`, `CountryContinentMismatch`
/// - `CountryContinentMismatch` also when a country would leave its regions
///   on another continent
/// - `NotFound`: no row has the record's id
/// - `Persistence`: database error
pub fn save<R: Record>(conn: &Connection, record: R) -> Result<R> {
    let index = SqliteReferences::new(conn);
    validate_references(&record, &index)?;
    validate_dependents(&record, &index)?;
    let stored = normalize(record)?;
    if SqliteRepo::update(conn, &stored)? == 0 {
        return Err(GeoError::RecordNotFound {
            kind: R::DESCRIPTOR.kind,
            id: stored.id(),
        }
        .into());
    }
    Ok(stored)
}
