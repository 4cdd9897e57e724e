//! Row ⇄ field-vector conversion
//!
//! The typed half of the mapping (field vector ⇄ record) lives on
//! `worldgeo_core::Record`; this module only bridges rusqlite values.

use rusqlite::types::{Value, ValueRef};
use rusqlite::Row;
use worldgeo_core::FieldValue;

/// Read the first `arity` columns of a row in order
pub fn row_fields(row: &Row<'_>, arity: usize) -> rusqlite::Result<Vec<FieldValue>> {
    (0..arity)
        .map(|i| match row.get_ref(i)? {
            ValueRef::Null => Ok(FieldValue::Null),
            ValueRef::Integer(n) => Ok(FieldValue::Integer(n)),
            ValueRef::Text(bytes) => std::str::from_utf8(bytes)
                .map(|s| FieldValue::Text(s.to_string()))
                .map_err(rusqlite::Error::Utf8Error),
            other => Err(rusqlite::Error::InvalidColumnType(
                i,
                row.as_ref().column_name(i).unwrap_or("?").to_string(),
                other.data_type(),
            )),
        })
        .collect()
}

/// Bind values for a field vector
pub fn to_params(fields: Vec<FieldValue>) -> Vec<Value> {
    fields
        .into_iter()
        .map(|field| match field {
            FieldValue::Integer(n) => Value::Integer(n),
            FieldValue::Text(s) => Value::Text(s),
            FieldValue::Null => Value::Null,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_row_fields_reads_each_storage_class() {
        let conn = Connection::open_in_memory().unwrap();
        let fields = conn
            .query_row("SELECT 7, 'seven', NULL", [], |row| row_fields(row, 3))
            .unwrap();
        assert_eq!(
            fields,
            vec![
                FieldValue::Integer(7),
                FieldValue::Text("seven".to_string()),
                FieldValue::Null
            ]
        );
    }

    #[test]
    fn test_real_column_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn
            .query_row("SELECT 1.5", [], |row| row_fields(row, 1))
            .unwrap_err();
        assert!(matches!(err, rusqlite::Error::InvalidColumnType(0, _, _)));
    }

    #[test]
    fn test_to_params_preserves_order() {
        let params = to_params(vec![
            FieldValue::Integer(1),
            FieldValue::Null,
            FieldValue::Text("x".to_string()),
        ]);
        assert_eq!(
            params,
            vec![Value::Integer(1), Value::Null, Value::Text("x".to_string())]
        );
    }
}
