use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, Result};
use crate::model::EntityDescriptor;

/// One column value of a record, independent of the storage backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Null,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }
}

/// Sequential reader used by the typed records to rebuild themselves from
/// a field vector in declared column order.
pub(crate) struct FieldReader {
    descriptor: &'static EntityDescriptor,
    fields: std::vec::IntoIter<FieldValue>,
    position: usize,
}

impl FieldReader {
    pub(crate) fn new(descriptor: &'static EntityDescriptor, fields: Vec<FieldValue>) -> Result<Self> {
        if fields.len() != descriptor.arity() {
            return Err(GeoError::RecordShape {
                kind: descriptor.kind,
                reason: format!("expected {} fields, got {}", descriptor.arity(), fields.len()),
            });
        }
        Ok(Self {
            descriptor,
            fields: fields.into_iter(),
            position: 0,
        })
    }

    fn next(&mut self) -> (usize, Option<FieldValue>) {
        let position = self.position;
        self.position += 1;
        (position, self.fields.next())
    }

    fn mismatch(&self, position: usize, expected: &str, got: Option<&FieldValue>) -> GeoError {
        GeoError::RecordShape {
            kind: self.descriptor.kind,
            reason: format!(
                "column {} ({}) expected {}, got {:?}",
                position,
                self.descriptor.columns.get(position).copied().unwrap_or("?"),
                expected,
                got
            ),
        }
    }

    pub(crate) fn integer(&mut self) -> Result<i64> {
        match self.next() {
            (_, Some(FieldValue::Integer(i))) => Ok(i),
            (position, other) => Err(self.mismatch(position, "integer", other.as_ref())),
        }
    }

    pub(crate) fn text(&mut self) -> Result<String> {
        match self.next() {
            (_, Some(FieldValue::Text(s))) => Ok(s),
            (position, other) => Err(self.mismatch(position, "text", other.as_ref())),
        }
    }

    pub(crate) fn optional_text(&mut self) -> Result<Option<String>> {
        match self.next() {
            (_, Some(FieldValue::Text(s))) => Ok(Some(s)),
            (_, Some(FieldValue::Null)) => Ok(None),
            (position, other) => Err(self.mismatch(position, "text or null", other.as_ref())),
        }
    }
}
