//! Blank-field normalization applied before every write
//!
//! Blank optional fields (the descriptor's `nullable` positions) are stored
//! as NULL. Any other blank text field is stored as [`PLACEHOLDER`].
//! Integer fields and NULLs pass through untouched.

use crate::errors::Result;
use crate::model::{EntityDescriptor, FieldValue, Record};

/// Stored in place of a blank required text field
pub const PLACEHOLDER: &str = "(unassigned)";

/// Normalize a field vector laid out per `descriptor`
pub fn normalize_fields(descriptor: &EntityDescriptor, fields: Vec<FieldValue>) -> Vec<FieldValue> {
    fields
        .into_iter()
        .enumerate()
        .map(|(position, field)| match field {
            FieldValue::Text(text) if text.is_empty() => {
                if descriptor.is_nullable(position) {
                    FieldValue::Null
                } else {
                    FieldValue::Text(PLACEHOLDER.to_string())
                }
            }
            other => other,
        })
        .collect()
}

/// Normalize a typed record, returning the value that will be persisted
/// and echoed back to the caller.
///
/// # Errors
/// `RecordShape` only if the record's own field mapping is inconsistent
/// with its descriptor.
pub fn normalize<R: Record>(record: R) -> Result<R> {
    let fields = normalize_fields(R::DESCRIPTOR, record.into_fields());
    tracing::debug!(entity = %R::DESCRIPTOR.kind, "normalized record fields");
    R::from_fields(fields)
}
