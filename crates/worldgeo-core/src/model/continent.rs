use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::descriptor::CONTINENT;
use crate::model::field::FieldReader;
use crate::model::{EntityDescriptor, FieldValue, GeoRecord, Record};

/// Continent - root of the hierarchy, no foreign references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl Continent {
    pub fn new(id: i64, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
        }
    }
}

impl Record for Continent {
    const DESCRIPTOR: &'static EntityDescriptor = &CONTINENT;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![self.id.into(), self.code.into(), self.name.into()]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self> {
        let mut reader = FieldReader::new(Self::DESCRIPTOR, fields)?;
        Ok(Self {
            id: reader.integer()?,
            code: reader.text()?,
            name: reader.text()?,
        })
    }

    fn into_geo(self) -> GeoRecord {
        GeoRecord::Continent(self)
    }
}
