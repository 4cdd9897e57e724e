use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::descriptor::COUNTRY;
use crate::model::field::FieldReader;
use crate::model::{EntityDescriptor, FieldValue, GeoRecord, Record};

/// Country - belongs to exactly one continent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub continent_id: i64,
    /// Required text; blank input is stored as the placeholder
    pub wikipedia_link: String,
    /// Absent when unset
    pub keywords: Option<String>,
}

impl Record for Country {
    const DESCRIPTOR: &'static EntityDescriptor = &COUNTRY;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.id.into(),
            self.code.into(),
            self.name.into(),
            self.continent_id.into(),
            self.wikipedia_link.into(),
            self.keywords.into(),
        ]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self> {
        let mut reader = FieldReader::new(Self::DESCRIPTOR, fields)?;
        Ok(Self {
            id: reader.integer()?,
            code: reader.text()?,
            name: reader.text()?,
            continent_id: reader.integer()?,
            wikipedia_link: reader.text()?,
            keywords: reader.optional_text()?,
        })
    }

    fn into_geo(self) -> GeoRecord {
        GeoRecord::Country(self)
    }
}
