use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::descriptor::REGION;
use crate::model::field::FieldReader;
use crate::model::{EntityDescriptor, FieldValue, GeoRecord, Record};

/// Region - belongs to a country, and through it to a continent.
///
/// `continent_id` is stored redundantly and must agree with the continent of
/// `country_id`; the integrity validator enforces that on every save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: i64,
    pub region_code: String,
    pub local_code: String,
    pub name: String,
    pub continent_id: i64,
    pub country_id: i64,
    pub wikipedia_link: Option<String>,
    pub keywords: Option<String>,
}

impl Record for Region {
    const DESCRIPTOR: &'static EntityDescriptor = &REGION;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    fn into_fields(self) -> Vec<FieldValue> {
        vec![
            self.id.into(),
            self.region_code.into(),
            self.local_code.into(),
            self.name.into(),
            self.continent_id.into(),
            self.country_id.into(),
            self.wikipedia_link.into(),
            self.keywords.into(),
        ]
    }

    fn from_fields(fields: Vec<FieldValue>) -> Result<Self> {
        let mut reader = FieldReader::new(Self::DESCRIPTOR, fields)?;
        Ok(Self {
            id: reader.integer()?,
            region_code: reader.text()?,
            local_code: reader.text()?,
            name: reader.text()?,
            continent_id: reader.integer()?,
            country_id: reader.integer()?,
            wikipedia_link: reader.optional_text()?,
            keywords: reader.optional_text()?,
        })
    }

    fn into_geo(self) -> GeoRecord {
        GeoRecord::Region(self)
    }
}
