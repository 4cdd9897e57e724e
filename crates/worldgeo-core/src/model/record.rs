use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{Continent, Country, EntityDescriptor, EntityKind, FieldValue, Region};

/// Foreign keys carried by a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct References {
    pub continent_id: Option<i64>,
    pub country_id: Option<i64>,
}

/// A typed entity record that can be flattened into, and rebuilt from, a
/// field vector laid out in its descriptor's column order.
pub trait Record: Sized + Clone + PartialEq + std::fmt::Debug {
    const DESCRIPTOR: &'static EntityDescriptor;

    fn id(&self) -> i64;

    /// Same record with the surrogate id replaced
    fn with_id(self, id: i64) -> Self;

    fn into_fields(self) -> Vec<FieldValue>;

    /// Rebuild from a field vector.
    ///
    /// # Errors
    /// `RecordShape` if arity or a field type disagrees with the descriptor.
    fn from_fields(fields: Vec<FieldValue>) -> Result<Self>;

    fn into_geo(self) -> GeoRecord;

    fn to_fields(&self) -> Vec<FieldValue> {
        self.clone().into_fields()
    }

    fn references(&self) -> References {
        let fields = self.to_fields();
        let at = |position: Option<usize>| {
            position
                .and_then(|p| fields.get(p))
                .and_then(FieldValue::as_integer)
        };
        References {
            continent_id: at(Self::DESCRIPTOR.continent_ref),
            country_id: at(Self::DESCRIPTOR.country_ref),
        }
    }
}

/// Any one of the three entity records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "lowercase")]
pub enum GeoRecord {
    Continent(Continent),
    Country(Country),
    Region(Region),
}

impl GeoRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            GeoRecord::Continent(_) => EntityKind::Continent,
            GeoRecord::Country(_) => EntityKind::Country,
            GeoRecord::Region(_) => EntityKind::Region,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            GeoRecord::Continent(r) => r.id,
            GeoRecord::Country(r) => r.id,
            GeoRecord::Region(r) => r.id,
        }
    }
}

impl From<Continent> for GeoRecord {
    fn from(record: Continent) -> Self {
        GeoRecord::Continent(record)
    }
}

impl From<Country> for GeoRecord {
    fn from(record: Country) -> Self {
        GeoRecord::Country(record)
    }
}

impl From<Region> for GeoRecord {
    fn from(record: Region) -> Self {
        GeoRecord::Region(record)
    }
}
