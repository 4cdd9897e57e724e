//! Entity records of the continent/country/region hierarchy

pub mod continent;
pub mod country;
pub mod descriptor;
pub mod field;
pub mod record;
pub mod region;

pub use continent::Continent;
pub use country::Country;
pub use descriptor::{EntityDescriptor, EntityKind};
pub use field::FieldValue;
pub use record::{GeoRecord, Record, References};
pub use region::Region;
