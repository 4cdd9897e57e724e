//! worldgeo core - validation and query kernel
//!
//! This crate holds the I/O-free part of the engine:
//! - Continent, Country and Region records plus the per-entity descriptor
//!   that drives every generic algorithm
//! - Predicate building for sparse search input
//! - Field normalization (placeholder vs. absent values)
//! - Referential integrity checks across the continent/country/region hierarchy
//! - The structured error facility and the logging facility
//!
//! Persistence lives in `worldgeo-store`; intent dispatch in `worldgeo-engine`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod query;
pub mod rules;

// Logging macros expand to paths inside this re-export.
pub use worldgeo_core_types;

pub use errors::{ExError, ExErrorKind, GeoError, Result};
pub use model::{
    Continent, Country, EntityDescriptor, EntityKind, FieldValue, GeoRecord, Record, Region,
};
pub use query::{ContinentSearch, CountrySearch, Predicate, RegionSearch, SearchFields};
pub use rules::normalize::{normalize, PLACEHOLDER};
pub use rules::validation::{validate_dependents, validate_references, ReferenceIndex};
