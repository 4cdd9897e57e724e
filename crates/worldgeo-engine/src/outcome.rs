//! Outcomes returned to a front end

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use worldgeo_core::errors::{ExError, ExErrorKind};
use worldgeo_core::{EntityKind, GeoRecord};

use crate::intent::Target;

/// Why a save was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveFailure {
    #[error("UnknownContinent")]
    UnknownContinent,
    #[error("UnknownCountry")]
    UnknownCountry,
    #[error("CountryContinentMismatch")]
    CountryContinentMismatch,
    /// Update of an id with no row
    #[error("RecordNotFound")]
    RecordNotFound,
}

/// One response to an intent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    StoreOpened { path: PathBuf },
    StoreOpenFailed { reason: String },
    StoreClosed,
    ApplicationEnded,
    SearchResult { record: GeoRecord },
    Loaded { record: GeoRecord },
    LoadFailed { entity: EntityKind, id: i64, reason: String },
    Saved { record: GeoRecord },
    SaveFailed { entity: EntityKind, reason: SaveFailure, message: String },
    /// Unexpected store-level fault
    EngineFailure { op: String, message: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::StoreOpenFailed { .. }
                | Outcome::LoadFailed { .. }
                | Outcome::SaveFailed { .. }
                | Outcome::EngineFailure { .. }
        )
    }

    /// The record carried by a search, load or save result
    pub fn record(&self) -> Option<&GeoRecord> {
        match self {
            Outcome::SearchResult { record }
            | Outcome::Loaded { record }
            | Outcome::Saved { record } => Some(record),
            _ => None,
        }
    }

    /// Map a failed intent to its single failure outcome
    pub(crate) fn from_error(op: &str, target: Target, err: ExError) -> Self {
        let save_failure = match err.kind() {
            ExErrorKind::UnknownContinent => Some(SaveFailure::UnknownContinent),
            ExErrorKind::UnknownCountry => Some(SaveFailure::UnknownCountry),
            ExErrorKind::CountryContinentMismatch => Some(SaveFailure::CountryContinentMismatch),
            ExErrorKind::NotFound => Some(SaveFailure::RecordNotFound),
            _ => None,
        };

        match (target, err.kind()) {
            (Target::Open, _) => Outcome::StoreOpenFailed {
                reason: err.message().to_string(),
            },
            (Target::Load(entity, id), ExErrorKind::NotFound) => Outcome::LoadFailed {
                entity,
                id,
                reason: err.message().to_string(),
            },
            (Target::Save(entity), _) => match save_failure {
                Some(reason) => Outcome::SaveFailed {
                    entity,
                    reason,
                    message: err.message().to_string(),
                },
                None => Outcome::EngineFailure {
                    op: op.to_string(),
                    message: err.to_string(),
                },
            },
            _ => Outcome::EngineFailure {
                op: op.to_string(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldgeo_core::GeoError;

    #[test]
    fn test_validation_error_on_save_is_save_failure() {
        let err: ExError = GeoError::UnknownContinent { continent_id: 42 }.into();
        let outcome = Outcome::from_error("save_new_country", Target::Save(EntityKind::Country), err);
        match outcome {
            Outcome::SaveFailed { entity, reason, .. } => {
                assert_eq!(entity, EntityKind::Country);
                assert_eq!(reason.to_string(), "UnknownContinent");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_on_load_is_load_failure() {
        let err: ExError = GeoError::RecordNotFound {
            kind: EntityKind::Region,
            id: 3,
        }
        .into();
        let outcome = Outcome::from_error("load_region", Target::Load(EntityKind::Region, 3), err);
        assert!(matches!(outcome, Outcome::LoadFailed { id: 3, .. }));
    }

    #[test]
    fn test_persistence_error_is_engine_failure() {
        let err = ExError::new(ExErrorKind::Persistence).with_message("disk full");
        for target in [
            Target::Search(EntityKind::Continent),
            Target::Load(EntityKind::Continent, 1),
            Target::Save(EntityKind::Continent),
            Target::Lifecycle,
        ] {
            let outcome = Outcome::from_error("op", target, err.clone());
            assert!(matches!(outcome, Outcome::EngineFailure { .. }), "{target:?}");
        }
    }

    #[test]
    fn test_any_open_error_is_open_failure() {
        let err = ExError::new(ExErrorKind::Persistence).with_message("file is not a database");
        let outcome = Outcome::from_error("open_store", Target::Open, err);
        assert_eq!(
            outcome,
            Outcome::StoreOpenFailed {
                reason: "file is not a database".to_string()
            }
        );
    }
}
