use thiserror::Error;

use crate::model::EntityKind;

/// Result type alias using GeoError
pub type Result<T> = std::result::Result<T, GeoError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the engine can report is classified by one of these kinds.
/// The engine maps kinds to outcomes, so the grouping below matters:
/// the three referential kinds become save failures, `NotFound` becomes a
/// load failure, and everything from `Persistence` down is an engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Referential integrity
    UnknownContinent,
    UnknownCountry,
    CountryContinentMismatch,

    // Lookup
    NotFound,

    // Store lifecycle
    StoreOpenFailed,
    StoreNotOpen,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    RecordShape,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::UnknownContinent => "ERR_UNKNOWN_CONTINENT",
            ExErrorKind::UnknownCountry => "ERR_UNKNOWN_COUNTRY",
            ExErrorKind::CountryContinentMismatch => "ERR_COUNTRY_CONTINENT_MISMATCH",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::StoreOpenFailed => "ERR_STORE_OPEN_FAILED",
            ExErrorKind::StoreNotOpen => "ERR_STORE_NOT_OPEN",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::RecordShape => "ERR_RECORD_SHAPE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, entity kind, record id) for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity: Option<EntityKind>,
    entity_id: Option<i64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity kind context
    pub fn with_entity(mut self, entity: EntityKind) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Add record id context
    pub fn with_entity_id(mut self, id: i64) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity kind context, if any
    pub fn entity(&self) -> Option<EntityKind> {
        self.entity
    }

    /// Get the record id context, if any
    pub fn entity_id(&self) -> Option<i64> {
        self.entity_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        if let Some(id) = self.entity_id {
            write!(f, " (record_id: {})", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for worldgeo operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Referenced continent does not exist
    #[error("Continent {continent_id} does not exist")]
    UnknownContinent { continent_id: i64 },

    /// Referenced country does not exist
    #[error("Country {country_id} does not exist")]
    UnknownCountry { country_id: i64 },

    /// Country exists but belongs to another continent
    #[error("Country {country_id} does not belong to continent {continent_id}")]
    CountryContinentMismatch { country_id: i64, continent_id: i64 },

    /// Country update would strand regions on its old continent
    #[error("Country {country_id} has regions outside continent {continent_id}")]
    RegionsOutsideContinent { country_id: i64, continent_id: i64 },

    /// No row with this id
    #[error("{kind} {id} not found")]
    RecordNotFound { kind: EntityKind, id: i64 },

    /// Field vector does not fit the entity's column layout
    #[error("{kind} record shape mismatch: {reason}")]
    RecordShape { kind: EntityKind, reason: String },

    /// Path does not carry an accepted store extension
    #[error("Not a Database File: {path}")]
    UnsupportedStoreFile { path: String },

    /// A store intent arrived while no store is open
    #[error("Store is not open")]
    StoreNotOpen,
}

impl From<GeoError> for ExError {
    fn from(err: GeoError) -> Self {
        let message = err.to_string();
        match err {
            GeoError::UnknownContinent { continent_id } => {
                ExError::new(ExErrorKind::UnknownContinent)
                    .with_entity(EntityKind::Continent)
                    .with_entity_id(continent_id)
                    .with_message(message)
            }
            GeoError::UnknownCountry { country_id } => ExError::new(ExErrorKind::UnknownCountry)
                .with_entity(EntityKind::Country)
                .with_entity_id(country_id)
                .with_message(message),
            GeoError::CountryContinentMismatch { country_id, .. } => {
                ExError::new(ExErrorKind::CountryContinentMismatch)
                    .with_entity(EntityKind::Country)
                    .with_entity_id(country_id)
                    .with_message(message)
            }
            GeoError::RegionsOutsideContinent { country_id, .. } => {
                ExError::new(ExErrorKind::CountryContinentMismatch)
                    .with_entity(EntityKind::Country)
                    .with_entity_id(country_id)
                    .with_message(message)
            }
            GeoError::RecordNotFound { kind, id } => ExError::new(ExErrorKind::NotFound)
                .with_entity(kind)
                .with_entity_id(id)
                .with_message(message),
            GeoError::RecordShape { kind, .. } => ExError::new(ExErrorKind::RecordShape)
                .with_entity(kind)
                .with_message(message),
            GeoError::UnsupportedStoreFile { .. } => {
                ExError::new(ExErrorKind::StoreOpenFailed).with_message(message)
            }
            GeoError::StoreNotOpen => ExError::new(ExErrorKind::StoreNotOpen).with_message(message),
        }
    }
}
