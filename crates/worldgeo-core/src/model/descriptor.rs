use serde::{Deserialize, Serialize};

/// The three entity collections of the geographic hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Continent,
    Country,
    Region,
}

impl EntityKind {
    /// Descriptor driving the generic algorithms for this kind
    pub fn descriptor(&self) -> &'static EntityDescriptor {
        match self {
            EntityKind::Continent => &CONTINENT,
            EntityKind::Country => &COUNTRY,
            EntityKind::Region => &REGION,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Continent => "continent",
            EntityKind::Country => "country",
            EntityKind::Region => "region",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-entity layout shared by the predicate builder, normalizer,
/// integrity validator, identifier generator and record mapper.
///
/// Column 0 is always the surrogate id. Column names are compile-time
/// constants and are the only identifiers ever formatted into SQL text.
#[derive(Debug, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub kind: EntityKind,
    pub table: &'static str,
    /// Every persisted column, in declared attribute order
    pub columns: &'static [&'static str],
    /// Positions of optional text fields persisted as NULL when blank
    pub nullable: &'static [usize],
    /// Position of the continent foreign key, if any
    pub continent_ref: Option<usize>,
    /// Position of the country foreign key, if any
    pub country_ref: Option<usize>,
}

impl EntityDescriptor {
    pub fn id_column(&self) -> &'static str {
        self.columns[0]
    }

    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }

    pub fn is_nullable(&self, position: usize) -> bool {
        self.nullable.contains(&position)
    }
}

pub const CONTINENT: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Continent,
    table: "continent",
    columns: &["continent_id", "continent_code", "name"],
    nullable: &[],
    continent_ref: None,
    country_ref: None,
};

pub const COUNTRY: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Country,
    table: "country",
    columns: &[
        "country_id",
        "country_code",
        "name",
        "continent_id",
        "wikipedia_link",
        "keywords",
    ],
    nullable: &[5],
    continent_ref: Some(3),
    country_ref: None,
};

pub const REGION: EntityDescriptor = EntityDescriptor {
    kind: EntityKind::Region,
    table: "region",
    columns: &[
        "region_id",
        "region_code",
        "local_code",
        "name",
        "continent_id",
        "country_id",
        "wikipedia_link",
        "keywords",
    ],
    nullable: &[6, 7],
    continent_ref: Some(4),
    country_ref: Some(5),
};
