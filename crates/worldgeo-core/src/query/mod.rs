//! Search input for each entity kind

pub mod predicate;

pub use predicate::{Clause, Predicate};

use serde::{Deserialize, Serialize};

use crate::model::{Continent, Country, Record, Region};

/// Search fields offered for one entity kind
pub trait SearchFields {
    type Record: Record;

    /// `(column, value)` pairs in a fixed order
    fn criteria(&self) -> Vec<(&'static str, Option<&str>)>;

    fn predicate(&self) -> Predicate {
        Predicate::from_criteria(self.criteria())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentSearch {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl SearchFields for ContinentSearch {
    type Record = Continent;

    fn criteria(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("continent_code", self.code.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySearch {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl SearchFields for CountrySearch {
    type Record = Country;

    fn criteria(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("country_code", self.code.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSearch {
    pub region_code: Option<String>,
    pub local_code: Option<String>,
    pub name: Option<String>,
}

impl SearchFields for RegionSearch {
    type Record = Region;

    fn criteria(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("region_code", self.region_code.as_deref()),
            ("local_code", self.local_code.as_deref()),
            ("name", self.name.as_deref()),
        ]
    }
}
