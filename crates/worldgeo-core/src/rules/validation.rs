use crate::errors::GeoError;
use crate::model::{EntityKind, Record};

/// Read access to the ids the integrity checks need.
///
/// Implemented over SQLite by the store; tests use an in-memory map.
/// The error type lets each backend surface its own faults while still
/// accepting the domain rejections produced here.
pub trait ReferenceIndex {
    type Error: From<GeoError>;

    fn continent_exists(&self, continent_id: i64) -> Result<bool, Self::Error>;

    fn country_exists(&self, country_id: i64) -> Result<bool, Self::Error>;

    /// True when some country row has both this id and this continent
    fn country_in_continent(&self, country_id: i64, continent_id: i64)
        -> Result<bool, Self::Error>;

    /// True when some region of this country sits on another continent
    fn regions_outside_continent(&self, country_id: i64, continent_id: i64)
        -> Result<bool, Self::Error>;
}

/// Check a candidate record's foreign keys against the store.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. the continent reference exists
/// 2. the country reference exists
/// 3. the country belongs to the claimed continent (only when both are present)
///
/// Continents carry no references and always pass.
///
/// # Errors
/// `UnknownContinent`, `UnknownCountry` or `CountryContinentMismatch`
/// converted into the index's error type, or whatever the index itself
/// reports while reading.
pub fn validate_references<R, I>(record: &R, index: &I) -> Result<(), I::Error>
where
    R: Record,
    I: ReferenceIndex + ?Sized,
{
    let refs = record.references();

    if let Some(continent_id) = refs.continent_id {
        if !index.continent_exists(continent_id)? {
            return Err(GeoError::UnknownContinent { continent_id }.into());
        }
    }

    if let Some(country_id) = refs.country_id {
        if !index.country_exists(country_id)? {
            return Err(GeoError::UnknownCountry { country_id }.into());
        }
    }

    if let (Some(continent_id), Some(country_id)) = (refs.continent_id, refs.country_id) {
        if !index.country_in_continent(country_id, continent_id)? {
            return Err(GeoError::CountryContinentMismatch {
                country_id,
                continent_id,
            }
            .into());
        }
    }

    tracing::debug!(
        entity = %R::DESCRIPTOR.kind,
        record_id = record.id(),
        "references valid"
    );
    Ok(())
}

/// Check that overwriting an existing record keeps its dependents
/// consistent.
///
/// Only countries have dependents here: moving a country to another
/// continent is refused while any of its regions still claim the old one.
/// Runs for updates only; a new record has no dependents yet.
///
/// # Errors
/// `RegionsOutsideContinent` converted into the index's error type, or
/// whatever the index itself reports while reading.
pub fn validate_dependents<R, I>(record: &R, index: &I) -> Result<(), I::Error>
where
    R: Record,
    I: ReferenceIndex + ?Sized,
{
    if R::DESCRIPTOR.kind != EntityKind::Country {
        return Ok(());
    }
    if let Some(continent_id) = record.references().continent_id {
        let country_id = record.id();
        if index.regions_outside_continent(country_id, continent_id)? {
            return Err(GeoError::RegionsOutsideContinent {
                country_id,
                continent_id,
            }
            .into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Continent, Country, Region};
    use std::collections::{BTreeMap, BTreeSet};

    struct MapIndex {
        continents: BTreeSet<i64>,
        countries: BTreeMap<i64, i64>,
        /// region country -> region continent
        regions: Vec<(i64, i64)>,
    }

    impl ReferenceIndex for MapIndex {
        type Error = GeoError;

        fn continent_exists(&self, continent_id: i64) -> Result<bool, GeoError> {
            Ok(self.continents.contains(&continent_id))
        }

        fn country_exists(&self, country_id: i64) -> Result<bool, GeoError> {
            Ok(self.countries.contains_key(&country_id))
        }

        fn country_in_continent(&self, country_id: i64, continent_id: i64) -> Result<bool, GeoError> {
            Ok(self.countries.get(&country_id) == Some(&continent_id))
        }

        fn regions_outside_continent(&self, country_id: i64, continent_id: i64) -> Result<bool, GeoError> {
            Ok(self
                .regions
                .iter()
                .any(|&(country, continent)| country == country_id && continent != continent_id))
        }
    }

    fn index() -> MapIndex {
        MapIndex {
            continents: [1, 2].into_iter().collect(),
            countries: [(10, 1), (20, 2)].into_iter().collect(),
            regions: vec![(10, 1)],
        }
    }

    fn region(continent_id: i64, country_id: i64) -> Region {
        Region {
            id: 0,
            region_code: "R".to_string(),
            local_code: "L".to_string(),
            name: "N".to_string(),
            continent_id,
            country_id,
            wikipedia_link: None,
            keywords: None,
        }
    }

    #[test]
    fn test_continent_always_passes() {
        assert!(validate_references(&Continent::new(0, "", ""), &index()).is_ok());
    }

    #[test]
    fn test_country_unknown_continent() {
        let country = Country {
            id: 0,
            code: "XX".to_string(),
            name: "Nowhere".to_string(),
            continent_id: 999,
            wikipedia_link: String::new(),
            keywords: None,
        };
        assert_eq!(
            validate_references(&country, &index()),
            Err(GeoError::UnknownContinent { continent_id: 999 })
        );
    }

    #[test]
    fn test_region_checks_run_in_order() {
        assert_eq!(
            validate_references(&region(9, 99), &index()),
            Err(GeoError::UnknownContinent { continent_id: 9 })
        );
        assert_eq!(
            validate_references(&region(1, 99), &index()),
            Err(GeoError::UnknownCountry { country_id: 99 })
        );
        assert_eq!(
            validate_references(&region(1, 20), &index()),
            Err(GeoError::CountryContinentMismatch {
                country_id: 20,
                continent_id: 1
            })
        );
        assert_eq!(validate_references(&region(2, 20), &index()), Ok(()));
    }

    fn country(id: i64, continent_id: i64) -> Country {
        Country {
            id,
            code: "XX".to_string(),
            name: "Somewhere".to_string(),
            continent_id,
            wikipedia_link: String::new(),
            keywords: None,
        }
    }

    #[test]
    fn test_moving_country_away_from_its_regions_is_refused() {
        assert_eq!(
            validate_dependents(&country(10, 2), &index()),
            Err(GeoError::RegionsOutsideContinent {
                country_id: 10,
                continent_id: 2
            })
        );
        assert_eq!(validate_dependents(&country(10, 1), &index()), Ok(()));
        assert_eq!(validate_dependents(&country(20, 1), &index()), Ok(()));
    }

    #[test]
    fn test_regions_and_continents_have_no_dependents() {
        assert_eq!(validate_dependents(&region(2, 10), &index()), Ok(()));
        assert_eq!(validate_dependents(&Continent::new(1, "", ""), &index()), Ok(()));
    }
}
