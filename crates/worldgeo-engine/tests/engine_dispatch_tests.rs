//! Engine dispatch integration tests
//!
//! Drive the engine through intents against an on-disk store and assert on
//! the outcomes it answers with.

use std::path::PathBuf;
use tempfile::TempDir;
use worldgeo_core::{
    Continent, ContinentSearch, Country, CountrySearch, EntityKind, GeoRecord, Region,
    RegionSearch, PLACEHOLDER,
};
use worldgeo_engine::{Engine, Intent, Outcome, SaveFailure};

fn open_engine(dir: &TempDir) -> (Engine, PathBuf) {
    let path = dir.path().join("world.db");
    let mut engine = Engine::default();
    let outcomes = engine.process(Intent::OpenStore { path: path.clone() });
    assert_eq!(outcomes, vec![Outcome::StoreOpened { path: path.clone() }]);
    (engine, path)
}

fn country(code: &str, name: &str, continent_id: i64) -> Country {
    Country {
        id: 0,
        code: code.to_string(),
        name: name.to_string(),
        continent_id,
        wikipedia_link: format!("https://en.wikipedia.org/wiki/{name}"),
        keywords: None,
    }
}

fn region(code: &str, continent_id: i64, country_id: i64) -> Region {
    Region {
        id: 0,
        region_code: code.to_string(),
        local_code: code.to_string(),
        name: format!("Region {code}"),
        continent_id,
        country_id,
        wikipedia_link: None,
        keywords: None,
    }
}

fn saved_id(outcomes: &[Outcome]) -> i64 {
    match outcomes {
        [Outcome::Saved { record }] => record.id(),
        other => panic!("expected one Saved outcome, got {other:?}"),
    }
}

fn save_failure(outcomes: &[Outcome]) -> SaveFailure {
    match outcomes {
        [Outcome::SaveFailed { reason, .. }] => *reason,
        other => panic!("expected one SaveFailed outcome, got {other:?}"),
    }
}

#[test]
fn test_end_to_end_world_scenario() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);

    let outcomes = engine.process(Intent::SaveNewContinent(Continent::new(0, "", "Test")));
    assert_eq!(
        outcomes,
        vec![Outcome::Saved {
            record: GeoRecord::Continent(Continent::new(1, PLACEHOLDER, "Test")),
        }]
    );

    let outcomes = engine.process(Intent::SaveNewCountry(country("US", "USA", 1)));
    match &outcomes[..] {
        [Outcome::Saved {
            record: GeoRecord::Country(saved),
        }] => {
            assert_eq!(saved.id, 1);
            assert_eq!(saved.continent_id, 1);
        }
        other => panic!("unexpected outcomes: {other:?}"),
    }

    let outcomes = engine.process(Intent::SaveNewCountry(country("XX", "Nowhere", 42)));
    assert_eq!(save_failure(&outcomes), SaveFailure::UnknownContinent);
    assert_eq!(save_failure(&outcomes).to_string(), "UnknownContinent");

    assert_eq!(engine.process(Intent::Quit), vec![Outcome::ApplicationEnded]);
    assert!(!engine.is_open());
}

#[test]
fn test_non_database_file_rejected() {
    let dir = TempDir::new().unwrap();
    let mut engine = Engine::default();
    let outcomes = engine.process(Intent::OpenStore {
        path: dir.path().join("world.txt"),
    });
    match &outcomes[..] {
        [Outcome::StoreOpenFailed { reason }] => {
            assert!(reason.contains("Not a Database File"), "{reason}")
        }
        other => panic!("unexpected outcomes: {other:?}"),
    }
    assert!(!engine.is_open());
}

#[test]
fn test_sequential_inserts_get_sequential_ids() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);

    for expected in 1..=5 {
        let outcomes = engine.process(Intent::SaveNewContinent(Continent::new(
            0,
            format!("C{expected}"),
            format!("Continent {expected}"),
        )));
        assert_eq!(saved_id(&outcomes), expected);
    }
}

#[test]
fn test_insert_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "NA", "North America")));

    let mut input = country("CA", "Canada", 1);
    input.wikipedia_link = String::new();
    input.keywords = Some(String::new());
    let outcomes = engine.process(Intent::SaveNewCountry(input));
    let saved = outcomes[0].record().cloned().unwrap();

    let loaded = engine.process(Intent::LoadCountry { id: saved.id() });
    assert_eq!(loaded, vec![Outcome::Loaded { record: saved.clone() }]);

    match saved {
        GeoRecord::Country(c) => {
            assert_eq!(c.wikipedia_link, PLACEHOLDER);
            assert_eq!(c.keywords, None);
        }
        other => panic!("unexpected record: {other:?}"),
    }
}

#[test]
fn test_load_missing_is_load_failure() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    let outcomes = engine.process(Intent::LoadRegion { id: 7 });
    assert!(matches!(
        outcomes[..],
        [Outcome::LoadFailed {
            entity: EntityKind::Region,
            id: 7,
            ..
        }]
    ));
}

#[test]
fn test_region_validation_order() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::SaveNewContinent(Continent::new(0, "AS", "Asia")));
    engine.process(Intent::SaveNewCountry(country("FR", "France", 1)));

    let cases = [
        (region("X", 9, 99), SaveFailure::UnknownContinent),
        (region("X", 1, 99), SaveFailure::UnknownCountry),
        (region("X", 2, 1), SaveFailure::CountryContinentMismatch),
    ];
    for (candidate, expected) in cases {
        let outcomes = engine.process(Intent::SaveNewRegion(candidate));
        assert_eq!(save_failure(&outcomes), expected);
    }

    // Rejected saves consume no id
    let outcomes = engine.process(Intent::SaveNewRegion(region("IDF", 1, 1)));
    assert_eq!(saved_id(&outcomes), 1);
}

#[test]
fn test_update_overwrites_and_normalizes() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::SaveNewCountry(country("FR", "France", 1)));
    engine.process(Intent::SaveNewRegion(region("IDF", 1, 1)));

    let mut edited = region("IDF", 1, 1);
    edited.id = 1;
    edited.name = String::new();
    edited.wikipedia_link = Some(String::new());
    edited.keywords = Some("paris".to_string());
    let outcomes = engine.process(Intent::SaveRegion(edited));

    let expected = Region {
        id: 1,
        region_code: "IDF".to_string(),
        local_code: "IDF".to_string(),
        name: PLACEHOLDER.to_string(),
        continent_id: 1,
        country_id: 1,
        wikipedia_link: None,
        keywords: Some("paris".to_string()),
    };
    assert_eq!(
        outcomes,
        vec![Outcome::Saved {
            record: GeoRecord::Region(expected.clone()),
        }]
    );
    assert_eq!(
        engine.process(Intent::LoadRegion { id: 1 }),
        vec![Outcome::Loaded {
            record: GeoRecord::Region(expected),
        }]
    );
}

#[test]
fn test_update_rejected_by_validation_keeps_row() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::SaveNewCountry(country("FR", "France", 1)));

    let mut moved = country("FR", "France", 5);
    moved.id = 1;
    let outcomes = engine.process(Intent::SaveCountry(moved));
    assert_eq!(save_failure(&outcomes), SaveFailure::UnknownContinent);

    match &engine.process(Intent::LoadCountry { id: 1 })[..] {
        [Outcome::Loaded {
            record: GeoRecord::Country(c),
        }] => assert_eq!(c.continent_id, 1),
        other => panic!("unexpected outcomes: {other:?}"),
    }
}

#[test]
fn test_update_missing_id_is_record_not_found() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    let outcomes = engine.process(Intent::SaveContinent(Continent::new(4, "AN", "Antarctica")));
    assert_eq!(save_failure(&outcomes), SaveFailure::RecordNotFound);

    let all = engine.process(Intent::SearchContinent(ContinentSearch::default()));
    assert!(all.is_empty());
}

#[test]
fn test_search_results_and_empty_match() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::SaveNewCountry(country("FR", "France", 1)));
    engine.process(Intent::SaveNewCountry(country("DE", "Germany", 1)));
    engine.process(Intent::SaveNewCountry(country("D'X", "Côte d'Ivoire", 1)));

    let all = engine.process(Intent::SearchCountry(CountrySearch {
        code: Some(String::new()),
        name: None,
    }));
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|o| matches!(o, Outcome::SearchResult { .. })));

    let quoted = engine.process(Intent::SearchCountry(CountrySearch {
        code: Some("D'X".to_string()),
        name: Some("Côte d'Ivoire".to_string()),
    }));
    assert_eq!(quoted.len(), 1);
    assert_eq!(quoted[0].record().map(GeoRecord::id), Some(3));

    let none = engine.process(Intent::SearchRegion(RegionSearch {
        region_code: Some("nope".to_string()),
        ..RegionSearch::default()
    }));
    assert!(none.is_empty());
}

#[test]
fn test_close_is_idempotent_and_blocks_store_intents() {
    let dir = TempDir::new().unwrap();
    let (mut engine, path) = open_engine(&dir);

    assert_eq!(engine.process(Intent::CloseStore), vec![Outcome::StoreClosed]);
    assert_eq!(engine.process(Intent::CloseStore), vec![Outcome::StoreClosed]);

    let outcomes = engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    assert!(matches!(outcomes[..], [Outcome::EngineFailure { .. }]));
    assert!(outcomes[0].is_failure());

    // Data written before close survives a reopen
    engine.process(Intent::OpenStore { path: path.clone() });
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::CloseStore);
    engine.process(Intent::OpenStore { path });
    let found = engine.process(Intent::LoadContinent { id: 1 });
    assert!(matches!(found[..], [Outcome::Loaded { .. }]));
}

#[test]
fn test_country_cannot_move_away_from_its_regions() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::SaveNewContinent(Continent::new(0, "AS", "Asia")));
    engine.process(Intent::SaveNewCountry(country("FR", "France", 1)));
    engine.process(Intent::SaveNewRegion(region("IDF", 1, 1)));

    let mut moved = country("FR", "France", 2);
    moved.id = 1;
    let outcomes = engine.process(Intent::SaveCountry(moved));
    assert_eq!(save_failure(&outcomes), SaveFailure::CountryContinentMismatch);

    match &engine.process(Intent::LoadCountry { id: 1 })[..] {
        [Outcome::Loaded {
            record: GeoRecord::Country(c),
        }] => assert_eq!(c.continent_id, 1),
        other => panic!("unexpected outcomes: {other:?}"),
    }

    // Same continent is still a valid edit
    let mut renamed = country("FR", "République française", 1);
    renamed.id = 1;
    let outcomes = engine.process(Intent::SaveCountry(renamed));
    assert_eq!(saved_id(&outcomes), 1);
}

#[test]
fn test_country_without_regions_can_change_continent() {
    let dir = TempDir::new().unwrap();
    let (mut engine, _) = open_engine(&dir);
    engine.process(Intent::SaveNewContinent(Continent::new(0, "EU", "Europe")));
    engine.process(Intent::SaveNewContinent(Continent::new(0, "AS", "Asia")));
    engine.process(Intent::SaveNewCountry(country("TR", "Turkey", 1)));

    let mut moved = country("TR", "Turkey", 2);
    moved.id = 1;
    let outcomes = engine.process(Intent::SaveCountry(moved));
    match &outcomes[..] {
        [Outcome::Saved {
            record: GeoRecord::Country(c),
        }] => assert_eq!(c.continent_id, 2),
        other => panic!("unexpected outcomes: {other:?}"),
    }
}
