//! Intents sent by a front end

use std::path::PathBuf;
use worldgeo_core::{
    Continent, ContinentSearch, Country, CountrySearch, EntityKind, Region, RegionSearch,
};

/// One request to the engine.
///
/// `SaveNew*` ignores the incoming record's id; the engine assigns one.
/// `Save*` keeps the id and overwrites that row.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    OpenStore { path: PathBuf },
    CloseStore,
    Quit,

    SearchContinent(ContinentSearch),
    LoadContinent { id: i64 },
    SaveNewContinent(Continent),
    SaveContinent(Continent),

    SearchCountry(CountrySearch),
    LoadCountry { id: i64 },
    SaveNewCountry(Country),
    SaveCountry(Country),

    SearchRegion(RegionSearch),
    LoadRegion { id: i64 },
    SaveNewRegion(Region),
    SaveRegion(Region),
}

/// What a failure of an intent should be reported as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Open,
    Lifecycle,
    Search(EntityKind),
    Load(EntityKind, i64),
    Save(EntityKind),
}

impl Intent {
    /// Operation name used in logs
    pub fn op(&self) -> &'static str {
        match self {
            Intent::OpenStore { .. } => "open_store",
            Intent::CloseStore => "close_store",
            Intent::Quit => "quit",
            Intent::SearchContinent(_) => "search_continent",
            Intent::LoadContinent { .. } => "load_continent",
            Intent::SaveNewContinent(_) => "save_new_continent",
            Intent::SaveContinent(_) => "save_continent",
            Intent::SearchCountry(_) => "search_country",
            Intent::LoadCountry { .. } => "load_country",
            Intent::SaveNewCountry(_) => "save_new_country",
            Intent::SaveCountry(_) => "save_country",
            Intent::SearchRegion(_) => "search_region",
            Intent::LoadRegion { .. } => "load_region",
            Intent::SaveNewRegion(_) => "save_new_region",
            Intent::SaveRegion(_) => "save_region",
        }
    }

    pub(crate) fn target(&self) -> Target {
        use EntityKind::*;
        match self {
            Intent::OpenStore { .. } => Target::Open,
            Intent::CloseStore | Intent::Quit => Target::Lifecycle,
            Intent::SearchContinent(_) => Target::Search(Continent),
            Intent::SearchCountry(_) => Target::Search(Country),
            Intent::SearchRegion(_) => Target::Search(Region),
            Intent::LoadContinent { id } => Target::Load(Continent, *id),
            Intent::LoadCountry { id } => Target::Load(Country, *id),
            Intent::LoadRegion { id } => Target::Load(Region, *id),
            Intent::SaveNewContinent(_) | Intent::SaveContinent(_) => Target::Save(Continent),
            Intent::SaveNewCountry(_) | Intent::SaveCountry(_) => Target::Save(Country),
            Intent::SaveNewRegion(_) | Intent::SaveRegion(_) => Target::Save(Region),
        }
    }
}
