//! Plain-text rendering of outcomes, one line each

use worldgeo_core::GeoRecord;
use worldgeo_engine::Outcome;

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub fn record_line(record: &GeoRecord) -> String {
    match record {
        GeoRecord::Continent(c) => {
            format!("continent {}: code={} name={}", c.id, c.code, c.name)
        }
        GeoRecord::Country(c) => format!(
            "country {}: code={} name={} continent={} wikipedia={} keywords={}",
            c.id,
            c.code,
            c.name,
            c.continent_id,
            c.wikipedia_link,
            optional(&c.keywords)
        ),
        GeoRecord::Region(r) => format!(
            "region {}: code={} local={} name={} continent={} country={} wikipedia={} keywords={}",
            r.id,
            r.region_code,
            r.local_code,
            r.name,
            r.continent_id,
            r.country_id,
            optional(&r.wikipedia_link),
            optional(&r.keywords)
        ),
    }
}

pub fn outcome_line(outcome: &Outcome) -> String {
    match outcome {
        Outcome::StoreOpened { path } => format!("opened {}", path.display()),
        Outcome::StoreOpenFailed { reason } => format!("open failed: {}", reason),
        Outcome::StoreClosed => "closed".to_string(),
        Outcome::ApplicationEnded => "ended".to_string(),
        Outcome::SearchResult { record } => record_line(record),
        Outcome::Loaded { record } => record_line(record),
        Outcome::LoadFailed { entity, id, reason } => {
            format!("load failed: {} {}: {}", entity, id, reason)
        }
        Outcome::Saved { record } => format!("saved {}", record_line(record)),
        Outcome::SaveFailed {
            entity,
            reason,
            message,
        } => format!("save failed: {} {}: {}", entity, reason, message),
        Outcome::EngineFailure { op, message } => format!("error in {}: {}", op, message),
    }
}
