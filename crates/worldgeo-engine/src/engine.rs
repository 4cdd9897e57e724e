//! The dispatch engine
//!
//! ## Logging Ownership
//!
//! `Engine::process` owns lifecycle logging for every intent:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Each intent runs inside an `intent` span carrying its `RequestId`.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;
use worldgeo_core::errors::ExError;
use worldgeo_core::{log_op_end, log_op_error, log_op_start, GeoError, Record};
use worldgeo_core_types::RequestId;

use crate::commands::{lifecycle, records};
use crate::config::EngineConfig;
use crate::intent::Intent;
use crate::outcome::Outcome;

enum StoreState {
    Closed,
    Open { path: PathBuf, conn: Connection },
}

/// Owns the store handle and answers one intent at a time.
///
/// Starts `Closed`. `OpenStore` moves it to `Open`; `CloseStore` and `Quit`
/// move it back. Dropping the engine releases any open handle.
pub struct Engine {
    config: EngineConfig,
    state: StoreState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: StoreState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, StoreState::Open { .. })
    }

    /// Path of the open store, if any
    pub fn store_path(&self) -> Option<&Path> {
        match &self.state {
            StoreState::Open { path, .. } => Some(path),
            StoreState::Closed => None,
        }
    }

    /// Handle one intent to completion.
    ///
    /// Never fails: an error becomes exactly one failure outcome. A search
    /// yields one `SearchResult` per match, possibly none.
    pub fn process(&mut self, intent: Intent) -> Vec<Outcome> {
        let op = intent.op();
        let target = intent.target();
        let request_id = RequestId::new();
        let span = tracing::info_span!("intent", request_id = %request_id, op);
        let _guard = span.enter();

        log_op_start!(op, request_id = %request_id);
        let start = Instant::now();

        match self.dispatch(intent) {
            Ok(outcomes) => {
                log_op_end!(
                    op,
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id,
                    result_count = outcomes.len() as u64
                );
                outcomes
            }
            Err(err) => {
                log_op_error!(
                    op,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = %request_id
                );
                vec![Outcome::from_error(op, target, err)]
            }
        }
    }

    fn dispatch(&mut self, intent: Intent) -> Result<Vec<Outcome>, ExError> {
        match intent {
            Intent::OpenStore { path } => self.open(path),
            Intent::CloseStore => {
                self.release()?;
                Ok(vec![Outcome::StoreClosed])
            }
            Intent::Quit => {
                if let Err(err) = self.release() {
                    tracing::warn!(error = %err, "store handle not released cleanly");
                }
                Ok(vec![Outcome::ApplicationEnded])
            }

            Intent::SearchContinent(s) => Ok(searched(records::search(self.connection()?, &s)?)),
            Intent::LoadContinent { id } => Ok(loaded(records::load::<worldgeo_core::Continent>(
                self.connection()?,
                id,
            )?)),
            Intent::SaveNewContinent(c) => Ok(saved(records::save_new(self.connection()?, c)?)),
            Intent::SaveContinent(c) => Ok(saved(records::save(self.connection()?, c)?)),

            Intent::SearchCountry(s) => Ok(searched(records::search(self.connection()?, &s)?)),
            Intent::LoadCountry { id } => Ok(loaded(records::load::<worldgeo_core::Country>(
                self.connection()?,
                id,
            )?)),
            Intent::SaveNewCountry(c) => Ok(saved(records::save_new(self.connection()?, c)?)),
            Intent::SaveCountry(c) => Ok(saved(records::save(self.connection()?, c)?)),

            Intent::SearchRegion(s) => Ok(searched(records::search(self.connection()?, &s)?)),
            Intent::LoadRegion { id } => Ok(loaded(records::load::<worldgeo_core::Region>(
                self.connection()?,
                id,
            )?)),
            Intent::SaveNewRegion(r) => Ok(saved(records::save_new(self.connection()?, r)?)),
            Intent::SaveRegion(r) => Ok(saved(records::save(self.connection()?, r)?)),
        }
    }

    fn open(&mut self, path: PathBuf) -> Result<Vec<Outcome>, ExError> {
        self.release()?;
        let conn = lifecycle::open_store(&path, &self.config)?;
        self.state = StoreState::Open {
            path: path.clone(),
            conn,
        };
        Ok(vec![Outcome::StoreOpened { path }])
    }

    /// Close the current handle, if any; the engine is `Closed` afterwards
    /// even when closing reports an error.
    fn release(&mut self) -> Result<(), ExError> {
        match std::mem::replace(&mut self.state, StoreState::Closed) {
            StoreState::Open { path, conn } => {
                tracing::debug!(path = %path.display(), "releasing store");
                lifecycle::close_store(conn)
            }
            StoreState::Closed => Ok(()),
        }
    }

    fn connection(&self) -> Result<&Connection, ExError> {
        match &self.state {
            StoreState::Open { conn, .. } => Ok(conn),
            StoreState::Closed => Err(GeoError::StoreNotOpen.into()),
        }
    }
}

fn searched<R: Record>(found: Vec<R>) -> Vec<Outcome> {
    found
        .into_iter()
        .map(|record| Outcome::SearchResult {
            record: record.into_geo(),
        })
        .collect()
}

fn loaded<R: Record>(record: R) -> Vec<Outcome> {
    vec![Outcome::Loaded {
        record: record.into_geo(),
    }]
}

fn saved<R: Record>(record: R) -> Vec<Outcome> {
    vec![Outcome::Saved {
        record: record.into_geo(),
    }]
}
