//! worldgeo engine - intent dispatch
//!
//! Receives one intent at a time from a front end, runs it against the
//! store handle it owns, and answers with typed outcomes. Failures never
//! escape as errors: each one becomes exactly one outcome.

pub mod commands;
pub mod config;
pub mod engine;
pub mod intent;
pub mod outcome;

pub use config::EngineConfig;
pub use engine::Engine;
pub use intent::Intent;
pub use outcome::{Outcome, SaveFailure};
