//! Command handlers behind each intent.
//!
//! Handlers return `ExError` on failure. The engine owns lifecycle logging
//! and turns errors into outcomes; handlers log internal detail at
//! `debug` only.

pub mod lifecycle;
pub mod records;
