//! Repository layer for persisting entity records to SQLite
//!
//! Every query here is generated from an `EntityDescriptor`, so the three
//! entity kinds share one code path.

pub mod mapper;
pub mod references;
pub mod sqlite_repo;

pub use references::SqliteReferences;
pub use sqlite_repo::SqliteRepo;
