//! Key-value slots backing the blog state.
//!
//! # Responsibility
//! - Abstract the single persistent string-per-key store the blog writes to.
//! - Provide an in-memory backend (with an optional quota) and a SQLite file
//!   backend.
//!
//! # Invariants
//! - `set` either stores the whole value or leaves the previous value intact.
//! - Backends never interpret stored values.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Backend failure for key-value reads and writes.
#[derive(Debug)]
pub enum StoreError {
    /// Writing would exceed the configured capacity.
    QuotaExceeded { requested: usize, quota: usize },
    /// Database bootstrap failure.
    Db(DbError),
    /// Query-level SQLite failure.
    Sqlite(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QuotaExceeded { requested, quota } => write!(
                f,
                "storage quota exceeded: {requested} bytes requested, {quota} bytes available"
            ),
            Self::Db(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::QuotaExceeded { .. } => None,
            Self::Db(err) => Some(err),
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Persistent string slots addressed by key.
pub trait KeyValueStore {
    /// Reads one slot. Missing keys yield `Ok(None)`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Overwrites one slot with `value`.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Clears one slot. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
