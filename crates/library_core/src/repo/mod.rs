//! Repository capability set and backing stores.
//!
//! # Responsibility
//! - Define the per-record-kind data access contract (`Repository<R>`).
//! - Own identifier assignment so callers never pick ids themselves.
//! - Keep backing-store details (vector scan, SQL) out of the facade.
//!
//! # Invariants
//! - `add` accepts any record; the caller's id is overwritten, never trusted.
//! - `add` assigns `max(current ids) + 1`, or `1` for an empty store.
//! - Lookup misses and removal of absent ids are not errors.
//! - Errors only come from the backing store itself (SQL, stored data).

use crate::db::DbError;
use crate::model::record::{Record, RecordId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_repo;
pub mod sqlite_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error shared by every backing store.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid stored record data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability set for one record kind: lookup, add, remove.
pub trait Repository<R: Record> {
    /// Returns the record with `id`, or `None` when no record matches.
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>>;

    /// Assigns the next identifier to `record`, stores a copy of it and
    /// returns the assigned id.
    ///
    /// Any id already present on `record` is overwritten.
    fn add(&mut self, record: &mut R) -> RepoResult<RecordId>;

    /// Deletes every stored record whose id equals `record.id()`.
    fn remove(&mut self, record: &R) -> RepoResult<()>;
}

impl<R: Record, T: Repository<R> + ?Sized> Repository<R> for &mut T {
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>> {
        (**self).get_by_id(id)
    }

    fn add(&mut self, record: &mut R) -> RepoResult<RecordId> {
        (**self).add(record)
    }

    fn remove(&mut self, record: &R) -> RepoResult<()> {
        (**self).remove(record)
    }
}

impl<R: Record, T: Repository<R> + ?Sized> Repository<R> for Box<T> {
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>> {
        (**self).get_by_id(id)
    }

    fn add(&mut self, record: &mut R) -> RepoResult<RecordId> {
        (**self).add(record)
    }

    fn remove(&mut self, record: &R) -> RepoResult<()> {
        (**self).remove(record)
    }
}

fn log_record_add(kind: &str, store: &str, id: RecordId) {
    debug!("event=record_add module=repo status=ok kind={kind} store={store} id={id}");
}

fn log_record_remove(kind: &str, store: &str, id: RecordId, removed: usize) {
    debug!(
        "event=record_remove module=repo status=ok kind={kind} store={store} id={id} removed={removed}"
    );
}
