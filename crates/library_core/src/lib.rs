//! Core catalog logic for the library manager.
//! Record types, repository capability set, backing stores and the facade.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::Book;
pub use model::member::Member;
pub use model::record::{Record, RecordId, UNASSIGNED_ID};
pub use repo::memory_repo::InMemoryRepository;
pub use repo::sqlite_repo::{
    SqlRecord, SqliteBookRepository, SqliteMemberRepository, SqliteRepository,
};
pub use repo::{RepoError, RepoResult, Repository};
pub use service::library::Library;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
