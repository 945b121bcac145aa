//! Vector-backed repository.
//!
//! # Invariants
//! - Stored ids are unique and strictly positive.
//! - Insertion order carries no meaning; only `get_by_id` reads the store.

use crate::model::record::{Record, RecordId, UNASSIGNED_ID};
use crate::repo::{log_record_add, log_record_remove, RepoResult, Repository};

const STORE_LABEL: &str = "memory";

/// In-memory repository for one record kind.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R> {
    records: Vec<R>,
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn next_id(&self) -> RecordId {
        self.records
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(UNASSIGNED_ID)
            + 1
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Repository<R> for InMemoryRepository<R> {
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>> {
        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }

    fn add(&mut self, record: &mut R) -> RepoResult<RecordId> {
        let id = self.next_id();
        record.assign_id(id);
        self.records.push(record.clone());

        log_record_add(R::KIND, STORE_LABEL, id);
        Ok(id)
    }

    fn remove(&mut self, record: &R) -> RepoResult<()> {
        let target = record.id();
        let before = self.records.len();
        self.records.retain(|stored| stored.id() != target);

        log_record_remove(R::KIND, STORE_LABEL, target, before - self.records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryRepository;
    use crate::model::book::Book;
    use crate::repo::Repository;

    #[test]
    fn next_id_follows_current_maximum() {
        let mut repo = InMemoryRepository::<Book>::new();
        assert_eq!(repo.next_id(), 1);

        let mut first = Book::new("Dune", "Herbert");
        let mut second = Book::new("1984", "Orwell");
        repo.add(&mut first).unwrap();
        repo.add(&mut second).unwrap();
        assert_eq!(repo.next_id(), 3);

        repo.remove(&second).unwrap();
        assert_eq!(repo.next_id(), 2);
    }
}
