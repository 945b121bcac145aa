//! Library catalog facade.
//!
//! # Responsibility
//! - Provide the single entry point for book and member operations.
//! - Forward every call to the matching repository.
//!
//! # Invariants
//! - Calls are forwarded one-to-one, in order, without filtering.
//! - Repository errors propagate unchanged.
//! - The facade holds no catalog state of its own.

use crate::model::book::Book;
use crate::model::member::Member;
use crate::model::record::RecordId;
use crate::repo::{RepoResult, Repository};

/// Catalog facade over one book repository and one member repository.
///
/// Repositories are injected by the caller. Pass `&mut repo` to keep
/// ownership outside the facade, or move the repository in.
pub struct Library<B, M>
where
    B: Repository<Book>,
    M: Repository<Member>,
{
    books: B,
    members: M,
}

impl<B, M> Library<B, M>
where
    B: Repository<Book>,
    M: Repository<Member>,
{
    pub fn new(books: B, members: M) -> Self {
        Self { books, members }
    }

    /// Adds a new book and returns it with its assigned id.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> RepoResult<Book> {
        let mut book = Book::new(title, author);
        self.books.add(&mut book)?;
        Ok(book)
    }

    /// Adds a caller-built book; its `id` is overwritten with the assigned one.
    pub fn add_book_record(&mut self, book: &mut Book) -> RepoResult<RecordId> {
        self.books.add(book)
    }

    pub fn remove_book(&mut self, book: &Book) -> RepoResult<()> {
        self.books.remove(book)
    }

    pub fn get_book_by_id(&self, id: RecordId) -> RepoResult<Option<Book>> {
        self.books.get_by_id(id)
    }

    /// Adds a new member and returns it with its assigned id.
    pub fn add_member(&mut self, name: impl Into<String>) -> RepoResult<Member> {
        let mut member = Member::new(name);
        self.members.add(&mut member)?;
        Ok(member)
    }

    /// Adds a caller-built member; its `id` is overwritten with the assigned one.
    pub fn add_member_record(&mut self, member: &mut Member) -> RepoResult<RecordId> {
        self.members.add(member)
    }

    pub fn remove_member(&mut self, member: &Member) -> RepoResult<()> {
        self.members.remove(member)
    }

    pub fn get_member_by_id(&self, id: RecordId) -> RepoResult<Option<Member>> {
        self.members.get_by_id(id)
    }
}
