//! SQLite-backed repository.
//!
//! # Responsibility
//! - Provide the same capability set as `InMemoryRepository` over SQL tables.
//! - Keep SQL details inside the repository boundary.
//!
//! # Invariants
//! - Identifier policy matches the in-memory store: `MAX(id) + 1`.
//! - Read paths reject non-positive stored ids instead of masking them.
//! - The caller's record is only mutated after the insert succeeds.

use crate::model::book::Book;
use crate::model::member::Member;
use crate::model::record::{Record, RecordId, UNASSIGNED_ID};
use crate::repo::{log_record_add, log_record_remove, RepoError, RepoResult, Repository};
use rusqlite::types::ToSql;
use rusqlite::{params, Connection, Row};
use std::marker::PhantomData;

const STORE_LABEL: &str = "sqlite";

/// Table mapping for a record kind stored by `SqliteRepository`.
pub trait SqlRecord: Record {
    /// Table created by `db::open_db_in_memory`.
    const TABLE: &'static str;
    /// Data columns, excluding `id`, in `column_values` order.
    const COLUMNS: &'static [&'static str];

    fn column_values(&self) -> Vec<&dyn ToSql>;

    fn from_row(id: RecordId, row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl SqlRecord for Book {
    const TABLE: &'static str = "books";
    const COLUMNS: &'static [&'static str] = &["title", "author"];

    fn column_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.title as &dyn ToSql, &self.author]
    }

    fn from_row(id: RecordId, row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id,
            title: row.get("title")?,
            author: row.get("author")?,
        })
    }
}

impl SqlRecord for Member {
    const TABLE: &'static str = "members";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn column_values(&self) -> Vec<&dyn ToSql> {
        vec![&self.name as &dyn ToSql]
    }

    fn from_row(id: RecordId, row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id,
            name: row.get("name")?,
        })
    }
}

/// SQLite repository for one record kind over a borrowed connection.
pub struct SqliteRepository<'conn, R> {
    conn: &'conn Connection,
    _record: PhantomData<R>,
}

pub type SqliteBookRepository<'conn> = SqliteRepository<'conn, Book>;
pub type SqliteMemberRepository<'conn> = SqliteRepository<'conn, Member>;

impl<'conn, R: SqlRecord> SqliteRepository<'conn, R> {
    /// Wraps a connection returned by `db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _record: PhantomData,
        }
    }

    fn next_id(&self) -> RepoResult<RecordId> {
        let id = self.conn.query_row(
            &format!(
                "SELECT COALESCE(MAX(id), {UNASSIGNED_ID}) + 1 FROM {};",
                R::TABLE
            ),
            [],
            |row| row.get::<_, RecordId>(0),
        )?;
        Ok(id)
    }
}

impl<R: SqlRecord> Repository<R> for SqliteRepository<'_, R> {
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, {} FROM {} WHERE id = ?1;",
            R::COLUMNS.join(", "),
            R::TABLE
        ))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            let stored_id = parse_id(row, R::TABLE)?;
            return Ok(Some(R::from_row(stored_id, row)?));
        }

        Ok(None)
    }

    fn add(&mut self, record: &mut R) -> RepoResult<RecordId> {
        let id = self.next_id()?;
        let placeholders = (1..=R::COLUMNS.len() + 1)
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} (id, {}) VALUES ({placeholders});",
            R::TABLE,
            R::COLUMNS.join(", ")
        );

        {
            let mut values: Vec<&dyn ToSql> = Vec::with_capacity(R::COLUMNS.len() + 1);
            values.push(&id);
            values.extend(record.column_values());
            self.conn.execute(&sql, values.as_slice())?;
        }
        record.assign_id(id);

        log_record_add(R::KIND, STORE_LABEL, id);
        Ok(id)
    }

    fn remove(&mut self, record: &R) -> RepoResult<()> {
        let removed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", R::TABLE),
            params![record.id()],
        )?;

        log_record_remove(R::KIND, STORE_LABEL, record.id(), removed);
        Ok(())
    }
}

fn parse_id(row: &Row<'_>, table: &str) -> RepoResult<RecordId> {
    let id: RecordId = row.get("id")?;
    if id <= UNASSIGNED_ID {
        return Err(RepoError::InvalidData(format!(
            "invalid id value `{id}` in {table}.id"
        )));
    }
    Ok(id)
}
