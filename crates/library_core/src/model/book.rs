//! Book record.
//!
//! # Invariants
//! - `id` is owned by the book repository; callers only read it.
//! - Text fields are stored exactly as entered, empty included.

use crate::model::record::{Record, RecordId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Catalog entry for one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Repository-assigned identifier, `0` until added.
    pub id: RecordId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Creates an unassigned book from caller-provided fields.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            title: title.into(),
            author: author.into(),
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "book";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} - {}", self.id, self.title, self.author)
    }
}
