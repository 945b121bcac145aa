//! Member record.

use crate::model::record::{Record, RecordId, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Registered library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Repository-assigned identifier, `0` until added.
    pub id: RecordId,
    pub name: String,
}

impl Member {
    /// Creates an unassigned member.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
        }
    }
}

impl Record for Member {
    const KIND: &'static str = "member";

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
