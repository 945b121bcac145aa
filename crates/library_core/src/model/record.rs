//! Identity contract shared by every catalog record kind.

/// Repository-assigned record identifier.
pub type RecordId = i64;

/// Identifier carried by a record that has not been added to a repository.
pub const UNASSIGNED_ID: RecordId = 0;

/// Identity hooks used by generic repositories.
///
/// Implemented by `Book` and `Member`; repositories never inspect
/// domain fields beyond what this trait exposes.
pub trait Record: Clone {
    /// Stable lowercase label used in logs.
    const KIND: &'static str;

    /// Returns the current identifier (`UNASSIGNED_ID` before add).
    fn id(&self) -> RecordId;

    /// Overwrites the identifier. Only repositories should call this.
    fn assign_id(&mut self, id: RecordId);
}
