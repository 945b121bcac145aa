//! Catalog record types.
//!
//! # Responsibility
//! - Define the plain data holders tracked by the catalog (books, members).
//! - Provide the shared `Record` contract repositories rely on for identity.
//!
//! # Invariants
//! - A record is unassigned (`id == UNASSIGNED_ID`) until a repository adds it.
//! - Assigned identifiers are strictly positive and never reassigned.

pub mod book;
pub mod member;
pub mod record;
