//! Domain services.
//!
//! # Responsibility
//! - Compose repositories into the catalog entry point used by front ends.
//! - Keep front ends decoupled from backing-store choice.

pub mod library;
