//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A `Deserialize` create DTO for inserts

pub mod project;
pub mod task;
pub mod team;
