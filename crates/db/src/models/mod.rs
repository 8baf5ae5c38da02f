//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO used for both create and
//!   full-overwrite update

pub mod project;
pub mod status;
pub mod task;
pub mod validation;
