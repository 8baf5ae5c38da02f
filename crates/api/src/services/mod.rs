//! Project and task operations.
//!
//! Services sit between the handlers and the repositories: they apply the
//! business rules from `planboard_core::schedule`, turn missing rows into
//! [`CoreError::NotFound`](planboard_core::error::CoreError::NotFound), and
//! run every write inside a single transaction.

pub mod project;
pub mod task;

pub use project::ProjectService;
pub use task::TaskService;
