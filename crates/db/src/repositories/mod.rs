//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&mut PgConnection` as the first argument, so callers can
//! pass either a pooled connection or an open transaction.

pub mod project_repo;
pub mod task_repo;

pub use project_repo::ProjectRepo;
pub use task_repo::TaskRepo;
