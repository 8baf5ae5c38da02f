//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the services in [`crate::services`] and map errors
//! via [`AppError`](crate::error::AppError).

pub mod project;
pub mod reference;
pub mod task;
