//! Domain types, errors and pure business rules shared by the database
//! and API crates. Nothing in here touches the network or the database.

pub mod error;
pub mod schedule;
pub mod types;
