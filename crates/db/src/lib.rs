//! `db` crate — the storage accessor.
//!
//! Provides a SQLite connection pool, typed row structs, and repository
//! functions for the `cohorts` and `students` tables.  Handlers receive the
//! pool explicitly; there is no process-wide handle.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use sqlx;
