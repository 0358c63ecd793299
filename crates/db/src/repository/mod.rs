//! Repository functions — one function per query intent.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No HTTP concerns, no validation — pure SQL.

pub mod cohorts;
pub mod students;
