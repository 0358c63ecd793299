//! Row structs that map onto query results.
//!
//! These are *persistence* models: what the repository reads back is what the
//! API serializes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// cohorts
// ---------------------------------------------------------------------------

/// A persisted cohort row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Cohort {
    pub id: i64,
    /// Cohort name, unique across the table (max 128 chars).
    pub cohort: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// ---------------------------------------------------------------------------
// students
// ---------------------------------------------------------------------------

/// A student row joined with the name of its cohort.
///
/// This is the only student projection the repository hands out, whether the
/// row came from a list, a lookup, a cohort roster, or a write re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub cohort_id: i64,
    /// `None` when `cohort_id` points at no cohort.
    pub cohort: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
