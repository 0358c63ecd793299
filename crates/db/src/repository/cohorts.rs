//! Cohort CRUD operations.

use tracing::debug;

use crate::{models::Cohort, DbError, DbPool};

const COHORT_COLUMNS: &str = "id, cohort, created_at, updated_at";

/// Return every cohort in storage order.
pub async fn list_cohorts(pool: &DbPool) -> Result<Vec<Cohort>, DbError> {
    debug!("listing cohorts");
    let rows = sqlx::query_as::<_, Cohort>(&format!(
        "SELECT {COHORT_COLUMNS} FROM cohorts ORDER BY id"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Fetch a single cohort by its primary key.
pub async fn get_cohort(pool: &DbPool, id: i64) -> Result<Option<Cohort>, DbError> {
    debug!(id, "fetching cohort");
    let row = sqlx::query_as::<_, Cohort>(&format!(
        "SELECT {COHORT_COLUMNS} FROM cohorts WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new cohort and return it as stored.
///
/// A missing name is passed through as NULL and rejected by the table's
/// NOT NULL constraint.  A repeated name yields `DbError::Duplicate`.
pub async fn insert_cohort(pool: &DbPool, cohort: Option<&str>) -> Result<Cohort, DbError> {
    let id = sqlx::query("INSERT INTO cohorts (cohort) VALUES (?)")
        .bind(cohort)
        .execute(pool)
        .await?
        .last_insert_rowid();
    debug!(id, "inserted cohort");

    get_cohort(pool, id)
        .await?
        .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
}

/// Overwrite the supplied fields of a cohort.
///
/// Returns the number of rows affected (0 when `id` does not exist).
pub async fn update_cohort(pool: &DbPool, id: i64, cohort: Option<&str>) -> Result<u64, DbError> {
    let result = sqlx::query(
        r#"
        UPDATE cohorts
        SET cohort = COALESCE(?, cohort),
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(cohort)
    .bind(id)
    .execute(pool)
    .await?;
    debug!(id, rows = result.rows_affected(), "updated cohort");

    Ok(result.rows_affected())
}

/// Permanently delete a cohort by its primary key.
///
/// Students of the cohort go with it (`ON DELETE CASCADE`).
/// Returns the number of rows affected.
pub async fn delete_cohort(pool: &DbPool, id: i64) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM cohorts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    debug!(id, rows = result.rows_affected(), "deleted cohort");

    Ok(result.rows_affected())
}
