//! Student CRUD operations.
//!
//! Reads always join `cohorts` so the cohort name travels with the row.

use tracing::debug;

use crate::{models::Student, DbError, DbPool};

const STUDENT_SELECT: &str = r#"
    SELECT s.id, s.name, s.cohort_id, c.cohort AS cohort, s.created_at, s.updated_at
    FROM students s
    LEFT JOIN cohorts c ON c.id = s.cohort_id
"#;

/// Return every student in storage order.
pub async fn list_students(pool: &DbPool) -> Result<Vec<Student>, DbError> {
    debug!("listing students");
    let rows = sqlx::query_as::<_, Student>(&format!("{STUDENT_SELECT} ORDER BY s.id"))
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Fetch a single student by its primary key.
pub async fn get_student(pool: &DbPool, id: i64) -> Result<Option<Student>, DbError> {
    debug!(id, "fetching student");
    let row = sqlx::query_as::<_, Student>(&format!("{STUDENT_SELECT} WHERE s.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row)
}

/// Return the students belonging to `cohort_id`, in storage order.
///
/// An unknown cohort simply has no students.
pub async fn list_students_of_cohort(
    pool: &DbPool,
    cohort_id: i64,
) -> Result<Vec<Student>, DbError> {
    debug!(cohort_id, "listing students of cohort");
    let rows = sqlx::query_as::<_, Student>(&format!(
        "{STUDENT_SELECT} WHERE s.cohort_id = ? ORDER BY s.id"
    ))
    .bind(cohort_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Insert a new student and return it as stored.
///
/// Missing fields are passed through as NULL for the table constraints to
/// reject.  An unknown `cohort_id` yields `DbError::InvalidReference`.
pub async fn insert_student(
    pool: &DbPool,
    name: Option<&str>,
    cohort_id: Option<i64>,
) -> Result<Student, DbError> {
    let id = sqlx::query("INSERT INTO students (name, cohort_id) VALUES (?, ?)")
        .bind(name)
        .bind(cohort_id)
        .execute(pool)
        .await?
        .last_insert_rowid();
    debug!(id, "inserted student");

    get_student(pool, id)
        .await?
        .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
}

/// Overwrite the supplied fields of a student.
///
/// Returns the number of rows affected (0 when `id` does not exist).
pub async fn update_student(
    pool: &DbPool,
    id: i64,
    name: Option<&str>,
    cohort_id: Option<i64>,
) -> Result<u64, DbError> {
    let result = sqlx::query(
        r#"
        UPDATE students
        SET name = COALESCE(?, name),
            cohort_id = COALESCE(?, cohort_id),
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(cohort_id)
    .bind(id)
    .execute(pool)
    .await?;
    debug!(id, rows = result.rows_affected(), "updated student");

    Ok(result.rows_affected())
}

/// Permanently delete a student by its primary key.
///
/// Returns the number of rows affected.
pub async fn delete_student(pool: &DbPool, id: i64) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    debug!(id, rows = result.rows_affected(), "deleted student");

    Ok(result.rows_affected())
}
