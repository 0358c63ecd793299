use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use super::AppState;
use crate::error::{ApiError, ApiResult};
use db::models::{Cohort, Student};
use db::repository::{cohorts as cohort_repo, students as student_repo};

/// Request body for `POST` and `PUT`.  Absent fields are left to the store.
#[derive(Debug, serde::Deserialize)]
pub struct CohortDto {
    pub cohort: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Cohort>>> {
    let cohorts = cohort_repo::list_cohorts(&state.pool)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(cohorts))
}

/// Responds `200 null` when the cohort does not exist.
pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Option<Cohort>>> {
    let cohort = cohort_repo::get_cohort(&state.pool, id)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(cohort))
}

pub async fn students(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Student>>> {
    let students = student_repo::list_students_of_cohort(&state.pool, id)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(students))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CohortDto>,
) -> ApiResult<(StatusCode, Json<Cohort>)> {
    match cohort_repo::insert_cohort(&state.pool, payload.cohort.as_deref()).await {
        Ok(cohort) => Ok((StatusCode::CREATED, Json(cohort))),
        Err(e) => Err(ApiError::write(e)),
    }
}

pub async fn update(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CohortDto>,
) -> ApiResult<Json<Cohort>> {
    let count = cohort_repo::update_cohort(&state.pool, id, payload.cohort.as_deref())
        .await
        .map_err(ApiError::write)?;
    if count == 0 {
        return Err(ApiError::NotFound);
    }

    match cohort_repo::get_cohort(&state.pool, id).await {
        Ok(Some(cohort)) => Ok(Json(cohort)),
        // deleted between the two statements
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::read(e)),
    }
}

pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<StatusCode> {
    match cohort_repo::delete_cohort(&state.pool, id).await {
        Ok(0) => Err(ApiError::NotFound),
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(ApiError::write(e)),
    }
}
