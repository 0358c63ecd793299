use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use super::AppState;
use crate::error::{ApiError, ApiResult};
use db::models::Student;
use db::repository::students as student_repo;

/// Request body for `POST` and `PUT`.  Absent fields are left to the store.
#[derive(Debug, serde::Deserialize)]
pub struct StudentDto {
    pub name: Option<String>,
    pub cohort_id: Option<i64>,
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    let students = student_repo::list_students(&state.pool)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(students))
}

/// Responds `200 null` when the student does not exist.
pub async fn get(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<Json<Option<Student>>> {
    let student = student_repo::get_student(&state.pool, id)
        .await
        .map_err(ApiError::read)?;
    Ok(Json(student))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<StudentDto>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    match student_repo::insert_student(&state.pool, payload.name.as_deref(), payload.cohort_id)
        .await
    {
        Ok(student) => Ok((StatusCode::CREATED, Json(student))),
        Err(e) => Err(ApiError::write(e)),
    }
}

pub async fn update(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<StudentDto>,
) -> ApiResult<Json<Student>> {
    let count =
        student_repo::update_student(&state.pool, id, payload.name.as_deref(), payload.cohort_id)
            .await
            .map_err(ApiError::write)?;
    if count == 0 {
        return Err(ApiError::NotFound);
    }

    match student_repo::get_student(&state.pool, id).await {
        Ok(Some(student)) => Ok(Json(student)),
        Ok(None) => Err(ApiError::NotFound),
        Err(e) => Err(ApiError::read(e)),
    }
}

pub async fn delete(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> ApiResult<StatusCode> {
    match student_repo::delete_student(&state.pool, id).await {
        Ok(0) => Err(ApiError::NotFound),
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(ApiError::write(e)),
    }
}
