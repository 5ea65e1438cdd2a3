//! Employee Directory Handlers (Admin)

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use crate::db::repository::{DepartmentRepository, EmployeeRepository, RepoError};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::ErrorCode;

/// Reject unknown departments up front; a foreign-key failure would
/// otherwise surface as a 500
async fn check_department(state: &ServerState, department_id: Option<i64>) -> AppResult<()> {
    if let Some(id) = department_id {
        let repo = DepartmentRepository::new(state.pool().clone());
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::new(ErrorCode::DepartmentNotFound));
        }
    }
    Ok(())
}

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<EmployeeResponse>>>> {
    let repo = EmployeeRepository::new(state.pool().clone());
    let employees = repo.find_all().await?;
    Ok(ok(employees.into_iter().map(Into::into).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    validate_payload(&payload)?;
    check_department(&state, payload.department_id).await?;

    let repo = EmployeeRepository::new(state.pool().clone());
    let record = repo.create(payload).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::UsernameExists),
        other => AppError::from(other),
    })?;

    tracing::info!(
        id = record.id,
        employee_no = record.employee_no,
        "Employee created"
    );
    Ok(ok(record.into()))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.pool().clone());
    let record = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    Ok(ok(record.into()))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    validate_payload(&payload)?;
    check_department(&state, payload.department_id.flatten()).await?;

    let repo = EmployeeRepository::new(state.pool().clone());
    let record = repo.update(id, payload).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::EmployeeNotFound),
        other => AppError::from(other),
    })?;
    Ok(ok(record.into()))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = EmployeeRepository::new(state.pool().clone());
    if !repo.delete(id).await? {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }

    tracing::info!(id, "Employee deleted");
    Ok(Json(ApiResponse::ok()))
}
