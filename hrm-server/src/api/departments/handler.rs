//! Department Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate, DepartmentWithCount};
use crate::db::repository::{DepartmentRepository, RepoError};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::ErrorCode;

/// Map a unique violation to the right domain code: the name index and the
/// manager index both live on this table
fn duplicate_code(msg: &str) -> ErrorCode {
    if msg.contains("manager_id") {
        ErrorCode::ManagerAlreadyAssigned
    } else {
        ErrorCode::DepartmentNameExists
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<DepartmentWithCount>>>> {
    let repo = DepartmentRepository::new(state.pool().clone());
    let departments = repo.find_all().await?;
    Ok(ok(departments))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<ApiResponse<Department>>> {
    validate_payload(&payload)?;

    let repo = DepartmentRepository::new(state.pool().clone());
    let department = repo.create(payload).await.map_err(|e| match e {
        RepoError::Duplicate(msg) => AppError::new(duplicate_code(&msg)),
        other => AppError::from(other),
    })?;

    tracing::info!(id = department.id, name = %department.name, "Department created");
    Ok(ok(department))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<ApiResponse<Department>>> {
    validate_payload(&payload)?;

    let repo = DepartmentRepository::new(state.pool().clone());
    let department = repo.update(id, payload).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::DepartmentNotFound),
        RepoError::Duplicate(msg) => AppError::new(duplicate_code(&msg)),
        other => AppError::from(other),
    })?;

    Ok(ok(department))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let repo = DepartmentRepository::new(state.pool().clone());
    if !repo.delete(id).await? {
        return Err(AppError::new(ErrorCode::DepartmentNotFound));
    }

    tracing::info!(id, "Department deleted");
    Ok(Json(ApiResponse::ok()))
}
