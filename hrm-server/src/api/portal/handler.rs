//! Employee Self-Service Handlers
//!
//! Everything here is scoped to the caller's own profile.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    Attendance, EmployeeRecord, EmployeeResponse, Leave, LeaveApply, ProfileSelfUpdate, Salary,
};
use crate::db::repository::{
    AttendanceRepository, DepartmentRepository, EmployeeRepository, LeaveRepository,
    NotificationRepository, SalaryRepository,
};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::ErrorCode;

#[derive(Debug, Serialize)]
pub struct EmployeeDashboard {
    pub profile: EmployeeResponse,
    pub attendance: Vec<Attendance>,
    pub salaries: Vec<Salary>,
    pub leaves: Vec<Leave>,
}

async fn own_profile(state: &ServerState, user: &CurrentUser) -> AppResult<EmployeeRecord> {
    EmployeeRepository::new(state.pool().clone())
        .find_by_user_id(user.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))
}

pub async fn dashboard(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<EmployeeDashboard>>> {
    let profile = own_profile(&state, &user).await?;
    let pool = state.pool().clone();

    let attendance = AttendanceRepository::new(pool.clone())
        .list_for_employee(profile.id, 30)
        .await?;
    let salaries = SalaryRepository::new(pool.clone())
        .list_for_employee(profile.id, 12)
        .await?;
    let leaves = LeaveRepository::new(pool)
        .list_for_employee(profile.id, 10)
        .await?;

    Ok(ok(EmployeeDashboard {
        profile: profile.into(),
        attendance,
        salaries,
        leaves,
    }))
}

/// Self-service profile edit; only the phone number is editable
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProfileSelfUpdate>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    validate_payload(&payload)?;

    let repo = EmployeeRepository::new(state.pool().clone());
    let record = repo
        .update_phone(user.id, &payload.phone)
        .await
        .map_err(|e| match e {
            crate::db::repository::RepoError::NotFound(_) => {
                AppError::new(ErrorCode::EmployeeNotFound)
            }
            other => AppError::from(other),
        })?;

    Ok(ok(record.into()))
}

/// Apply for leave; lands as Pending and pings the department manager
pub async fn apply_leave(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<LeaveApply>,
) -> AppResult<Json<ApiResponse<Leave>>> {
    validate_payload(&payload)?;

    if payload.end_date < payload.start_date {
        return Err(AppError::new(ErrorCode::InvalidLeaveRange));
    }

    let profile = own_profile(&state, &user).await?;

    let leave = LeaveRepository::new(state.pool().clone())
        .create(profile.id, payload)
        .await?;

    // Notify the department manager, when the department has one
    if let Some(department_id) = profile.department_id {
        let department = DepartmentRepository::new(state.pool().clone())
            .find_by_id(department_id)
            .await?;
        if let Some(manager_id) = department.and_then(|d| d.manager_id) {
            NotificationRepository::new(state.pool().clone())
                .notify(
                    manager_id,
                    "New Leave Request",
                    &format!(
                        "{} requested leave from {} to {}",
                        profile.full_name, leave.start_date, leave.end_date
                    ),
                )
                .await?;
        }
    }

    tracing::info!(leave_id = leave.id, employee_id = profile.id, "Leave request created");
    Ok(ok(leave))
}
