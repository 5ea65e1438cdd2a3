//! Manager Handlers
//!
//! All operations run inside the caller's department scope. Superusers
//! carrying the Manager role pass the scope automatically.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::auth::{CurrentUser, DepartmentScope};
use crate::core::ServerState;
use crate::db::models::{
    Attendance, AttendanceCreate, EmployeeCreate, EmployeeRecord, EmployeeResponse, Leave,
    LeaveRecord, LeaveStatus, Salary, SalaryCreate, format_employee_id,
};
use crate::db::repository::{
    AttendanceRepository, DecideOutcome, EmployeeRepository, LeaveRepository,
    NotificationRepository, RepoError, SalaryRepository,
};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::ErrorCode;

#[derive(Debug, Serialize)]
pub struct ManagerDashboard {
    pub department_id: Option<i64>,
    pub employees: Vec<EmployeeResponse>,
    pub attendance_count: i64,
    pub avg_salary: Option<Decimal>,
    pub leaves: Vec<LeaveRecord>,
}

/// Load the target employee and check it sits in the caller's scope
async fn scoped_employee(
    state: &ServerState,
    scope: &DepartmentScope,
    employee_id: i64,
) -> AppResult<EmployeeRecord> {
    let repo = EmployeeRepository::new(state.pool().clone());
    let record = repo
        .find_by_id(employee_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    scope.ensure(record.department_id)?;
    Ok(record)
}

pub async fn dashboard(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<ManagerDashboard>>> {
    let scope = DepartmentScope::load(state.pool(), &user).await?;
    let pool = state.pool().clone();

    // Superusers have no single department; serve an empty scoped view
    let Some(department_id) = scope.department_id() else {
        return Ok(ok(ManagerDashboard {
            department_id: None,
            employees: vec![],
            attendance_count: 0,
            avg_salary: None,
            leaves: vec![],
        }));
    };

    let employees = EmployeeRepository::new(pool.clone())
        .find_in_department(department_id)
        .await?;
    let attendance_count = AttendanceRepository::new(pool.clone())
        .count_for_department(department_id)
        .await?;
    let avg_salary = SalaryRepository::new(pool.clone())
        .average_total_for_department(department_id)
        .await?;
    let leaves = LeaveRepository::new(pool)
        .list_for_department(department_id, 10)
        .await?;

    Ok(ok(ManagerDashboard {
        department_id: Some(department_id),
        employees: employees.into_iter().map(Into::into).collect(),
        attendance_count,
        avg_salary,
        leaves,
    }))
}

/// Create an employee in the manager's own department
///
/// The department in the payload is ignored; the scope decides.
pub async fn create_employee(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(mut payload): Json<EmployeeCreate>,
) -> AppResult<Json<ApiResponse<EmployeeResponse>>> {
    validate_payload(&payload)?;

    let scope = DepartmentScope::load(state.pool(), &user).await?;
    let department_id = scope
        .department_id()
        .ok_or_else(|| AppError::new(ErrorCode::NoManagedDepartment))?;
    payload.department_id = Some(department_id);

    let repo = EmployeeRepository::new(state.pool().clone());
    let record = repo.create(payload).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::UsernameExists),
        other => AppError::from(other),
    })?;

    tracing::info!(
        id = record.id,
        employee_no = record.employee_no,
        department_id,
        "Employee created by manager"
    );
    Ok(ok(record.into()))
}

pub async fn mark_attendance(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(employee_id): Path<i64>,
    Json(payload): Json<AttendanceCreate>,
) -> AppResult<Json<ApiResponse<Attendance>>> {
    validate_payload(&payload)?;

    let scope = DepartmentScope::load(state.pool(), &user).await?;
    scoped_employee(&state, &scope, employee_id).await?;

    let repo = AttendanceRepository::new(state.pool().clone());
    let attendance = repo
        .create(employee_id, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::new(ErrorCode::DuplicateAttendance),
            other => AppError::from(other),
        })?;

    Ok(ok(attendance))
}

pub async fn process_salary(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(employee_id): Path<i64>,
    Json(payload): Json<SalaryCreate>,
) -> AppResult<Json<ApiResponse<Salary>>> {
    validate_payload(&payload)?;

    let scope = DepartmentScope::load(state.pool(), &user).await?;
    let employee = scoped_employee(&state, &scope, employee_id).await?;

    let repo = SalaryRepository::new(state.pool().clone());
    let salary = repo.create(employee_id, payload).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::DuplicateSalary),
        other => AppError::from(other),
    })?;

    NotificationRepository::new(state.pool().clone())
        .notify(
            employee.user_id,
            "Salary Processed",
            &format!(
                "Salary for {} has been processed: total {}",
                salary.month, salary.total_salary
            ),
        )
        .await?;

    Ok(ok(salary))
}

#[derive(Debug, Deserialize)]
pub struct LeaveAction {
    pub action: Option<String>,
}

/// Decide a pending leave request
///
/// `action=Approve|Reject` transitions the request; any other action value
/// returns the request unchanged. A request that already reached a terminal
/// state is reported as a conflict and stays untouched.
pub async fn decide_leave(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(leave_id): Path<i64>,
    Query(query): Query<LeaveAction>,
) -> AppResult<Json<ApiResponse<Leave>>> {
    let scope = DepartmentScope::load(state.pool(), &user).await?;

    let leaves = LeaveRepository::new(state.pool().clone());
    let record = leaves
        .find_record(leave_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::LeaveNotFound))?;
    scope.ensure(record.department_id)?;

    let status = match query.action.as_deref() {
        Some("Approve") => LeaveStatus::Approved,
        Some("Reject") => LeaveStatus::Rejected,
        // Unknown action: no-op, return the request as-is
        _ => {
            let leave = leaves
                .find_by_id(leave_id)
                .await?
                .ok_or_else(|| AppError::new(ErrorCode::LeaveNotFound))?;
            return Ok(ok(leave));
        }
    };

    match leaves.decide(leave_id, status).await? {
        DecideOutcome::Updated(leave) => {
            NotificationRepository::new(state.pool().clone())
                .notify(
                    record.user_id,
                    "Leave Request Update",
                    &format!(
                        "Your leave request ({} to {}) has been {}",
                        leave.start_date,
                        leave.end_date,
                        leave.status.as_str()
                    ),
                )
                .await?;

            tracing::info!(
                leave_id,
                employee = %format_employee_id(record.employee_no),
                status = leave.status.as_str(),
                "Leave request decided"
            );
            Ok(ok(leave))
        }
        DecideOutcome::AlreadyDecided(_) => Err(AppError::new(ErrorCode::LeaveAlreadyDecided)),
        DecideOutcome::NotFound => Err(AppError::new(ErrorCode::LeaveNotFound)),
    }
}
