//! Admin Dashboard Handler
//!
//! One aggregate payload: per-department headcounts, totals, pending leave
//! count and the caller's latest notifications.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{DepartmentWithCount, Notification};
use crate::db::repository::{
    DepartmentRepository, EmployeeRepository, LeaveRepository, NotificationRepository,
};
use crate::utils::{ApiResponse, AppResult, ok};

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    pub departments: Vec<DepartmentWithCount>,
    pub employee_total: i64,
    pub leave_pending: i64,
    pub notifications: Vec<Notification>,
}

pub async fn dashboard(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<AdminDashboard>>> {
    let pool = state.pool().clone();

    let departments = DepartmentRepository::new(pool.clone()).find_all().await?;
    let employee_total = EmployeeRepository::new(pool.clone()).count().await?;
    let leave_pending = LeaveRepository::new(pool.clone()).pending_count().await?;
    let notifications = NotificationRepository::new(pool)
        .list_for_user(user.id, 5)
        .await?;

    Ok(ok(AdminDashboard {
        departments,
        employee_total,
        leave_pending,
        notifications,
    }))
}
