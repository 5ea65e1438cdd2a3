//! Manager API Module
//!
//! Department-scoped operations; every handler loads the caller's
//! [`crate::auth::DepartmentScope`] before touching data.

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_role;
use crate::core::ServerState;
use shared::Role;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/manager/dashboard", get(handler::dashboard))
        .route("/api/manager/employees", post(handler::create_employee))
        .route(
            "/api/manager/attendance/{employee_id}",
            post(handler::mark_attendance),
        )
        .route(
            "/api/manager/salary/{employee_id}",
            post(handler::process_salary),
        )
        .route("/api/manager/leave/{leave_id}", get(handler::decide_leave))
        .route_layer(middleware::from_fn(require_role(Role::Manager)))
}
