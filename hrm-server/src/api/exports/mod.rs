//! Export API Module
//!
//! Authenticated file downloads of the attendance and salary ledgers.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/export/attendance/csv", get(handler::attendance_csv))
        .route("/api/export/salary/excel", get(handler::salary_excel))
        .route("/api/export/salary/pdf", get(handler::salary_pdf))
}
