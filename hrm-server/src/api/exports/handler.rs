//! Export Handlers
//!
//! Query rows, hand them to the pure formatters in [`crate::export`],
//! return an attachment.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::header;

use crate::core::ServerState;
use crate::db::repository::{AttendanceRepository, SalaryRepository};
use crate::export;
use crate::utils::AppResult;

/// Row cap for ledger exports
const EXPORT_LIMIT: i64 = 100_000;

fn attachment(content_type: &'static str, filename: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

pub async fn attendance_csv(State(state): State<ServerState>) -> AppResult<Response> {
    let records = AttendanceRepository::new(state.pool().clone())
        .list_all(EXPORT_LIMIT)
        .await?;
    let bytes = export::attendance_csv(&records)?;
    Ok(attachment("text/csv", "attendance.csv", bytes))
}

pub async fn salary_excel(State(state): State<ServerState>) -> AppResult<Response> {
    let records = SalaryRepository::new(state.pool().clone()).list_all().await?;
    let bytes = export::salary_workbook(&records)?;
    Ok(attachment(
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "salaries.xlsx",
        bytes,
    ))
}

pub async fn salary_pdf(State(state): State<ServerState>) -> AppResult<Response> {
    let records = SalaryRepository::new(state.pool().clone()).list_all().await?;
    let bytes = export::salary_report(&records)?;
    Ok(attachment("application/pdf", "salary_report.pdf", bytes))
}
