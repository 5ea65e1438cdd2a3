//! Attendance Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Attendance status for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
        }
    }
}

/// Attendance row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub note: String,
}

/// Attendance joined with the employee for exports and listings
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee_no: i64,
    pub full_name: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub note: String,
}

/// Mark attendance payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttendanceCreate {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[validate(length(max = 500, message = "Note too long"))]
    #[serde(default)]
    pub note: String,
}
