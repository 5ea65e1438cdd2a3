//! Leave Request Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Leave request workflow state
///
/// `Pending` is the only non-terminal state; `Approved` and `Rejected`
/// are final
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

/// Leave request row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Leave {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
}

/// Leave request joined with the employee and department
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LeaveRecord {
    pub id: i64,
    pub employee_id: i64,
    pub user_id: i64,
    pub employee_no: i64,
    pub full_name: String,
    pub department_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_on: DateTime<Utc>,
}

/// Apply-for-leave payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeaveApply {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(length(min = 1, max = 500, message = "Reason must be 1-500 characters"))]
    pub reason: String,
}
