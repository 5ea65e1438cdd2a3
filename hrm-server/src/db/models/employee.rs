//! Employee Profile Model
//!
//! An employee is an account ([`super::User`]) plus a profile row carrying
//! the durable sequence number rendered as `EMP0001`, `EMP0002`, ...

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Render a sequence number as a public employee ID
///
/// Zero-padded to four digits; wider numbers keep all digits (EMP10000)
pub fn format_employee_id(employee_no: i64) -> String {
    format!("EMP{:04}", employee_no)
}

/// Profile joined with its account and department name
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeRecord {
    pub id: i64,
    pub user_id: i64,
    pub employee_no: i64,
    pub username: String,
    pub full_name: String,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
    pub designation: String,
    pub phone: String,
    pub join_date: NaiveDate,
}

/// API projection of an employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i64,
    pub employee_id: String,
    pub username: String,
    pub full_name: String,
    pub department_id: Option<i64>,
    pub department: Option<String>,
    pub designation: String,
    pub phone: String,
    pub join_date: NaiveDate,
}

impl From<EmployeeRecord> for EmployeeResponse {
    fn from(r: EmployeeRecord) -> Self {
        Self {
            id: r.id,
            employee_id: format_employee_id(r.employee_no),
            username: r.username,
            full_name: r.full_name,
            department_id: r.department_id,
            department: r.department_name,
            designation: r.designation,
            phone: r.phone,
            join_date: r.join_date,
        }
    }
}

/// Create employee payload (account + profile in one step)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeCreate {
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 128, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 200, message = "Full name must be 1-200 characters"))]
    pub full_name: String,
    pub department_id: Option<i64>,
    #[validate(length(max = 200, message = "Designation too long"))]
    #[serde(default)]
    pub designation: String,
    #[validate(length(max = 100, message = "Phone too long"))]
    #[serde(default)]
    pub phone: String,
    pub join_date: Option<NaiveDate>,
}

/// Update employee payload (None = unchanged)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, max = 200, message = "Full name must be 1-200 characters"))]
    pub full_name: Option<String>,
    /// Absent = unchanged, null = detach from the department
    #[serde(default, with = "serde_with::rust::double_option")]
    pub department_id: Option<Option<i64>>,
    #[validate(length(max = 200, message = "Designation too long"))]
    pub designation: Option<String>,
    #[validate(length(max = 100, message = "Phone too long"))]
    pub phone: Option<String>,
    pub join_date: Option<NaiveDate>,
}

/// Self-service profile update; employees may only change their phone
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProfileSelfUpdate {
    #[validate(length(max = 100, message = "Phone too long"))]
    pub phone: String,
}
