//! Department Model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Department row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub manager_id: Option<i64>,
}

/// Department with joined aggregates for listings
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DepartmentWithCount {
    pub id: i64,
    pub name: String,
    pub manager_id: Option<i64>,
    pub manager_name: Option<String>,
    pub employee_count: i64,
}

/// Create department payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepartmentCreate {
    #[validate(length(min = 1, max = 200, message = "Department name must be 1-200 characters"))]
    pub name: String,
    pub manager_id: Option<i64>,
}

/// Update department payload (absent field = unchanged)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepartmentUpdate {
    #[validate(length(min = 1, max = 200, message = "Department name must be 1-200 characters"))]
    pub name: Option<String>,
    /// Absent = unchanged, null = unassign the manager
    #[serde(default, with = "serde_with::rust::double_option")]
    pub manager_id: Option<Option<i64>>,
}
