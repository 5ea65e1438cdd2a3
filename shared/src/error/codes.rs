//! Unified error codes for the HRM service
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Department errors
//! - 4xxx: Employee errors
//! - 5xxx: Attendance errors
//! - 6xxx: Leave errors
//! - 7xxx: Salary errors
//! - 8xxx: Notification errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Target is outside the acting manager's department
    DepartmentScopeDenied = 2004,

    // ==================== 3xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 3001,
    /// Department name already exists
    DepartmentNameExists = 3002,
    /// Acting manager has no managed department
    NoManagedDepartment = 3003,
    /// User already manages another department
    ManagerAlreadyAssigned = 3004,

    // ==================== 4xxx: Employee ====================
    /// Employee profile not found
    EmployeeNotFound = 4001,
    /// Username already exists
    UsernameExists = 4002,
    /// User already has an employee profile
    ProfileExists = 4003,
    /// Referenced user not found
    UserNotFound = 4004,

    // ==================== 5xxx: Attendance ====================
    /// Attendance record not found
    AttendanceNotFound = 5001,
    /// Attendance already recorded for this employee and date
    DuplicateAttendance = 5002,
    /// Attendance status is not one of Present/Absent/Leave
    InvalidAttendanceStatus = 5003,

    // ==================== 6xxx: Leave ====================
    /// Leave request not found
    LeaveNotFound = 6001,
    /// Leave has already been approved or rejected
    LeaveAlreadyDecided = 6002,
    /// Leave end date precedes start date
    InvalidLeaveRange = 6003,

    // ==================== 7xxx: Salary ====================
    /// Salary record not found
    SalaryNotFound = 7001,
    /// Salary already processed for this employee and month
    DuplicateSalary = 7002,
    /// Salary amount is not a valid decimal
    InvalidSalaryAmount = 7003,

    // ==================== 8xxx: Notification ====================
    /// Notification not found
    NotificationNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",
            Self::AccountDisabled => "Account has been disabled",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Required role is missing",
            Self::AdminRequired => "Admin role required",
            Self::DepartmentScopeDenied => "Target is outside your department",

            Self::DepartmentNotFound => "Department not found",
            Self::DepartmentNameExists => "Department name already exists",
            Self::NoManagedDepartment => "You are not assigned to any department",
            Self::ManagerAlreadyAssigned => "User already manages another department",

            Self::EmployeeNotFound => "Employee not found",
            Self::UsernameExists => "Username already exists",
            Self::ProfileExists => "User already has an employee profile",
            Self::UserNotFound => "User not found",

            Self::AttendanceNotFound => "Attendance record not found",
            Self::DuplicateAttendance => "Attendance already recorded for this date",
            Self::InvalidAttendanceStatus => "Invalid attendance status",

            Self::LeaveNotFound => "Leave request not found",
            Self::LeaveAlreadyDecided => "Leave has already been decided",
            Self::InvalidLeaveRange => "Leave end date precedes start date",

            Self::SalaryNotFound => "Salary record not found",
            Self::DuplicateSalary => "Salary already processed for this month",
            Self::InvalidSalaryAmount => "Invalid salary amount",

            Self::NotificationNotFound => "Notification not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04} {}", self.code(), self.message())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when deserializing an unknown error code value
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::AccountDisabled,

            2001 => Self::PermissionDenied,
            2002 => Self::RoleRequired,
            2003 => Self::AdminRequired,
            2004 => Self::DepartmentScopeDenied,

            3001 => Self::DepartmentNotFound,
            3002 => Self::DepartmentNameExists,
            3003 => Self::NoManagedDepartment,
            3004 => Self::ManagerAlreadyAssigned,

            4001 => Self::EmployeeNotFound,
            4002 => Self::UsernameExists,
            4003 => Self::ProfileExists,
            4004 => Self::UserNotFound,

            5001 => Self::AttendanceNotFound,
            5002 => Self::DuplicateAttendance,
            5003 => Self::InvalidAttendanceStatus,

            6001 => Self::LeaveNotFound,
            6002 => Self::LeaveAlreadyDecided,
            6003 => Self::InvalidLeaveRange,

            7001 => Self::SalaryNotFound,
            7002 => Self::DuplicateSalary,
            7003 => Self::InvalidSalaryAmount,

            8001 => Self::NotificationNotFound,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::DuplicateAttendance.code(), 5002);
        assert_eq!(ErrorCode::LeaveAlreadyDecided.code(), 6002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidCredentials,
            ErrorCode::DepartmentScopeDenied,
            ErrorCode::DuplicateSalary,
            ErrorCode::InternalError,
        ] {
            let raw: u16 = code.into();
            assert_eq!(ErrorCode::try_from(raw).unwrap(), code);
        }
    }

    #[test]
    fn test_invalid_code() {
        assert!(ErrorCode::try_from(65535).is_err());
        assert!(ErrorCode::try_from(1234).is_err());
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::LeaveAlreadyDecided).unwrap();
        assert_eq!(json, "6002");
        let back: ErrorCode = serde_json::from_str("6002").unwrap();
        assert_eq!(back, ErrorCode::LeaveAlreadyDecided);
    }
}
