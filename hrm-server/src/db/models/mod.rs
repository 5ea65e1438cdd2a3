//! Database models
//!
//! Row types ([`sqlx::FromRow`]) and request payloads for every aggregate.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
pub mod notification;
pub mod salary;
pub mod user;

pub use attendance::{Attendance, AttendanceCreate, AttendanceRecord, AttendanceStatus};
pub use department::{Department, DepartmentCreate, DepartmentUpdate, DepartmentWithCount};
pub use employee::{
    EmployeeCreate, EmployeeRecord, EmployeeResponse, EmployeeUpdate, ProfileSelfUpdate,
    format_employee_id,
};
pub use leave::{Leave, LeaveApply, LeaveRecord, LeaveStatus};
pub use notification::Notification;
pub use salary::{Salary, SalaryCreate, SalaryRecord, SalaryRow, compute_total};
pub use user::{User, UserCreate};
