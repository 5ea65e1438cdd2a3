//! Shared types for the HRM service
//!
//! Types used by both the server and API clients:
//!
//! - [`error`]: unified error codes, [`AppError`], and the [`ApiResponse`]
//!   envelope
//! - [`role`]: the fixed three-role model
//! - [`client`]: request/response DTOs

pub mod client;
pub mod error;
pub mod role;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode, InvalidErrorCode};
pub use role::{ALL_ROLES, Role, UnknownRole};
