//! 统一错误处理
//!
//! 应用级错误类型和响应结构由 shared::error 提供，此处统一 re-export
//! 并补充 handler 层的快捷构造函数。
//!
//! # 错误码规范
//!
//! | 范围 | 分类 |
//! |------|------|
//! | 0xxx | 通用错误 |
//! | 1xxx | 认证错误 |
//! | 2xxx | 权限错误 |
//! | 3xxx | 部门 |
//! | 4xxx | 员工 |
//! | 5xxx | 考勤 |
//! | 6xxx | 请假 |
//! | 7xxx | 薪资 |
//! | 8xxx | 通知 |
//! | 9xxx | 系统错误 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("employee not found"))
//!
//! // 返回成功响应
//! Ok(ok(data))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, ErrorCategory, ErrorCode};

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success_with_message(message, data))
}
