//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`departments`] - 部门管理接口 (Admin)
//! - [`managers`] - 经理账号管理接口 (Admin)
//! - [`employees`] - 员工管理接口 (Admin)
//! - [`dashboard`] - 管理员仪表盘 (Admin)
//! - [`manager`] - 经理工作台 (Manager, 部门范围内)
//! - [`portal`] - 员工自助接口 (Employee)
//! - [`exports`] - 台账导出接口
//! - [`calendar`] - 考勤日历数据源
//! - [`notifications`] - 通知接口

pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod exports;
pub mod health;
pub mod manager;
pub mod managers;
pub mod middleware;
pub mod notifications;
pub mod portal;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResult, ok};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Auth API - login public, rest authenticated
        .merge(auth::router())
        // Admin API - Admin role required
        .merge(departments::router())
        .merge(managers::router())
        .merge(employees::router())
        .merge(dashboard::router())
        // Manager API - Manager role + department scope
        .merge(manager::router())
        // Employee self-service API
        .merge(portal::router())
        // Authenticated common APIs
        .merge(exports::router())
        .merge(calendar::router())
        .merge(notifications::router())
        // Health API - public route
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
///
/// This is used by both the HTTP server and the integration tests
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // JWT authentication - injects CurrentUser before routes run
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .with_state(state)
}
