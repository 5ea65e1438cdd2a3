//! 考勤日历 API 模块
//!
//! 为日历控件提供考勤事件数据源。任何已登录用户可读。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/calendar/events", get(handler::events))
}
