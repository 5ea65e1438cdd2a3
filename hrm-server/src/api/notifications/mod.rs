//! 通知 API 模块
//!
//! 当前用户的站内通知: 列表与已读标记。

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/notifications", get(handler::list))
        .route("/api/notifications/read/{id}", post(handler::mark_read))
}
