//! 通知 Handlers

use axum::extract::{Path, State};
use axum::Json;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Notification;
use crate::db::repository::{NOTIFICATION_LIMIT, NotificationRepository};
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::ErrorCode;

/// GET /api/notifications
///
/// 当前用户的通知, 最新在前。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<Notification>>>> {
    let notifications = NotificationRepository::new(state.pool().clone())
        .list_for_user(user.id, NOTIFICATION_LIMIT)
        .await?;
    Ok(ok(notifications))
}

/// POST /api/notifications/read/{id}
///
/// 只能标记属于自己的通知, 重复标记已读为幂等操作。
pub async fn mark_read(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    let marked = NotificationRepository::new(state.pool().clone())
        .mark_read(user.id, id)
        .await?;
    if !marked {
        return Err(AppError::new(ErrorCode::NotificationNotFound));
    }
    Ok(Json(ApiResponse::ok()))
}
