//! Notification Repository
//!
//! Notifications are fan-out rows written when leave requests move and
//! salaries are processed. Reads are capped at the newest 50.

use sqlx::SqlitePool;

use super::{BaseRepository, RepoResult};
use crate::db::models::Notification;

/// Listing cap; older entries stay in storage but are not served
pub const NOTIFICATION_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct NotificationRepository {
    base: BaseRepository,
}

impl NotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    pub async fn notify(
        &self,
        user_id: i64,
        title: &str,
        message: &str,
    ) -> RepoResult<Notification> {
        let notification = sqlx::query_as(
            "INSERT INTO notifications (user_id, title, message, created, read)
             VALUES (?, ?, ?, ?, 0)
             RETURNING *",
        )
        .bind(user_id)
        .bind(title)
        .bind(message)
        .bind(chrono::Utc::now())
        .fetch_one(self.base.pool())
        .await?;
        Ok(notification)
    }

    /// Newest first, capped at [`NOTIFICATION_LIMIT`]
    pub async fn list_for_user(&self, user_id: i64, limit: i64) -> RepoResult<Vec<Notification>> {
        let notifications = sqlx::query_as(
            "SELECT * FROM notifications WHERE user_id = ?
             ORDER BY created DESC, id DESC LIMIT ?",
        )
        .bind(user_id)
        .bind(limit.min(NOTIFICATION_LIMIT))
        .fetch_all(self.base.pool())
        .await?;
        Ok(notifications)
    }

    /// Mark one of the user's notifications read; idempotent
    ///
    /// Returns false when the notification does not exist or belongs to
    /// another user
    pub async fn mark_read(&self, user_id: i64, id: i64) -> RepoResult<bool> {
        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM notifications WHERE id = ? AND user_id = ?")
                .bind(id)
                .bind(user_id)
                .fetch_optional(self.base.pool())
                .await?;

        if exists.is_none() {
            return Ok(false);
        }

        sqlx::query("UPDATE notifications SET read = 1 WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(self.base.pool())
            .await?;
        Ok(true)
    }
}
