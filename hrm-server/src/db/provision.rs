//! 初始数据预配
//!
//! 启动时保证三个内置角色存在，并在 users 表为空时创建
//! 超级管理员账号 (用户名/密码来自配置)。

use sqlx::SqlitePool;

use crate::db::models::user::hash_password;
use crate::utils::AppError;
use shared::ALL_ROLES;

/// 保证内置角色存在 (幂等)
pub async fn ensure_roles(pool: &SqlitePool) -> Result<(), AppError> {
    for role in ALL_ROLES {
        sqlx::query("INSERT OR IGNORE INTO roles (name) VALUES (?)")
            .bind(role.as_str())
            .execute(pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to seed role: {e}")))?;
    }
    Ok(())
}

/// 首次启动时创建超级管理员
///
/// 仅当 users 表为空时执行，后续启动不再覆盖密码
pub async fn ensure_superuser(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<(), AppError> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to count users: {e}")))?;

    if user_count > 0 {
        return Ok(());
    }

    let hash = hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;

    sqlx::query(
        "INSERT INTO users (username, hash_pass, full_name, is_superuser, created_at)
         VALUES (?, ?, ?, 1, ?)",
    )
    .bind(username)
    .bind(hash)
    .bind("Administrator")
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .map_err(|e| AppError::database(format!("Failed to create superuser: {e}")))?;

    tracing::info!(username, "Bootstrap superuser created");
    Ok(())
}
