//! User Repository
//!
//! Accounts and role assignments. Employee accounts are created through
//! [`super::EmployeeRepository`]; this repository covers login lookups
//! and manager provisioning.

use serde::Serialize;
use sqlx::SqlitePool;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::user::{User, UserCreate, hash_password};
use shared::Role;

/// Manager listing entry (account + managed department, if any)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ManagerInfo {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub department_id: Option<i64>,
    pub department_name: Option<String>,
}

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let user = sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let user = sqlx::query_as("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(user)
    }

    /// Create an account and assign roles in one transaction
    pub async fn create(&self, data: UserCreate, roles: &[Role]) -> RepoResult<User> {
        let hash = hash_password(&data.password)
            .map_err(|e| RepoError::Validation(format!("Password hashing failed: {e}")))?;

        let mut tx = self.base.pool().begin().await?;

        let user: User = sqlx::query_as(
            "INSERT INTO users (username, hash_pass, full_name, is_superuser, created_at)
             VALUES (?, ?, ?, 0, ?)
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&hash)
        .bind(&data.full_name)
        .bind(chrono::Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        for role in roles {
            sqlx::query("INSERT OR IGNORE INTO user_roles (user_id, role) VALUES (?, ?)")
                .bind(user.id)
                .bind(role.as_str())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(user)
    }

    /// Roles assigned to a user
    pub async fn roles_of(&self, user_id: i64) -> RepoResult<Vec<Role>> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT role FROM user_roles WHERE user_id = ? ORDER BY role")
                .bind(user_id)
                .fetch_all(self.base.pool())
                .await?;

        names
            .iter()
            .map(|n| {
                n.parse::<Role>()
                    .map_err(|e| RepoError::Database(e.to_string()))
            })
            .collect()
    }

    /// All accounts carrying the Manager role, joined with their department
    pub async fn list_managers(&self) -> RepoResult<Vec<ManagerInfo>> {
        let managers = sqlx::query_as(
            "SELECT u.id, u.username, u.full_name, d.id AS department_id, d.name AS department_name
             FROM users u
             JOIN user_roles ur ON ur.user_id = u.id AND ur.role = 'Manager'
             LEFT JOIN departments d ON d.manager_id = u.id
             ORDER BY u.username",
        )
        .fetch_all(self.base.pool())
        .await?;
        Ok(managers)
    }
}
