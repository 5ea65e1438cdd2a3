//! Employee Repository
//!
//! Creates accounts and profiles together. The public employee ID comes
//! from the `sequences` table: the counter increment runs first inside the
//! insert transaction, so it takes the SQLite write lock and concurrent
//! creations serialize on it. The counter and the profile insert commit or
//! roll back together, keeping the sequence gap-free.

use sqlx::SqlitePool;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::user::hash_password;
use crate::db::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
use shared::Role;

const RECORD_SELECT: &str = "SELECT p.id, p.user_id, p.employee_no, u.username, u.full_name,
            p.department_id, d.name AS department_name, p.designation, p.phone, p.join_date
     FROM employee_profiles p
     JOIN users u ON u.id = p.user_id
     LEFT JOIN departments d ON d.id = p.department_id";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Create an account, the Employee role and the profile in one transaction
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<EmployeeRecord> {
        let hash = hash_password(&data.password)
            .map_err(|e| RepoError::Validation(format!("Password hashing failed: {e}")))?;
        let join_date = data
            .join_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());

        let mut tx = self.base.pool().begin().await?;

        // Counter first: this write serializes concurrent creations
        let employee_no: i64 = sqlx::query_scalar(
            "UPDATE sequences SET value = value + 1 WHERE name = 'employee' RETURNING value",
        )
        .fetch_one(&mut *tx)
        .await?;

        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, hash_pass, full_name, is_superuser, created_at)
             VALUES (?, ?, ?, 0, ?)
             RETURNING id",
        )
        .bind(&data.username)
        .bind(&hash)
        .bind(&data.full_name)
        .bind(chrono::Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES (?, ?)")
            .bind(user_id)
            .bind(Role::Employee.as_str())
            .execute(&mut *tx)
            .await?;

        let profile_id: i64 = sqlx::query_scalar(
            "INSERT INTO employee_profiles
                 (user_id, employee_no, department_id, designation, phone, join_date)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(user_id)
        .bind(employee_no)
        .bind(data.department_id)
        .bind(&data.designation)
        .bind(&data.phone)
        .bind(join_date)
        .fetch_one(&mut *tx)
        .await?;

        let record = sqlx::query_as(&format!("{RECORD_SELECT} WHERE p.id = ?"))
            .bind(profile_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    pub async fn find_all(&self) -> RepoResult<Vec<EmployeeRecord>> {
        let records = sqlx::query_as(&format!("{RECORD_SELECT} ORDER BY p.employee_no"))
            .fetch_all(self.base.pool())
            .await?;
        Ok(records)
    }

    pub async fn find_in_department(&self, department_id: i64) -> RepoResult<Vec<EmployeeRecord>> {
        let records = sqlx::query_as(&format!(
            "{RECORD_SELECT} WHERE p.department_id = ? ORDER BY p.employee_no"
        ))
        .bind(department_id)
        .fetch_all(self.base.pool())
        .await?;
        Ok(records)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmployeeRecord>> {
        let record = sqlx::query_as(&format!("{RECORD_SELECT} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(record)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> RepoResult<Option<EmployeeRecord>> {
        let record = sqlx::query_as(&format!("{RECORD_SELECT} WHERE p.user_id = ?"))
            .bind(user_id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(record)
    }

    pub async fn update(&self, id: i64, data: EmployeeUpdate) -> RepoResult<EmployeeRecord> {
        let mut tx = self.base.pool().begin().await?;

        let user_id: Option<i64> =
            sqlx::query_scalar("SELECT user_id FROM employee_profiles WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let user_id = user_id.ok_or_else(|| RepoError::NotFound(format!("employee {id}")))?;

        if let Some(full_name) = &data.full_name {
            sqlx::query("UPDATE users SET full_name = ? WHERE id = ?")
                .bind(full_name)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        }

        // department_id: outer None = keep, Some(None) binds NULL and detaches
        if let Some(department_id) = data.department_id {
            sqlx::query("UPDATE employee_profiles SET department_id = ? WHERE id = ?")
                .bind(department_id)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(
            "UPDATE employee_profiles
             SET designation = COALESCE(?, designation),
                 phone = COALESCE(?, phone),
                 join_date = COALESCE(?, join_date)
             WHERE id = ?",
        )
        .bind(data.designation)
        .bind(data.phone)
        .bind(data.join_date)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let record = sqlx::query_as(&format!("{RECORD_SELECT} WHERE p.id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Self-service update; only the phone is editable
    pub async fn update_phone(&self, user_id: i64, phone: &str) -> RepoResult<EmployeeRecord> {
        let result = sqlx::query("UPDATE employee_profiles SET phone = ? WHERE user_id = ?")
            .bind(phone)
            .bind(user_id)
            .execute(self.base.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("profile for user {user_id}")));
        }

        let record = sqlx::query_as(&format!("{RECORD_SELECT} WHERE p.user_id = ?"))
            .bind(user_id)
            .fetch_one(self.base.pool())
            .await?;
        Ok(record)
    }

    /// Delete the employee's account; the profile and its ledgers cascade
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let user_id: Option<i64> =
            sqlx::query_scalar("SELECT user_id FROM employee_profiles WHERE id = ?")
                .bind(id)
                .fetch_optional(self.base.pool())
                .await?;

        let Some(user_id) = user_id else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(self.base.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM employee_profiles")
            .fetch_one(self.base.pool())
            .await?;
        Ok(count)
    }
}
