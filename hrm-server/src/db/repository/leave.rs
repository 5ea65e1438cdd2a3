//! Leave Repository
//!
//! Decisions run as a conditional update on `status = 'Pending'`, so a
//! request can only ever be decided once regardless of racing reviewers.

use sqlx::SqlitePool;

use super::{BaseRepository, RepoResult};
use crate::db::models::{Leave, LeaveApply, LeaveRecord, LeaveStatus};

const RECORD_SELECT: &str = "SELECT l.id, l.employee_id, p.user_id, p.employee_no, u.full_name, p.department_id,
            l.start_date, l.end_date, l.reason, l.status, l.applied_on
     FROM leaves l
     JOIN employee_profiles p ON p.id = l.employee_id
     JOIN users u ON u.id = p.user_id";

/// Result of a decision attempt
#[derive(Debug, Clone)]
pub enum DecideOutcome {
    /// Transitioned out of Pending
    Updated(Leave),
    /// Request exists but was already decided; record unchanged
    AlreadyDecided(Leave),
    /// No such request
    NotFound,
}

#[derive(Clone)]
pub struct LeaveRepository {
    base: BaseRepository,
}

impl LeaveRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    pub async fn create(&self, employee_id: i64, data: LeaveApply) -> RepoResult<Leave> {
        let leave = sqlx::query_as(
            "INSERT INTO leaves (employee_id, start_date, end_date, reason, status, applied_on)
             VALUES (?, ?, ?, ?, 'Pending', ?)
             RETURNING *",
        )
        .bind(employee_id)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.reason)
        .bind(chrono::Utc::now())
        .fetch_one(self.base.pool())
        .await?;
        Ok(leave)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Leave>> {
        let leave = sqlx::query_as("SELECT * FROM leaves WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(leave)
    }

    /// Request joined with employee and department (for scope checks)
    pub async fn find_record(&self, id: i64) -> RepoResult<Option<LeaveRecord>> {
        let record = sqlx::query_as(&format!("{RECORD_SELECT} WHERE l.id = ?"))
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(record)
    }

    /// Latest requests of one employee, newest first
    pub async fn list_for_employee(&self, employee_id: i64, limit: i64) -> RepoResult<Vec<Leave>> {
        let leaves = sqlx::query_as(
            "SELECT * FROM leaves WHERE employee_id = ?
             ORDER BY applied_on DESC, id DESC LIMIT ?",
        )
        .bind(employee_id)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(leaves)
    }

    /// Latest requests across a department, newest first
    pub async fn list_for_department(
        &self,
        department_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<LeaveRecord>> {
        let records = sqlx::query_as(&format!(
            "{RECORD_SELECT} WHERE p.department_id = ?
             ORDER BY l.applied_on DESC, l.id DESC LIMIT ?"
        ))
        .bind(department_id)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(records)
    }

    pub async fn pending_count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM leaves WHERE status = 'Pending'")
            .fetch_one(self.base.pool())
            .await?;
        Ok(count)
    }

    /// Decide a pending request
    ///
    /// The update only matches `Pending` rows; zero rows affected means
    /// either the request is already decided or it does not exist.
    pub async fn decide(&self, id: i64, status: LeaveStatus) -> RepoResult<DecideOutcome> {
        let updated: Option<Leave> = sqlx::query_as(
            "UPDATE leaves SET status = ? WHERE id = ? AND status = 'Pending' RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(self.base.pool())
        .await?;

        if let Some(leave) = updated {
            return Ok(DecideOutcome::Updated(leave));
        }

        match self.find_by_id(id).await? {
            Some(leave) => Ok(DecideOutcome::AlreadyDecided(leave)),
            None => Ok(DecideOutcome::NotFound),
        }
    }
}
