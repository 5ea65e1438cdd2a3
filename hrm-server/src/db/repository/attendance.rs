//! Attendance Repository
//!
//! One row per employee per date; the second mark for the same day hits
//! the unique index and comes back as [`super::RepoError::Duplicate`].

use sqlx::SqlitePool;

use super::{BaseRepository, RepoResult};
use crate::db::models::{Attendance, AttendanceCreate, AttendanceRecord};

const RECORD_SELECT: &str = "SELECT a.id, a.employee_id, p.employee_no, u.full_name,
            a.date, a.status, a.note
     FROM attendance a
     JOIN employee_profiles p ON p.id = a.employee_id
     JOIN users u ON u.id = p.user_id";

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    pub async fn create(&self, employee_id: i64, data: AttendanceCreate) -> RepoResult<Attendance> {
        let attendance = sqlx::query_as(
            "INSERT INTO attendance (employee_id, date, status, note)
             VALUES (?, ?, ?, ?)
             RETURNING *",
        )
        .bind(employee_id)
        .bind(data.date)
        .bind(data.status)
        .bind(&data.note)
        .fetch_one(self.base.pool())
        .await?;
        Ok(attendance)
    }

    /// Latest entries for one employee, newest date first
    pub async fn list_for_employee(
        &self,
        employee_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<Attendance>> {
        let entries = sqlx::query_as(
            "SELECT * FROM attendance WHERE employee_id = ? ORDER BY date DESC LIMIT ?",
        )
        .bind(employee_id)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(entries)
    }

    /// Entries across a department, newest date first
    pub async fn list_for_department(
        &self,
        department_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<AttendanceRecord>> {
        let records = sqlx::query_as(&format!(
            "{RECORD_SELECT} WHERE p.department_id = ? ORDER BY a.date DESC, p.employee_no LIMIT ?"
        ))
        .bind(department_id)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(records)
    }

    /// All entries, newest date first (exports, calendar)
    pub async fn list_all(&self, limit: i64) -> RepoResult<Vec<AttendanceRecord>> {
        let records = sqlx::query_as(&format!(
            "{RECORD_SELECT} ORDER BY a.date DESC, p.employee_no LIMIT ?"
        ))
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;
        Ok(records)
    }

    pub async fn count_for_department(&self, department_id: i64) -> RepoResult<i64> {
        let count = sqlx::query_scalar(
            "SELECT COUNT(*) FROM attendance a
             JOIN employee_profiles p ON p.id = a.employee_id
             WHERE p.department_id = ?",
        )
        .bind(department_id)
        .fetch_one(self.base.pool())
        .await?;
        Ok(count)
    }
}
