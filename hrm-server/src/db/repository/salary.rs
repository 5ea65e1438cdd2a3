//! Salary Repository
//!
//! Money columns are stored as canonical decimal strings and parsed into
//! [`Decimal`] on the way out. The total is computed here, never taken
//! from the client. One record per employee per month, enforced by the
//! unique index.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::salary::{Salary, SalaryCreate, SalaryRecord, SalaryRow, compute_total};

/// Joined row as stored (money still TEXT)
#[derive(Debug, sqlx::FromRow)]
struct SalaryRecordRow {
    id: i64,
    employee_id: i64,
    employee_no: i64,
    full_name: String,
    month: String,
    base_salary: String,
    bonus: String,
    deductions: String,
    total_salary: String,
}

const RECORD_SELECT: &str = "SELECT s.id, s.employee_id, p.employee_no, u.full_name, s.month,
            s.base_salary, s.bonus, s.deductions, s.total_salary
     FROM salaries s
     JOIN employee_profiles p ON p.id = s.employee_id
     JOIN users u ON u.id = p.user_id";

fn parse_money(column: &str, value: &str) -> RepoResult<Decimal> {
    value
        .parse::<Decimal>()
        .map_err(|e| RepoError::Database(format!("corrupt {column} value {value:?}: {e}")))
}

fn parse_row(row: SalaryRow) -> RepoResult<Salary> {
    Ok(Salary {
        id: row.id,
        employee_id: row.employee_id,
        month: row.month,
        base_salary: parse_money("base_salary", &row.base_salary)?,
        bonus: parse_money("bonus", &row.bonus)?,
        deductions: parse_money("deductions", &row.deductions)?,
        total_salary: parse_money("total_salary", &row.total_salary)?,
    })
}

fn parse_record(row: SalaryRecordRow) -> RepoResult<SalaryRecord> {
    Ok(SalaryRecord {
        id: row.id,
        employee_id: row.employee_id,
        employee_no: row.employee_no,
        full_name: row.full_name,
        month: row.month,
        base_salary: parse_money("base_salary", &row.base_salary)?,
        bonus: parse_money("bonus", &row.bonus)?,
        deductions: parse_money("deductions", &row.deductions)?,
        total_salary: parse_money("total_salary", &row.total_salary)?,
    })
}

#[derive(Clone)]
pub struct SalaryRepository {
    base: BaseRepository,
}

impl SalaryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// Record a salary for one month; the total is computed here
    pub async fn create(&self, employee_id: i64, data: SalaryCreate) -> RepoResult<Salary> {
        if data.base_salary.is_sign_negative()
            || data.bonus.is_sign_negative()
            || data.deductions.is_sign_negative()
        {
            return Err(RepoError::Validation(
                "Salary amounts must not be negative".to_string(),
            ));
        }

        let total = compute_total(data.base_salary, data.bonus, data.deductions);

        let row: SalaryRow = sqlx::query_as(
            "INSERT INTO salaries (employee_id, month, base_salary, bonus, deductions, total_salary)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(employee_id)
        .bind(&data.month)
        .bind(data.base_salary.to_string())
        .bind(data.bonus.to_string())
        .bind(data.deductions.to_string())
        .bind(total.to_string())
        .fetch_one(self.base.pool())
        .await?;

        parse_row(row)
    }

    /// Latest records of one employee, newest month first
    pub async fn list_for_employee(&self, employee_id: i64, limit: i64) -> RepoResult<Vec<Salary>> {
        let rows: Vec<SalaryRow> = sqlx::query_as(
            "SELECT * FROM salaries WHERE employee_id = ? ORDER BY month DESC LIMIT ?",
        )
        .bind(employee_id)
        .bind(limit)
        .fetch_all(self.base.pool())
        .await?;

        rows.into_iter().map(parse_row).collect()
    }

    /// All records joined with the employee, newest month first (exports)
    pub async fn list_all(&self) -> RepoResult<Vec<SalaryRecord>> {
        let rows: Vec<SalaryRecordRow> =
            sqlx::query_as(&format!("{RECORD_SELECT} ORDER BY s.month DESC, p.employee_no"))
                .fetch_all(self.base.pool())
                .await?;

        rows.into_iter().map(parse_record).collect()
    }

    /// Average of total_salary across a department, computed with Decimal
    ///
    /// Returns None when the department has no salary records
    pub async fn average_total_for_department(
        &self,
        department_id: i64,
    ) -> RepoResult<Option<Decimal>> {
        let totals: Vec<String> = sqlx::query_scalar(
            "SELECT s.total_salary FROM salaries s
             JOIN employee_profiles p ON p.id = s.employee_id
             WHERE p.department_id = ?",
        )
        .bind(department_id)
        .fetch_all(self.base.pool())
        .await?;

        if totals.is_empty() {
            return Ok(None);
        }

        let mut sum = Decimal::ZERO;
        for t in &totals {
            sum += parse_money("total_salary", t)?;
        }
        let avg = sum / Decimal::from(totals.len() as i64);
        Ok(Some(avg.round_dp(2)))
    }
}
