//! Department Repository

use sqlx::SqlitePool;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Department, DepartmentCreate, DepartmentUpdate, DepartmentWithCount};

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            base: BaseRepository::new(pool),
        }
    }

    /// All departments with manager name and employee count
    pub async fn find_all(&self) -> RepoResult<Vec<DepartmentWithCount>> {
        let departments = sqlx::query_as(
            "SELECT d.id, d.name, d.manager_id, u.full_name AS manager_name,
                    (SELECT COUNT(*) FROM employee_profiles p WHERE p.department_id = d.id)
                        AS employee_count
             FROM departments d
             LEFT JOIN users u ON u.id = d.manager_id
             ORDER BY d.name",
        )
        .fetch_all(self.base.pool())
        .await?;
        Ok(departments)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Department>> {
        let department = sqlx::query_as("SELECT id, name, manager_id FROM departments WHERE id = ?")
            .bind(id)
            .fetch_optional(self.base.pool())
            .await?;
        Ok(department)
    }

    pub async fn create(&self, data: DepartmentCreate) -> RepoResult<Department> {
        let department = sqlx::query_as(
            "INSERT INTO departments (name, manager_id) VALUES (?, ?)
             RETURNING id, name, manager_id",
        )
        .bind(&data.name)
        .bind(data.manager_id)
        .fetch_one(self.base.pool())
        .await?;
        Ok(department)
    }

    pub async fn update(&self, id: i64, data: DepartmentUpdate) -> RepoResult<Department> {
        // manager_id: outer None = keep, Some(None) binds NULL and unassigns
        let department = match data.manager_id {
            Some(manager_id) => {
                sqlx::query_as(
                    "UPDATE departments
                     SET name = COALESCE(?, name),
                         manager_id = ?
                     WHERE id = ?
                     RETURNING id, name, manager_id",
                )
                .bind(data.name)
                .bind(manager_id)
                .bind(id)
                .fetch_optional(self.base.pool())
                .await?
            }
            None => {
                sqlx::query_as(
                    "UPDATE departments
                     SET name = COALESCE(?, name)
                     WHERE id = ?
                     RETURNING id, name, manager_id",
                )
                .bind(data.name)
                .bind(id)
                .fetch_optional(self.base.pool())
                .await?
            }
        };

        department.ok_or_else(|| RepoError::NotFound(format!("department {id}")))
    }

    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = ?")
            .bind(id)
            .execute(self.base.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
