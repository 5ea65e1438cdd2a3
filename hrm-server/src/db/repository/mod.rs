//! Repository Module
//!
//! Provides CRUD operations over the SQLite tables, one repository per
//! aggregate. Uniqueness races are resolved by the database indexes and
//! surface here as [`RepoError::Duplicate`].

pub mod attendance;
pub mod department;
pub mod employee;
pub mod leave;
pub mod notification;
pub mod salary;
pub mod user;

// Re-exports
pub use attendance::AttendanceRepository;
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use leave::{DecideOutcome, LeaveRepository};
pub use notification::{NOTIFICATION_LIMIT, NotificationRepository};
pub use salary::SalaryRepository;
pub use user::UserRepository;

use sqlx::SqlitePool;
use thiserror::Error;

use crate::utils::AppError;
use shared::ErrorCode;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".to_string()),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with a pool handle
#[derive(Clone)]
pub struct BaseRepository {
    pool: SqlitePool,
}

impl BaseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
