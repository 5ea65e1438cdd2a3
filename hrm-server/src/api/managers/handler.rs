//! Manager Account Handlers
//!
//! Creates accounts carrying the Manager role. Department assignment
//! happens on the department itself (`manager_id`), not here.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::UserCreate;
use crate::db::repository::{RepoError, UserRepository, user::ManagerInfo};
use crate::utils::validation::validate_payload;
use crate::utils::{ApiResponse, AppError, AppResult, ok};
use shared::client::UserInfo;
use shared::{ErrorCode, Role};

pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<ApiResponse<Vec<ManagerInfo>>>> {
    let repo = UserRepository::new(state.pool().clone());
    let managers = repo.list_managers().await?;
    Ok(ok(managers))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<ApiResponse<UserInfo>>> {
    validate_payload(&payload)?;

    let repo = UserRepository::new(state.pool().clone());
    let user = repo
        .create(payload, &[Role::Manager])
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::new(ErrorCode::UsernameExists),
            other => AppError::from(other),
        })?;

    tracing::info!(id = user.id, username = %user.username, "Manager account created");
    Ok(ok(UserInfo {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        roles: vec![Role::Manager.as_str().to_string()],
        is_superuser: false,
    }))
}
