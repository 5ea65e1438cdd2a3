//! Authentication Handlers
//!
//! Handles login, logout and current-user lookup

use std::time::Duration;

use axum::{Json, extract::State};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::security_log;

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let users = UserRepository::new(state.pool().clone());
    let user = users.find_by_username(&req.username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error to prevent username enumeration
    let user = match user {
        Some(u) => {
            let password_valid = u
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                security_log!(
                    "WARN",
                    "login_failed",
                    username = req.username.clone(),
                    reason = "invalid_credentials"
                );
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            security_log!(
                "WARN",
                "login_failed",
                username = req.username.clone(),
                reason = "user_not_found"
            );
            return Err(AppError::invalid_credentials());
        }
    };

    let roles = users.roles_of(user.id).await?;

    let token = state
        .get_jwt_service()
        .generate_token(user.id, &user.username, &roles, user.is_superuser)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    security_log!("INFO", "login_success", user_id = user.id, username = user.username.clone());

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user.id,
            username: user.username,
            full_name: user.full_name,
            roles: roles.iter().map(|r| r.as_str().to_string()).collect(),
            is_superuser: user.is_superuser,
        },
    }))
}

/// Current user info (from the validated token + account row)
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> Result<Json<UserInfo>, AppError> {
    let users = UserRepository::new(state.pool().clone());
    let account = users
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| AppError::new(shared::ErrorCode::UserNotFound))?;

    Ok(Json(UserInfo {
        id: account.id,
        username: account.username,
        full_name: account.full_name,
        roles: user.roles.iter().map(|r| r.as_str().to_string()).collect(),
        is_superuser: account.is_superuser,
    }))
}

/// Logout handler
///
/// Tokens are stateless; the client drops its copy. Kept as an endpoint so
/// clients have a uniform call and the event lands in the security log.
pub async fn logout(user: CurrentUser) -> Json<shared::ApiResponse<()>> {
    security_log!("INFO", "logout", user_id = user.id, username = user.username.clone());
    crate::utils::ok_with_message((), "Logged out")
}
