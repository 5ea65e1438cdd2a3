//! Employee Self-Service API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use crate::auth::require_role;
use crate::core::ServerState;
use shared::Role;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/employee/dashboard", get(handler::dashboard))
        .route("/api/employee/profile", put(handler::update_profile))
        .route("/api/employee/leave", post(handler::apply_leave))
        .route_layer(middleware::from_fn(require_role(Role::Employee)))
}
