//! Admin Dashboard API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_role;
use crate::core::ServerState;
use shared::Role;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/dashboard", get(handler::dashboard))
        .route_layer(middleware::from_fn(require_role(Role::Admin)))
}
