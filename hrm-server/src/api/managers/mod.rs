//! Manager Account API Module (Admin)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_role;
use crate::core::ServerState;
use shared::Role;

/// Manager provisioning router; Admin only
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/managers",
            get(handler::list).post(handler::create),
        )
        .route_layer(middleware::from_fn(require_role(Role::Admin)))
}
