//! Employee API Module (Admin)

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_role;
use crate::core::ServerState;
use shared::Role;

/// Employee directory router; every route requires the Admin role
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/employees",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/admin/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route_layer(middleware::from_fn(require_role(Role::Admin)))
}
