//! Department API Module (Admin)

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_role;
use crate::core::ServerState;
use shared::Role;

/// Department router; every route requires the Admin role
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/admin/departments",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/admin/departments/{id}",
            put(handler::update).delete(handler::delete),
        )
        .route_layer(middleware::from_fn(require_role(Role::Admin)))
}
