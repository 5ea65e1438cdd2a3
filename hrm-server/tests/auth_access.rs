//! Authentication and role guard coverage

mod common;

use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = common::spawn().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "admin", "password": "wrong-password" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn login_rejects_unknown_user() {
    let app = common::spawn().await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "username": "ghost", "password": "whatever1" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn protected_routes_require_token() {
    let app = common::spawn().await;
    let (status, _) = app
        .request(Method::GET, "/api/admin/departments", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .request(Method::GET, "/api/calendar/events", None, None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let app = common::spawn().await;
    let (status, _) = app
        .request(
            Method::GET,
            "/api/admin/departments",
            Some("not.a.token"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let app = common::spawn().await;
    let (status, body) = app.request(Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_routes_reject_other_roles() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "guard").await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/admin/departments",
            Some(&team.manager_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2003);

    let (status, _) = app
        .request(
            Method::GET,
            "/api/admin/departments",
            Some(&team.employee_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn manager_routes_reject_employees() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "mgr_guard").await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/manager/dashboard",
            Some(&team.employee_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2002);
}

#[tokio::test]
async fn me_returns_current_account() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .request(Method::GET, "/api/auth/me", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    // Auth endpoints return the DTO directly, without the envelope
    assert_eq!(body["username"], "admin");
    assert_eq!(body["is_superuser"], true);
}

#[tokio::test]
async fn superuser_passes_role_guards() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;

    // admin carries no Manager role; the superuser flag bypasses the guard
    let (status, body) = app
        .request(Method::GET, "/api/manager/dashboard", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    // No managed department: the scoped view is empty rather than an error
    assert_eq!(body["data"]["department_id"], serde_json::Value::Null);
    assert_eq!(body["data"]["employees"].as_array().unwrap().len(), 0);
}
