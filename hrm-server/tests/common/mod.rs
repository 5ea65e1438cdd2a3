//! Shared test harness
//!
//! Boots a full application (temp SQLite + middleware stack) and drives
//! it in-process through `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use hrm_server::api::build_app;
use hrm_server::core::{Config, ServerState};

pub struct TestApp {
    pub app: Router,
    _dir: TempDir,
}

/// Boot a fresh application over an empty temp database.
///
/// The superuser account `admin` / `admin123` is provisioned on first run.
pub async fn spawn() -> TestApp {
    let dir = TempDir::new().unwrap();
    let config = Config::with_overrides(dir.path().join("hrm.db"), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    TestApp {
        app: build_app(state),
        _dir: dir,
    }
}

impl TestApp {
    /// Send a request and collect the raw response.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> http::Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.app.clone().oneshot(request).await.unwrap()
    }

    /// Send a request and parse the JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.send(method, path, token, body).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login("admin", "admin123").await
    }

    /// Create a department, returning its id.
    pub async fn create_department(
        &self,
        admin: &str,
        name: &str,
        manager_id: Option<i64>,
    ) -> i64 {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/admin/departments",
                Some(admin),
                Some(json!({ "name": name, "manager_id": manager_id })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create department failed: {body}");
        body["data"]["id"].as_i64().unwrap()
    }

    /// Create a manager account, returning its user id.
    pub async fn create_manager(&self, admin: &str, username: &str) -> i64 {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/admin/managers",
                Some(admin),
                Some(json!({
                    "username": username,
                    "password": "password1",
                    "full_name": format!("Manager {username}"),
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create manager failed: {body}");
        body["data"]["id"].as_i64().unwrap()
    }

    /// Create an employee through the admin API, returning its profile.
    pub async fn create_employee(
        &self,
        admin: &str,
        username: &str,
        department_id: Option<i64>,
    ) -> Value {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/admin/employees",
                Some(admin),
                Some(json!({
                    "username": username,
                    "password": "password1",
                    "full_name": format!("Employee {username}"),
                    "department_id": department_id,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create employee failed: {body}");
        body["data"].clone()
    }

    /// Apply for leave as an employee, returning the leave id.
    pub async fn apply_leave(&self, employee: &str, start: &str, end: &str) -> i64 {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/employee/leave",
                Some(employee),
                Some(json!({
                    "start_date": start,
                    "end_date": end,
                    "reason": "Family matters",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "apply leave failed: {body}");
        body["data"]["id"].as_i64().unwrap()
    }
}

/// A department with its own manager and one employee, ready to use.
pub struct Team {
    pub department_id: i64,
    pub manager_token: String,
    pub employee_token: String,
    pub employee_id: i64,
}

/// Provision a department, a manager for it and one employee inside it.
///
/// `tag` keeps usernames and department names unique across teams.
pub async fn spawn_team(app: &TestApp, admin: &str, tag: &str) -> Team {
    let manager_user = app.create_manager(admin, &format!("mgr_{tag}")).await;
    let department_id = app
        .create_department(admin, &format!("Dept {tag}"), Some(manager_user))
        .await;
    let profile = app
        .create_employee(admin, &format!("emp_{tag}"), Some(department_id))
        .await;
    Team {
        department_id,
        manager_token: app.login(&format!("mgr_{tag}"), "password1").await,
        employee_token: app.login(&format!("emp_{tag}"), "password1").await,
        employee_id: profile["id"].as_i64().unwrap(),
    }
}
