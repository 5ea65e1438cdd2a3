//! Manager workflows: attendance, salary, department scoping

mod common;

use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn salary_totals_are_computed_server_side() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "pay").await;

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/salary/{}", team.employee_id),
            Some(&team.manager_token),
            Some(json!({
                "month": "2025-02",
                "base_salary": "50000",
                "bonus": "2000",
                "deductions": "500",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "salary failed: {body}");
    assert_eq!(body["data"]["total_salary"], "51500");
    assert_eq!(body["data"]["month"], "2025-02");
}

#[tokio::test]
async fn salary_is_once_per_month() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "pay_dup").await;
    let payload = json!({ "month": "2025-02", "base_salary": "40000" });

    let (status, _) = app
        .request(
            Method::POST,
            &format!("/api/manager/salary/{}", team.employee_id),
            Some(&team.manager_token),
            Some(payload.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/salary/{}", team.employee_id),
            Some(&team.manager_token),
            Some(payload),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7002);
}

#[tokio::test]
async fn negative_salary_amounts_are_rejected() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "pay_neg").await;

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/salary/{}", team.employee_id),
            Some(&team.manager_token),
            Some(json!({ "month": "2025-02", "base_salary": "-100" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "expected rejection: {body}");
}

#[tokio::test]
async fn bad_month_format_is_rejected() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "pay_month").await;

    for month in ["2025-13", "202502", "2025-2"] {
        let (status, _) = app
            .request(
                Method::POST,
                &format!("/api/manager/salary/{}", team.employee_id),
                Some(&team.manager_token),
                Some(json!({ "month": month, "base_salary": "40000" })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "month {month} accepted");
    }
}

#[tokio::test]
async fn attendance_is_once_per_day() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "att").await;
    let payload = json!({ "date": "2025-02-03", "status": "Present" });

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/attendance/{}", team.employee_id),
            Some(&team.manager_token),
            Some(payload.clone()),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "attendance failed: {body}");
    assert_eq!(body["data"]["status"], "Present");

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/attendance/{}", team.employee_id),
            Some(&team.manager_token),
            Some(payload),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 5002);
}

#[tokio::test]
async fn managers_cannot_reach_other_departments() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let ours = common::spawn_team(&app, &admin, "scope_a").await;
    let theirs = common::spawn_team(&app, &admin, "scope_b").await;

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/attendance/{}", theirs.employee_id),
            Some(&ours.manager_token),
            Some(json!({ "date": "2025-02-03", "status": "Present" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2004);

    let (status, body) = app
        .request(
            Method::POST,
            &format!("/api/manager/salary/{}", theirs.employee_id),
            Some(&ours.manager_token),
            Some(json!({ "month": "2025-02", "base_salary": "40000" })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 2004);
}

#[tokio::test]
async fn unassigned_manager_has_no_scope() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    app.create_manager(&admin, "floating").await;
    let token = app.login("floating", "password1").await;

    let (status, body) = app
        .request(Method::GET, "/api/manager/dashboard", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 3003);
}

#[tokio::test]
async fn manager_hires_into_own_department_only() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let ours = common::spawn_team(&app, &admin, "hire_a").await;
    let theirs = common::spawn_team(&app, &admin, "hire_b").await;

    // The payload points at another department; the scope wins
    let (status, body) = app
        .request(
            Method::POST,
            "/api/manager/employees",
            Some(&ours.manager_token),
            Some(json!({
                "username": "hijack_try",
                "password": "password1",
                "full_name": "New Hire",
                "department_id": theirs.department_id,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "hire failed: {body}");
    assert_eq!(
        body["data"]["department_id"].as_i64().unwrap(),
        ours.department_id
    );
}

#[tokio::test]
async fn manager_dashboard_is_department_scoped() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let ours = common::spawn_team(&app, &admin, "dash_a").await;
    let theirs = common::spawn_team(&app, &admin, "dash_b").await;

    // Activity in our department
    app.request(
        Method::POST,
        &format!("/api/manager/attendance/{}", ours.employee_id),
        Some(&ours.manager_token),
        Some(json!({ "date": "2025-02-03", "status": "Present" })),
    )
    .await;
    app.request(
        Method::POST,
        &format!("/api/manager/salary/{}", ours.employee_id),
        Some(&ours.manager_token),
        Some(json!({ "month": "2025-02", "base_salary": "50000", "bonus": "2000", "deductions": "500" })),
    )
    .await;
    // Noise in the other department
    app.request(
        Method::POST,
        &format!("/api/manager/attendance/{}", theirs.employee_id),
        Some(&theirs.manager_token),
        Some(json!({ "date": "2025-02-03", "status": "Absent" })),
    )
    .await;
    app.apply_leave(&theirs.employee_token, "2025-03-01", "2025-03-02")
        .await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/manager/dashboard",
            Some(&ours.manager_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["department_id"].as_i64().unwrap(), ours.department_id);
    assert_eq!(data["employees"].as_array().unwrap().len(), 1);
    assert_eq!(data["attendance_count"], 1);
    assert_eq!(data["leaves"].as_array().unwrap().len(), 0);
    let avg: f64 = data["avg_salary"].as_str().unwrap().parse().unwrap();
    assert!((avg - 51500.0).abs() < f64::EPSILON);
}
