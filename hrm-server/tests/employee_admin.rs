//! Admin-side department and employee management

mod common;

use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn employee_ids_are_sequential() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let dept = app.create_department(&admin, "Engineering", None).await;

    let first = app.create_employee(&admin, "alice", Some(dept)).await;
    let second = app.create_employee(&admin, "bob", Some(dept)).await;
    let third = app.create_employee(&admin, "carol", Some(dept)).await;

    assert_eq!(first["employee_id"], "EMP0001");
    assert_eq!(second["employee_id"], "EMP0002");
    assert_eq!(third["employee_id"], "EMP0003");
}

#[tokio::test]
async fn concurrent_creation_allocates_distinct_ids() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let dept = app.create_department(&admin, "Ops", None).await;

    let (a, b) = tokio::join!(
        app.create_employee(&admin, "worker_a", Some(dept)),
        app.create_employee(&admin, "worker_b", Some(dept)),
    );

    let id_a = a["employee_id"].as_str().unwrap().to_string();
    let id_b = b["employee_id"].as_str().unwrap().to_string();
    assert_ne!(id_a, id_b);
    let mut ids = vec![id_a, id_b];
    ids.sort();
    assert_eq!(ids, vec!["EMP0001", "EMP0002"]);
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;

    app.create_employee(&admin, "unique_name", None).await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/admin/employees",
            Some(&admin),
            Some(json!({
                "username": "unique_name",
                "password": "password1",
                "full_name": "Second Try",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn unknown_department_is_rejected_up_front() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/admin/employees",
            Some(&admin),
            Some(json!({
                "username": "orphan",
                "password": "password1",
                "full_name": "No Home",
                "department_id": 9999,
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn validation_errors_carry_field_details() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/admin/employees",
            Some(&admin),
            Some(json!({
                "username": "shortpw",
                "password": "short",
                "full_name": "Short Password",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert!(body["details"]["password"].is_string());
}

#[tokio::test]
async fn employee_update_and_delete() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let dept = app.create_department(&admin, "Sales", None).await;
    let employee = app.create_employee(&admin, "dave", Some(dept)).await;
    let id = employee["id"].as_i64().unwrap();

    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/admin/employees/{id}"),
            Some(&admin),
            Some(json!({ "designation": "Senior Rep", "phone": "555-0101" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "update failed: {body}");
    assert_eq!(body["data"]["designation"], "Senior Rep");
    assert_eq!(body["data"]["phone"], "555-0101");
    // Untouched fields survive a partial update
    assert_eq!(body["data"]["employee_id"], "EMP0001");

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/admin/employees/{id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(
            Method::GET,
            &format!("/api/admin/employees/{id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn department_names_are_unique() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    app.create_department(&admin, "Finance", None).await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/admin/departments",
            Some(&admin),
            Some(json!({ "name": "Finance" })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn a_manager_runs_at_most_one_department() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let manager = app.create_manager(&admin, "busy_manager").await;
    app.create_department(&admin, "First", Some(manager)).await;

    let (status, body) = app
        .request(
            Method::POST,
            "/api/admin/departments",
            Some(&admin),
            Some(json!({ "name": "Second", "manager_id": manager })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3004);
}

#[tokio::test]
async fn unassigning_a_manager_frees_them_for_another_department() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let manager = app.create_manager(&admin, "mobile_mgr").await;
    let first = app.create_department(&admin, "Origin", Some(manager)).await;

    // An update that omits manager_id leaves the assignment alone
    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/admin/departments/{first}"),
            Some(&admin),
            Some(json!({ "name": "Origin Renamed" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "rename failed: {body}");
    assert_eq!(body["data"]["manager_id"], manager);

    // An explicit null clears it
    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/admin/departments/{first}"),
            Some(&admin),
            Some(json!({ "manager_id": null })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "unassign failed: {body}");
    assert!(body["data"]["manager_id"].is_null());

    // The unique manager index no longer blocks moving them elsewhere
    let (status, body) = app
        .request(
            Method::POST,
            "/api/admin/departments",
            Some(&admin),
            Some(json!({ "name": "Destination", "manager_id": manager })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "reassign failed: {body}");
    assert_eq!(body["data"]["manager_id"], manager);
}

#[tokio::test]
async fn clearing_an_employees_department() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let dept = app.create_department(&admin, "Warehouse", None).await;
    let employee = app.create_employee(&admin, "drifter", Some(dept)).await;
    let id = employee["id"].as_i64().unwrap();

    // Omitting department_id keeps the assignment
    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/admin/employees/{id}"),
            Some(&admin),
            Some(json!({ "designation": "Picker" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "update failed: {body}");
    assert_eq!(body["data"]["department_id"], dept);

    // An explicit null detaches the employee
    let (status, body) = app
        .request(
            Method::PUT,
            &format!("/api/admin/employees/{id}"),
            Some(&admin),
            Some(json!({ "department_id": null })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "detach failed: {body}");
    assert!(body["data"]["department_id"].is_null());
    assert!(body["data"]["department"].is_null());
}

#[tokio::test]
async fn department_listing_reports_headcount() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let manager = app.create_manager(&admin, "count_mgr").await;
    let dept = app
        .create_department(&admin, "Counted", Some(manager))
        .await;
    app.create_employee(&admin, "count_a", Some(dept)).await;
    app.create_employee(&admin, "count_b", Some(dept)).await;
    app.create_department(&admin, "Empty", None).await;

    let (status, body) = app
        .request(Method::GET, "/api/admin/departments", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let departments = body["data"].as_array().unwrap();
    assert_eq!(departments.len(), 2);

    let counted = departments
        .iter()
        .find(|d| d["name"] == "Counted")
        .unwrap();
    assert_eq!(counted["employee_count"], 2);
    assert_eq!(counted["manager_name"], "Manager count_mgr");

    let empty = departments.iter().find(|d| d["name"] == "Empty").unwrap();
    assert_eq!(empty["employee_count"], 0);
    assert_eq!(empty["manager_name"], serde_json::Value::Null);
}

#[tokio::test]
async fn department_delete_detaches_employees() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let dept = app.create_department(&admin, "Doomed", None).await;
    let employee = app.create_employee(&admin, "survivor", Some(dept)).await;
    let id = employee["id"].as_i64().unwrap();

    let (status, _) = app
        .request(
            Method::DELETE,
            &format!("/api/admin/departments/{dept}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .request(
            Method::GET,
            &format!("/api/admin/employees/{id}"),
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["department_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn admin_dashboard_aggregates() {
    let app = common::spawn().await;
    let admin = app.admin_token().await;
    let team = common::spawn_team(&app, &admin, "dash").await;
    app.create_employee(&admin, "dash_b", Some(team.department_id))
        .await;
    app.apply_leave(&team.employee_token, "2025-03-03", "2025-03-04")
        .await;

    let (status, body) = app
        .request(Method::GET, "/api/admin/dashboard", Some(&admin), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employee_total"], 2);
    assert_eq!(body["data"]["leave_pending"], 1);
    assert_eq!(body["data"]["departments"].as_array().unwrap().len(), 1);
}
