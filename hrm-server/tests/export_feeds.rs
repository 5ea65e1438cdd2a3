//! Export downloads and the calendar feed

mod common;

use http::{Method, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::json;

async fn seed_activity(app: &common::TestApp) -> common::Team {
    let admin = app.admin_token().await;
    let team = common::spawn_team(app, &admin, "feed").await;
    app.request(
        Method::POST,
        &format!("/api/manager/attendance/{}", team.employee_id),
        Some(&team.manager_token),
        Some(json!({ "date": "2025-02-03", "status": "Present", "note": "On site" })),
    )
    .await;
    app.request(
        Method::POST,
        &format!("/api/manager/salary/{}", team.employee_id),
        Some(&team.manager_token),
        Some(json!({ "month": "2025-02", "base_salary": "50000", "bonus": "2000", "deductions": "500" })),
    )
    .await;
    team
}

#[tokio::test]
async fn attendance_csv_download() {
    let app = common::spawn().await;
    let team = seed_activity(&app).await;

    let response = app
        .send(
            Method::GET,
            "/api/export/attendance/csv",
            Some(&team.manager_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv"
    );
    assert!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .contains("attendance.csv")
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "EMP ID,Name,Date,Status,Note");
    assert_eq!(
        lines.next().unwrap(),
        "EMP0001,Employee emp_feed,2025-02-03,Present,On site"
    );
}

#[tokio::test]
async fn salary_workbook_download() {
    let app = common::spawn().await;
    let team = seed_activity(&app).await;

    let response = app
        .send(
            Method::GET,
            "/api/export/salary/excel",
            Some(&team.manager_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    // XLSX is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn salary_pdf_download() {
    let app = common::spawn().await;
    let team = seed_activity(&app).await;

    let response = app
        .send(
            Method::GET,
            "/api/export/salary/pdf",
            Some(&team.employee_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..5], b"%PDF-");
}

#[tokio::test]
async fn calendar_feed_shape() {
    let app = common::spawn().await;
    let team = seed_activity(&app).await;

    let (status, body) = app
        .request(
            Method::GET,
            "/api/calendar/events",
            Some(&team.employee_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Raw array, no response envelope
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "EMP0001 - Present");
    assert_eq!(events[0]["start"], "2025-02-03");
    assert_eq!(events[0]["allDay"], true);
}
