//! Job catalog visibility and admin-only creation.

use http::StatusCode;

use crate::require_test_db;

#[tokio::test]
async fn test_admin_creates_job() {
    let app = require_test_db!();
    let token = app.login_as("admin").await;

    let response = app
        .request(
            "POST",
            "/api/admin/jobs",
            Some(serde_json::json!({
                "title": "Backend Engineer",
                "description": "Rust services",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["title"], "Backend Engineer");
    assert!(response.body["data"]["id"].is_string());
}

#[tokio::test]
async fn test_student_cannot_create_job() {
    let app = require_test_db!();
    let token = app.login_as("student").await;

    let response = app
        .request(
            "POST",
            "/api/admin/jobs",
            Some(serde_json::json!({
                "title": "Backend Engineer",
                "description": "Rust services",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn test_jobs_visible_to_students() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Visible Role").await;

    let student_token = app.login_as("student").await;
    let response = app
        .request("GET", "/api/jobs", None, Some(&student_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let jobs = response.body["data"].as_array().expect("Jobs array");
    assert!(jobs.iter().any(|job| job["id"] == job_id.as_str()));
}

#[tokio::test]
async fn test_jobs_require_authentication() {
    let app = require_test_db!();

    let response = app.request("GET", "/api/jobs", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_job_rejects_blank_title() {
    let app = require_test_db!();
    let token = app.login_as("admin").await;

    let response = app
        .request(
            "POST",
            "/api/admin/jobs",
            Some(serde_json::json!({
                "title": "",
                "description": "Rust services",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}
