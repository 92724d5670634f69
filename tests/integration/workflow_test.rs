//! Application submission and decision workflow.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::require_test_db;

#[tokio::test]
async fn test_student_applies_to_job() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Apply Target").await;

    let student_token = app.login_as("student").await;
    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["status"], "pending");
    assert_eq!(response.body["data"]["job_id"], job_id.as_str());
    assert!(response.body["data"]["decided_at"].is_null());
}

#[tokio::test]
async fn test_duplicate_application_conflicts() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Popular Role").await;

    let student_token = app.login_as("student").await;
    let first = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "ALREADY_APPLIED");
}

#[tokio::test]
async fn test_apply_to_missing_job() {
    let app = require_test_db!();
    let student_token = app.login_as("student").await;

    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{}/apply", Uuid::new_v4()),
            None,
            Some(&student_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_cannot_apply() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Admin Temptation").await;

    let response = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_student_sees_only_own_applications() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Shared Role").await;

    let first_token = app.login_as("student").await;
    let second_token = app.login_as("student").await;

    let first_apply = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&first_token),
        )
        .await;
    assert_eq!(first_apply.status, StatusCode::CREATED);
    let first_application_id = first_apply.body["data"]["id"].clone();

    let second_list = app
        .request("GET", "/api/applications", None, Some(&second_token))
        .await;
    assert_eq!(second_list.status, StatusCode::OK);
    let second_applications = second_list.body["data"].as_array().expect("array");
    assert!(
        second_applications
            .iter()
            .all(|a| a["id"] != first_application_id)
    );

    let first_list = app
        .request("GET", "/api/applications", None, Some(&first_token))
        .await;
    let first_applications = first_list.body["data"].as_array().expect("array");
    assert!(
        first_applications
            .iter()
            .any(|a| a["id"] == first_application_id)
    );
    // Joined job data rides along.
    assert!(
        first_applications
            .iter()
            .any(|a| a["job_title"] == "Shared Role")
    );
}

#[tokio::test]
async fn test_admin_lists_all_applications_with_details() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Detailed Role").await;

    let student_token = app.login_as("student").await;
    let apply = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    let application_id = apply.body["data"]["id"].clone();

    let response = app
        .request("GET", "/api/admin/applications", None, Some(&admin_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let applications = response.body["data"].as_array().expect("array");
    let entry = applications
        .iter()
        .find(|a| a["id"] == application_id)
        .expect("Application visible to admin");
    assert!(entry["applicant_name"].is_string());
    assert!(entry["applicant_email"].is_string());
    assert_eq!(entry["job_title"], "Detailed Role");
}

#[tokio::test]
async fn test_admin_accepts_application() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Decision Role").await;

    let student_token = app.login_as("student").await;
    let apply = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    let application_id = apply.body["data"]["id"].as_str().expect("id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/applications/{application_id}/status"),
            Some(json!({ "status": "accepted" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "accepted");
    assert!(response.body["data"]["decided_at"].is_string());

    // The decision shows up in both the student and admin listings.
    let student_list = app
        .request("GET", "/api/applications", None, Some(&student_token))
        .await;
    let own = student_list.body["data"].as_array().expect("array");
    assert!(
        own.iter()
            .any(|a| a["id"] == application_id.as_str() && a["status"] == "accepted")
    );

    let admin_list = app
        .request("GET", "/api/admin/applications", None, Some(&admin_token))
        .await;
    let all = admin_list.body["data"].as_array().expect("array");
    assert!(
        all.iter()
            .any(|a| a["id"] == application_id.as_str() && a["status"] == "accepted")
    );
}

#[tokio::test]
async fn test_decisions_are_terminal() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "One Shot Role").await;

    let student_token = app.login_as("student").await;
    let apply = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    let application_id = apply.body["data"]["id"].as_str().expect("id").to_string();
    let status_path = format!("/api/admin/applications/{application_id}/status");

    let reject = app
        .request(
            "PUT",
            &status_path,
            Some(json!({ "status": "rejected" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(reject.status, StatusCode::OK);

    // Flipping a decided application fails, as does resetting it.
    let flip = app
        .request(
            "PUT",
            &status_path,
            Some(json!({ "status": "accepted" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(flip.status, StatusCode::CONFLICT);
    assert_eq!(flip.body["error"], "CONFLICT");

    let reset = app
        .request(
            "PUT",
            &status_path,
            Some(json!({ "status": "pending" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(reset.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_concurrent_decisions_only_one_wins() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Contested Role").await;

    let student_token = app.login_as("student").await;
    let apply = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    let application_id = apply.body["data"]["id"].as_str().expect("id").to_string();
    let status_path = format!("/api/admin/applications/{application_id}/status");

    // Race two opposite decisions; the pending-row guard in the UPDATE
    // lets exactly one through regardless of interleaving.
    let (accept, reject) = tokio::join!(
        app.request(
            "PUT",
            &status_path,
            Some(json!({ "status": "accepted" })),
            Some(&admin_token),
        ),
        app.request(
            "PUT",
            &status_path,
            Some(json!({ "status": "rejected" })),
            Some(&admin_token),
        ),
    );

    let outcomes = [accept.status, reject.status];
    assert!(outcomes.contains(&StatusCode::OK), "{outcomes:?}");
    assert!(outcomes.contains(&StatusCode::CONFLICT), "{outcomes:?}");

    // The stored status belongs to whichever request won the row.
    let winner = if accept.status == StatusCode::OK {
        "accepted"
    } else {
        "rejected"
    };
    let list = app
        .request("GET", "/api/admin/applications", None, Some(&admin_token))
        .await;
    let all = list.body["data"].as_array().expect("array");
    let entry = all
        .iter()
        .find(|a| a["id"] == application_id.as_str())
        .expect("entry");
    assert_eq!(entry["status"], winner);
}

#[tokio::test]
async fn test_unknown_status_value_rejected() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/applications/{}/status", Uuid::new_v4()),
            Some(json!({ "status": "archived" })),
            Some(&admin_token),
        )
        .await;

    // Rejected at deserialization, before any lookup.
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_decide_missing_application() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/applications/{}/status", Uuid::new_v4()),
            Some(json!({ "status": "accepted" })),
            Some(&admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_student_cannot_decide() {
    let app = require_test_db!();
    let admin_token = app.login_as("admin").await;
    let job_id = app.create_job(&admin_token, "Guarded Role").await;

    let student_token = app.login_as("student").await;
    let apply = app
        .request(
            "POST",
            &format!("/api/jobs/{job_id}/apply"),
            None,
            Some(&student_token),
        )
        .await;
    let application_id = apply.body["data"]["id"].as_str().expect("id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/applications/{application_id}/status"),
            Some(json!({ "status": "accepted" })),
            Some(&student_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
