//! Registration, login, logout, and session behavior.

use http::StatusCode;

use crate::helpers::TestApp;
use crate::require_test_db;

#[tokio::test]
async fn test_register_creates_account() {
    let app = require_test_db!();
    let email = TestApp::unique_email("student");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Dana",
                "email": email,
                "password": "password123",
                "role": "student",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], email);
    assert_eq!(response.body["data"]["role"], "student");
    // The stored hash never leaves the server.
    assert!(response.body["data"].get("password_hash").is_none());
    assert!(response.body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_register_normalizes_email_case() {
    let app = require_test_db!();
    let email = TestApp::unique_email("mixedcase");
    let upper = email.to_uppercase();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Dana",
                "email": upper,
                "password": "password123",
                "role": "student",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["email"], email);
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    let app = require_test_db!();
    let email = app.register("First", "student").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Second",
                "email": email,
                "password": "password123",
                "role": "student",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "DUPLICATE_EMAIL");

    // The losing registration must not leave a second row behind.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE email = $1")
        .bind(&email)
        .fetch_one(&app.db_pool)
        .await
        .expect("Count query failed");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = require_test_db!();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Dana",
                "email": TestApp::unique_email("shortpw"),
                "password": "short",
                "role": "student",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_login_success() {
    let app = require_test_db!();
    let email = app.register("Dana", "student").await;

    let token = app.login(&email).await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = require_test_db!();
    let email = app.register("Dana", "student").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = require_test_db!();
    let email = app.register("Dana", "student").await;

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": TestApp::unique_email("nobody"),
                "password": "password123",
            })),
            None,
        )
        .await;

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "wrong-password",
            })),
            None,
        )
        .await;

    // Unknown account and bad password must be indistinguishable.
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_me_returns_current_account() {
    let app = require_test_db!();
    let email = app.register("Dana", "admin").await;
    let token = app.login(&email).await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], email);
    assert_eq!(response.body["data"]["role"], "admin");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = require_test_db!();

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = require_test_db!();
    let email = app.register("Dana", "student").await;
    let token = app.login(&email).await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The token is unexpired but its session is gone.
    let after = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = require_test_db!();

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
