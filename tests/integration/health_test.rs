//! Health endpoint.

use http::StatusCode;

use crate::require_test_db;

#[tokio::test]
async fn test_health_reports_connected_database() {
    let app = require_test_db!();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
