//! Integration tests for the GET /health endpoint.

use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn health_reports_healthy() {
    let client = spawn_app().await;

    let result = client.health().await;

    assert_success(&result);
    let response = result.unwrap();
    assert_eq!(response.status, "healthy");
    assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
}
