//! Assertion helpers shared by the API tests.

use reqwest::StatusCode;

use super::client::{ApiClientError, ApiResult};

/// Asserts that a request succeeded, printing the failure otherwise.
pub fn assert_success<T: std::fmt::Debug>(result: &ApiResult<T>) {
    assert!(result.is_ok(), "expected success, got {result:?}");
}

/// Asserts that a request failed with the given HTTP status and API error
/// code.
pub fn assert_api_error<T: std::fmt::Debug>(
    result: &ApiResult<T>,
    expected_status: StatusCode,
    expected_code: &str,
) {
    match result {
        Err(ApiClientError::Api { status, body }) => {
            assert_eq!(*status, expected_status, "unexpected status: {body:?}");
            assert_eq!(body.code, expected_code, "unexpected code: {body:?}");
        }
        other => panic!("expected API error {expected_status}/{expected_code}, got {other:?}"),
    }
}
