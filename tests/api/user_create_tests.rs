//! Integration tests for the POST /users endpoint.

use reqwest::StatusCode;
use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn create_user_normalizes_and_assigns_id() {
    let client = spawn_app().await;

    let result = client.create_user(&UserFactory::john()).await;

    assert_success(&result);
    let user = result.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "John");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.email, "john.doe@email.com");
}

#[rstest]
#[tokio::test]
async fn create_user_ids_are_sequential() {
    let client = spawn_app().await;

    let john = client.create_user(&UserFactory::john()).await.unwrap();
    let jane = client.create_user(&UserFactory::jane()).await.unwrap();

    assert_eq!(john.id, 1);
    assert_eq!(jane.id, 2);
}

#[rstest]
#[tokio::test]
async fn create_user_rejects_short_first_name() {
    let client = spawn_app().await;
    let mut request = UserFactory::john();
    request.first_name = "j".to_string();

    let result = client.create_user(&request).await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    if let Err(ApiClientError::Api { body, .. }) = result {
        assert_eq!(body.message, "Invalid first name");
    }
}

#[rstest]
#[tokio::test]
async fn create_user_reports_first_failing_field() {
    let client = spawn_app().await;
    let mut request = UserFactory::john();
    request.last_name = "d".to_string();
    request.email = "not-an-email".to_string();

    let result = client.create_user(&request).await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    if let Err(ApiClientError::Api { body, .. }) = result {
        assert_eq!(body.message, "Invalid last name");
    }
}

#[rstest]
#[tokio::test]
async fn create_user_rejects_email_without_at_sign() {
    let client = spawn_app().await;
    let mut request = UserFactory::john();
    request.email = "john.doe.email.com".to_string();

    let result = client.create_user(&request).await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}
