//! Integration tests for the POST /users/{id}/deposit endpoint.

use reqwest::StatusCode;
use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn deposit_records_truncated_cents() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();

    let result = client.deposit("1", "10.099").await;

    assert_success(&result);
    let transaction = result.unwrap();
    assert_eq!(transaction.user_id, 1);
    assert_eq!(transaction.amount_in_cents, 1009);
}

#[rstest]
#[tokio::test]
async fn deposit_accepts_negative_amounts_as_withdrawals() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();

    let result = client.deposit("1", "-2.3").await;

    assert_success(&result);
    assert_eq!(result.unwrap().amount_in_cents, -230);
}

#[rstest]
#[tokio::test]
async fn deposit_invalid_amount_is_400() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();

    let result = client.deposit("1", "not-a-number").await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[rstest]
#[tokio::test]
async fn deposit_to_missing_user_is_404() {
    let client = spawn_app().await;

    let result = client.deposit("999", "2.3").await;

    assert_api_error(&result, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn deposit_amount_error_takes_precedence_over_missing_user() {
    let client = spawn_app().await;

    // Neither the user nor the amount is valid; the amount is parsed
    // first, so its failure wins.
    let result = client.deposit("999", "not-a-number").await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
    if let Err(ApiClientError::Api { body, .. }) = result {
        assert_eq!(body.message, "Invalid amount");
    }
}
