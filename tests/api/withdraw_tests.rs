//! Integration tests for the POST /users/{id}/withdraw endpoint.

use reqwest::StatusCode;
use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn withdraw_records_negative_cents() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();

    let result = client.withdraw("1", "2.3").await;

    assert_success(&result);
    assert_eq!(result.unwrap().amount_in_cents, -230);
}

#[rstest]
#[case("-2.3")]
#[case("+2.3")]
#[tokio::test]
async fn withdraw_rejects_pre_signed_amounts(#[case] amount: &str) {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();

    let result = client.withdraw("1", amount).await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[rstest]
#[tokio::test]
async fn withdraw_from_missing_user_is_404() {
    let client = spawn_app().await;

    let result = client.withdraw("999", "2.3").await;

    assert_api_error(&result, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn withdraw_lowers_the_balance() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();
    client.deposit("1", "10.00").await.unwrap();

    client.withdraw("1", "3.25").await.unwrap();

    let balance = client.get_balance("1").await.unwrap();
    assert_eq!(balance.balance_in_cents, 675);
}
