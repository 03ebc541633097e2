//! Integration tests for transaction lookup endpoints.

use reqwest::StatusCode;
use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn get_transactions_lists_a_users_movements_in_order() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();
    client.create_user(&UserFactory::jane()).await.unwrap();
    client.deposit("1", "1.00").await.unwrap();
    client.deposit("2", "5.00").await.unwrap();
    client.withdraw("1", "0.25").await.unwrap();

    let result = client.get_transactions("1").await;

    assert_success(&result);
    let transactions = result.unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].amount_in_cents, 100);
    assert_eq!(transactions[1].amount_in_cents, -25);
}

#[rstest]
#[tokio::test]
async fn get_transactions_of_missing_user_is_404() {
    let client = spawn_app().await;

    let result = client.get_transactions("999").await;

    assert_api_error(&result, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn get_transaction_returns_recorded_movement() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();
    let recorded = client.deposit("1", "2.3").await.unwrap();

    let result = client.get_transaction(&recorded.id.to_string()).await;

    assert_success(&result);
    let transaction = result.unwrap();
    assert_eq!(transaction.id, recorded.id);
    assert_eq!(transaction.amount_in_cents, 230);
}

#[rstest]
#[tokio::test]
async fn get_transaction_missing_id_is_404() {
    let client = spawn_app().await;

    let result = client.get_transaction("42").await;

    assert_api_error(&result, StatusCode::NOT_FOUND, "NOT_FOUND");
}
